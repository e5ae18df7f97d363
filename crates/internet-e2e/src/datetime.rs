// Date/time helpers for test data generation and date assertions

use chrono::{Datelike, Days, Local, Months, NaiveDate};

/// Today's date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today as `YYYY-MM-DD`.
pub fn today_iso() -> String {
    format_yyyymmdd(today())
}

/// First day of the month containing `date`.
pub fn first_day_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}

/// Last day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let first = first_day_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .expect("in-range date")
}

/// `date` shifted by `days` (negative moves into the past).
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    if days >= 0 {
        date.checked_add_days(Days::new(days as u64))
    } else {
        date.checked_sub_days(Days::new(days.unsigned_abs()))
    }
    .expect("in-range date")
}

/// `date` shifted by whole months, clamping the day to the target month.
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    if months >= 0 {
        date.checked_add_months(Months::new(months as u32))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    }
    .expect("in-range date")
}

/// Absolute number of days between two dates.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days().abs()
}

/// Formats as `MM/DD/YYYY`.
pub fn format_mmddyyyy(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// Formats as `DD/MM/YYYY`.
pub fn format_ddmmyyyy(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// Formats as `YYYY-MM-DD`.
pub fn format_yyyymmdd(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Gregorian leap year test.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a month (mirrors the calendar, including leap Februaries).
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid year/month");
    last_day_of_month(first).day()
}
