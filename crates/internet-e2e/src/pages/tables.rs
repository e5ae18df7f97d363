// Sortable Data Tables page
//
// Header clicks toggle the column's sort on the site; the verification
// itself runs through the generic column sort verifier against this
// page's TableAccessor readouts.

use async_trait::async_trait;

use crate::browser::{js_string, Page};
use crate::error::{Error, Result};
use crate::sort::SortOrder;
use crate::table::{is_column_sorted, TableAccessor};

/// The page hosting example tables `table1` and `table2`.
pub struct SortableTablesPage {
    page: Page,
}

impl SortableTablesPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Whether the Data Tables header is rendered.
    pub async fn is_opened(&self) -> Result<bool> {
        self.page.heading_contains("h3", "Data Tables").await
    }

    /// Clicks a column header to toggle that column's sort.
    ///
    /// The site renders clickable header labels as spans inside `th`, so
    /// spans are searched first; a parent `th` also contains the label
    /// text but a click on it would not reach the span's handler. Plain
    /// `th` is only a fallback for tables without span labels.
    pub async fn sort_column(&self, table_id: &str, label: &str) -> Result<()> {
        let script = format!(
            "(() => {{ \
               const pick = sel => Array.from(document.querySelectorAll(sel)) \
                 .find(el => el.textContent.includes({label})); \
               const target = pick({table} + ' thead th span') \
                 || pick({table} + ' thead th'); \
               if (!target) return false; \
               target.click(); \
               return true; \
             }})()",
            table = js_string(&format!("#{table_id}")),
            label = js_string(label)
        );
        let clicked: bool = self.page.evaluate(&script).await?;
        if !clicked {
            return Err(Error::ColumnNotFound {
                table: table_id.to_string(),
                label: label.to_string(),
            });
        }
        Ok(())
    }

    /// Checks the current sort order of a column in any table on the page.
    pub async fn is_column_sorted(
        &self,
        table_id: &str,
        label: &str,
        order: SortOrder,
    ) -> Result<bool> {
        is_column_sorted(&self.page, table_id, label, order).await
    }

    /// Convenience wrapper for example table 1.
    pub async fn is_table1_sorted(&self, label: &str, order: SortOrder) -> Result<bool> {
        self.is_column_sorted("table1", label, order).await
    }

    /// Convenience wrapper for example table 2.
    pub async fn is_table2_sorted(&self, label: &str, order: SortOrder) -> Result<bool> {
        self.is_column_sorted("table2", label, order).await
    }

    pub fn page(&self) -> &Page {
        &self.page
    }
}

#[async_trait]
impl TableAccessor for Page {
    /// Header cell texts of `#<table_id> thead tr th`, in column order.
    async fn header_texts(&self, table_id: &str) -> Result<Vec<String>> {
        let script = format!(
            "Array.from(document.querySelectorAll({sel})).map(th => th.textContent.trim())",
            sel = js_string(&format!("#{table_id} thead tr th"))
        );
        self.evaluate(&script).await
    }

    /// Body cell texts at a 1-based column position, top to bottom.
    async fn column_cells(&self, table_id: &str, column: usize) -> Result<Vec<String>> {
        let script = format!(
            "Array.from(document.querySelectorAll({sel})).map(td => td.textContent.trim())",
            sel = js_string(&format!("#{table_id} tbody tr td:nth-child({column})"))
        );
        self.evaluate(&script).await
    }
}
