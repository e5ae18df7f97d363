//! internet-e2e: end-to-end browser test suite for the-internet demo site
//!
//! This crate exercises the widget pages of
//! <https://the-internet.herokuapp.com> (or a local replica) through thin
//! page objects over a CDP-driven browser, plus a small pure core: the
//! column sort verifier used by the sortable-tables checks.
//!
//! The browser layer and the page objects live behind the `browser`
//! feature; the verifier, configuration, date helpers and download
//! bookkeeping build and test without a Chromium binary.
//!
//! # Examples
//!
//! ## Verifying a column's sort order
//!
//! ```ignore
//! use internet_e2e::{Browser, Config, SortOrder};
//! use internet_e2e::pages::SortableTablesPage;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let browser = Browser::launch(Config::default()).await?;
//!     let page = browser.new_page().await?;
//!     page.open("tables").await?;
//!
//!     let tables = SortableTablesPage::new(page);
//!     tables.sort_column("table1", "Last Name").await?;
//!     assert!(tables.is_table1_sorted("Last Name", SortOrder::Ascending).await?);
//!
//!     browser.close().await?;
//!     Ok(())
//! }
//! ```
//!
//! ## The verifier against any table source
//!
//! The check is generic over [`TableAccessor`], so it runs identically
//! against a live page or an in-memory table:
//!
//! ```ignore
//! use internet_e2e::{is_column_sorted, SortOrder};
//!
//! let sorted = is_column_sorted(&accessor, "table2", "Due", SortOrder::Descending).await?;
//! ```

pub mod config;
pub mod datetime;
pub mod download;
mod error;
pub mod sort;
pub mod table;

#[cfg(feature = "browser")]
pub mod browser;
#[cfg(feature = "browser")]
pub mod pages;

// Re-export error types
pub use error::{Error, Result};

// Re-export the sort verification core
pub use sort::SortOrder;
pub use table::{is_column_sorted, resolve_column, TableAccessor};

// Re-export configuration
pub use config::Config;

// Re-export downloads bookkeeping
pub use download::{DownloadReport, DownloadsDir};

// Re-export the live browser layer
#[cfg(feature = "browser")]
pub use browser::{Browser, Page};
