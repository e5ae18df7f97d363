// Error types for the e2e suite

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while driving the demo site
#[derive(Debug, Error)]
pub enum Error {
    /// No header cell of the table contains the requested label
    ///
    /// Column resolution scans header cells left to right and takes the
    /// first whose trimmed text contains the label. Resolution failure is
    /// an error, never a `false` sort result.
    #[error("Column '{label}' not found in table '{table}'")]
    ColumnNotFound { table: String, label: String },

    /// Sort order string outside the accepted set
    ///
    /// Accepted values: "asc"/"ascending" and "desc"/"descending".
    #[error("Invalid sort order '{0}'. Use 'asc' or 'desc'.")]
    InvalidSortOrder(String),

    /// Element not found by selector
    #[error("Element not found: selector '{0}'")]
    ElementNotFound(String),

    /// Failed to launch the browser process
    ///
    /// Common causes: Chromium not installed, sandbox restrictions in
    /// containers (construct the config with `headless` and no sandbox),
    /// or an incompatible binary on PATH.
    #[error("Failed to launch browser: {0}")]
    BrowserLaunch(String),

    /// Navigation to a URL failed
    #[error("Navigation failed for '{url}': {message}")]
    Navigation { url: String, message: String },

    /// In-page JavaScript evaluation failed
    #[error("Evaluation error: {0}")]
    Evaluation(String),

    /// A file download could not be completed or saved
    #[error("Download failed for '{name}': {message}")]
    DownloadFailed { name: String, message: String },

    /// Malformed configuration value or environment file
    #[error("Configuration error: {0}")]
    Config(String),

    /// Timeout waiting for a page condition
    #[error("Timeout: {0}")]
    Timeout(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid URL
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}
