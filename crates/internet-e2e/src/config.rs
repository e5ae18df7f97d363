// Suite configuration
//
// Configuration is explicit: values are resolved once (defaults, an
// optional environment file, builder overrides) and handed to the browser
// and page constructors. Nothing in the suite reads process-wide ambient
// state after construction.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::info;
use url::Url;

use crate::error::{Error, Result};

/// Default target when no environment file overrides it.
pub const DEFAULT_BASE_URL: &str = "https://the-internet.herokuapp.com/";

/// Explicit settings for a suite run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the site under test; page paths are joined onto it.
    pub base_url: Url,
    /// Directory where file-download tests save artifacts.
    pub downloads_dir: PathBuf,
    /// Run the browser headless.
    pub headless: bool,
    /// Explicit Chromium binary (None = auto-detect).
    pub chrome_executable: Option<PathBuf>,
    /// Upper bound on navigations and page readouts.
    pub navigation_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            downloads_dir: PathBuf::from("test-result/downloads"),
            headless: true,
            chrome_executable: None,
            navigation_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    /// Loads settings from a `KEY=VALUE` environment file.
    ///
    /// These are the suite's `config/<env>.config` files. Blank lines and
    /// `#` comments are skipped. Recognized keys: `BASE_URL`, `HEADLESS`,
    /// `DOWNLOADS_DIR`, `CHROME`, `NAVIGATION_TIMEOUT_MS`. Unrecognized
    /// keys are ignored so the files can carry settings for other tools.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read '{}': {e}", path.display())))?;

        let mut config = Config::default();
        for (lineno, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (key, value) = line.split_once('=').ok_or_else(|| {
                Error::Config(format!(
                    "malformed line {} in '{}': expected KEY=VALUE",
                    lineno + 1,
                    path.display()
                ))
            })?;
            config.apply(key.trim(), value.trim())?;
        }

        info!(file = %path.display(), base_url = %config.base_url, "loaded environment file");
        Ok(config)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "BASE_URL" => {
                self.base_url = Url::parse(value)
                    .map_err(|e| Error::Config(format!("invalid BASE_URL '{value}': {e}")))?;
            }
            "HEADLESS" => {
                self.headless = value
                    .parse::<bool>()
                    .map_err(|_| Error::Config(format!("invalid HEADLESS '{value}'")))?;
            }
            "DOWNLOADS_DIR" => self.downloads_dir = PathBuf::from(value),
            "CHROME" => self.chrome_executable = Some(PathBuf::from(value)),
            "NAVIGATION_TIMEOUT_MS" => {
                let ms = value.parse::<u64>().map_err(|_| {
                    Error::Config(format!("invalid NAVIGATION_TIMEOUT_MS '{value}'"))
                })?;
                self.navigation_timeout = Duration::from_millis(ms);
            }
            _ => {}
        }
        Ok(())
    }

    /// Overrides the base URL.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    /// Overrides the downloads directory.
    pub fn with_downloads_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.downloads_dir = dir.into();
        self
    }

    /// Sets headless mode.
    pub fn with_headless(mut self, headless: bool) -> Self {
        self.headless = headless;
        self
    }

    /// Sets an explicit Chromium binary.
    pub fn with_chrome_executable(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_executable = Some(path.into());
        self
    }

    /// Resolves a page path against the base URL.
    pub fn page_url(&self, path: &str) -> Result<Url> {
        Ok(self.base_url.join(path)?)
    }
}
