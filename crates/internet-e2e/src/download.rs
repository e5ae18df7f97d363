// Downloads directory management and saved-file verification
//
// The live transfer happens in the browser layer; this module owns the
// filesystem side: preparing a clean directory, checking what landed, and
// summarizing a batch.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::Result;

/// A directory that file-download tests save into.
#[derive(Debug, Clone)]
pub struct DownloadsDir {
    path: PathBuf,
}

impl DownloadsDir {
    /// Removes any previous contents and recreates the directory.
    pub async fn prepare(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if tokio::fs::try_exists(&path).await? {
            tokio::fs::remove_dir_all(&path).await?;
        }
        tokio::fs::create_dir_all(&path).await?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full path a file with `name` would save to.
    pub fn file_path(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }

    /// Size in bytes of a saved file, or `None` if it never landed.
    pub async fn saved_file_len(&self, name: &str) -> Result<Option<u64>> {
        let path = self.file_path(name);
        match tokio::fs::metadata(&path).await {
            Ok(meta) => Ok(Some(meta.len())),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Outcome of downloading a batch of named files.
#[derive(Debug, Default)]
pub struct DownloadReport {
    /// Files saved to disk, with their sizes in bytes.
    pub saved: Vec<(String, u64)>,
    /// Requested names with no matching link on the page.
    pub missing: Vec<String>,
}

impl DownloadReport {
    pub fn record_saved(&mut self, name: impl Into<String>, len: u64) {
        let name = name.into();
        info!(file = %name, bytes = len, "downloaded");
        self.saved.push((name, len));
    }

    pub fn record_missing(&mut self, name: impl Into<String>) {
        let name = name.into();
        warn!(file = %name, "file link not found on page");
        self.missing.push(name);
    }

    /// True when at least one file landed on disk.
    pub fn any_saved(&self) -> bool {
        !self.saved.is_empty()
    }
}
