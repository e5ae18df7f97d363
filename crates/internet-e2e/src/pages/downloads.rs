// File Download page
//
// Downloads are pulled with an in-page fetch of the link target and
// written to the downloads directory, which keeps the transfer on the
// page's origin without depending on browser download UI.

use tracing::info;

use crate::browser::{js_string, Page};
use crate::download::{DownloadReport, DownloadsDir};
use crate::error::{Error, Result};

pub struct FileDownloadPage {
    page: Page,
}

impl FileDownloadPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Whether the File Downloader header is rendered.
    pub async fn is_opened(&self) -> Result<bool> {
        self.page.heading_contains("h3", "File Download").await
    }

    /// Names of every downloadable link on the page, in document order.
    pub async fn link_names(&self) -> Result<Vec<String>> {
        self.page.link_texts("div.example a").await
    }

    /// Href of the link whose trimmed text equals `name`, if present.
    async fn link_href(&self, name: &str) -> Result<Option<String>> {
        let script = format!(
            "(() => {{ \
               const a = Array.from(document.querySelectorAll('div.example a')) \
                 .find(a => a.textContent.trim() === {name}); \
               return a ? a.getAttribute('href') : null; \
             }})()",
            name = js_string(name)
        );
        self.page.evaluate(&script).await
    }

    /// Downloads the first link on the page into `dir`.
    ///
    /// Returns the saved file's name and size in bytes.
    pub async fn download_first(&self, dir: &DownloadsDir) -> Result<(String, u64)> {
        let names = self.link_names().await?;
        let name = names
            .into_iter()
            .next()
            .ok_or_else(|| Error::ElementNotFound("div.example a".to_string()))?;
        let len = self.download(&name, dir).await?;
        Ok((name, len))
    }

    /// Downloads the named link into `dir`, returning the saved size.
    pub async fn download(&self, name: &str, dir: &DownloadsDir) -> Result<u64> {
        let href = self
            .link_href(name)
            .await?
            .ok_or_else(|| Error::DownloadFailed {
                name: name.to_string(),
                message: "no link with that text on the page".to_string(),
            })?;

        let bytes = self
            .page
            .fetch_bytes(&href)
            .await
            .map_err(|e| Error::DownloadFailed {
                name: name.to_string(),
                message: e.to_string(),
            })?;

        let path = dir.file_path(name);
        tokio::fs::write(&path, &bytes).await?;
        info!(file = name, bytes = bytes.len(), path = %path.display(), "saved download");
        Ok(bytes.len() as u64)
    }

    /// Downloads every requested file that has a link on the page.
    ///
    /// Missing links are recorded rather than failing the batch; the
    /// caller decides what the report must contain.
    pub async fn download_all(
        &self,
        names: &[&str],
        dir: &DownloadsDir,
    ) -> Result<DownloadReport> {
        let mut report = DownloadReport::default();
        for name in names {
            match self.link_href(name).await? {
                Some(_) => {
                    let len = self.download(name, dir).await?;
                    report.record_saved(*name, len);
                }
                None => report.record_missing(*name),
            }
        }
        Ok(report)
    }
}
