// Home page and left-hand navigation menu

use tracing::info;

use crate::browser::Page;
use crate::error::Result;

/// The landing page listing every demo widget.
pub struct HomePage {
    page: Page,
}

impl HomePage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Navigates to the configured base URL.
    pub async fn open(&self) -> Result<()> {
        info!(base_url = %self.page.config().base_url, "opening application");
        self.page.open("").await
    }

    /// Whether the welcome header is rendered.
    pub async fn is_loaded(&self) -> Result<bool> {
        self.page
            .heading_contains("h1", "Welcome to the-internet")
            .await
    }

    /// Clicks a left-hand menu entry by its visible text.
    ///
    /// Exact text is preferred over containment so "File Download" never
    /// lands on "Secure File Download".
    pub async fn click_left_menu(&self, menu: &str) -> Result<()> {
        info!(menu, "clicking menu");
        self.page.click_link_text(menu).await
    }

    pub fn page(&self) -> &Page {
        &self.page
    }
}

/// The A/B Testing page, reached from the home menu.
pub struct AbTestPage {
    page: Page,
}

impl AbTestPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Whether the A/B Test header is rendered.
    pub async fn is_opened(&self) -> Result<bool> {
        self.page.heading_contains("h3", "A/B Test").await
    }
}
