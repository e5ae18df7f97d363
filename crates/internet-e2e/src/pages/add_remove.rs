// Add/Remove Elements page

use crate::browser::Page;
use crate::error::Result;

pub struct AddRemovePage {
    page: Page,
}

impl AddRemovePage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Whether the Add/Remove Elements header is rendered.
    pub async fn is_opened(&self) -> Result<bool> {
        self.page
            .heading_contains("h3", "Add/Remove Elements")
            .await
    }

    /// Clicks the 'Add Element' button.
    pub async fn click_add_element(&self) -> Result<()> {
        self.page.click("button[onclick='addElement()']").await
    }

    /// Whether at least one Delete button is visible.
    pub async fn is_delete_button_displayed(&self) -> Result<bool> {
        self.page.is_visible("#elements button.added-manually").await
    }

    /// Clicks the first Delete button.
    pub async fn click_delete(&self) -> Result<()> {
        self.page.click("#elements button.added-manually").await
    }
}
