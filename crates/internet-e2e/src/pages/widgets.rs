// Dropdown, Checkboxes and Key Presses pages

use crate::browser::{js_string, Page};
use crate::error::{Error, Result};

/// The Dropdown List page (`#dropdown` select element).
pub struct DropdownPage {
    page: Page,
}

impl DropdownPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Selects the option with the given value and fires a change event.
    pub async fn select(&self, value: &str) -> Result<()> {
        let script = format!(
            "(() => {{ \
               const select = document.querySelector('#dropdown'); \
               if (!select) return false; \
               select.value = {value}; \
               select.dispatchEvent(new Event('change', {{ bubbles: true }})); \
               return select.value === {value}; \
             }})()",
            value = js_string(value)
        );
        let selected: bool = self.page.evaluate(&script).await?;
        if !selected {
            return Err(Error::ElementNotFound(format!(
                "option with value '{value}' in #dropdown"
            )));
        }
        Ok(())
    }

    /// Value of the currently selected option.
    pub async fn selected_value(&self) -> Result<String> {
        self.page
            .evaluate("document.querySelector('#dropdown').value")
            .await
    }
}

/// The Checkboxes page (`#checkboxes` form with two boxes).
pub struct CheckboxesPage {
    page: Page,
}

impl CheckboxesPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Checked state of the 0-based `index`th checkbox.
    pub async fn is_checked(&self, index: usize) -> Result<bool> {
        let script = format!(
            "(() => {{ \
               const boxes = document.querySelectorAll('#checkboxes input[type=checkbox]'); \
               return boxes[{index}] ? boxes[{index}].checked : null; \
             }})()"
        );
        let checked: Option<bool> = self.page.evaluate(&script).await?;
        checked.ok_or_else(|| Error::ElementNotFound(format!("checkbox #{index}")))
    }

    /// Toggles the 0-based `index`th checkbox until it matches `checked`.
    pub async fn set_checked(&self, index: usize, checked: bool) -> Result<()> {
        if self.is_checked(index).await? == checked {
            return Ok(());
        }
        let selector = format!("#checkboxes input[type=checkbox]:nth-of-type({})", index + 1);
        self.page.click(&selector).await
    }
}

/// The Key Presses page (`#target` input echoing the last key into `#result`).
pub struct KeyPressesPage {
    page: Page,
}

impl KeyPressesPage {
    pub fn new(page: Page) -> Self {
        Self { page }
    }

    /// Presses a key with the input focused.
    pub async fn press(&self, key: &str) -> Result<()> {
        self.page.press_key("#target", key).await
    }

    /// The page's "You entered: <KEY>" result line.
    pub async fn last_key_result(&self) -> Result<String> {
        self.page.text_content("#result").await
    }
}
