// Page objects for the-internet demo site
//
// Thin helpers over the Page wrapper, one per exercised site page.
// Each encapsulates the selectors and interactions its tests need.

mod add_remove;
mod dialogs;
mod downloads;
mod home;
mod tables;
mod widgets;

pub use add_remove::AddRemovePage;
pub use dialogs::{DialogAction, DialogEvent, JsAlertsPage};
pub use downloads::FileDownloadPage;
pub use home::{AbTestPage, HomePage};
pub use tables::SortableTablesPage;
pub use widgets::{CheckboxesPage, DropdownPage, KeyPressesPage};
