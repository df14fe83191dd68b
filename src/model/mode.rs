//! Visible mode of the CRUD screen.

use serde::Serialize;

/// Which of the two mutually exclusive regions is shown.
///
/// Derived once per page load from the URL and the error signal;
/// never stored across loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UiMode {
    /// The item list (with selection checkboxes and the action menu).
    #[default]
    List,
    /// The add/edit panel.
    Edit,
}

/// The two regions toggled by [`UiMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Table of rows with checkboxes and the action menu.
    ItemList,
    /// Add/edit form.
    EditPanel,
}

impl UiMode {
    /// Region that must be visible in this mode.
    pub fn visible_region(self) -> Region {
        match self {
            UiMode::List => Region::ItemList,
            UiMode::Edit => Region::EditPanel,
        }
    }

    /// Region that must be hidden in this mode.
    pub fn hidden_region(self) -> Region {
        match self {
            UiMode::List => Region::EditPanel,
            UiMode::Edit => Region::ItemList,
        }
    }
}
