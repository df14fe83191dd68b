//! Domain events dispatched into a page session.
//!
//! These replace click handlers that mutated shared state inline: the host
//! translates a UI interaction into one `CrudAction`, and the session returns
//! the resulting page updates and effect.

use super::identifiers::{HandlerKey, ItemId};

/// A user interaction with the CRUD screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CrudAction {
    /// A row checkbox was clicked; `checked` is its state after the click.
    ToggleRow {
        /// Row position on the page.
        index: usize,
        /// Checkbox state after the click.
        checked: bool,
    },
    /// The select-all control was clicked; `checked` is its new state.
    SelectAllClicked {
        /// Control state after the click.
        checked: bool,
    },
    /// Add-item button.
    AddItem,
    /// Per-row edit button.
    EditItem(ItemId),
    /// Per-row delete button.
    DeleteItem(ItemId),
    /// Cancel on the edit panel.
    Cancel,
    /// Cancel on the delete confirmation.
    CancelDelete,
    /// Entry chosen from the bulk action menu.
    BulkAction(HandlerKey),
    /// Per-row custom action button.
    ItemAction {
        /// Handler of the clicked button.
        handler: HandlerKey,
        /// Row the button belongs to.
        id: ItemId,
    },
    /// A related-object select changed value (`None` = nothing selected).
    RelatedChanged {
        /// Field name of the select.
        select: String,
        /// New value.
        value: Option<String>,
    },
}
