//! Requests, effects and page updates produced by the pure core.
//!
//! The dispatcher builds an [`ActionRequest`] (what the user asked for),
//! resolves it against the current URL into an [`Effect`] (what the host must
//! do), and the session emits [`PageUpdate`]s for in-page changes that do not
//! end the page lifecycle.

use super::identifiers::{HandlerKey, ItemId};
use super::mode::Region;
use super::query::{Operation, ITEMS_KEY, ITEM_KEY};
use serde::Serialize;

/// Hidden field carrying the handler key of a submitted action.
pub const HANDLER_FIELD: &str = "handler";
/// Hidden field carrying the comma-joined ids of a bulk action.
pub const IDS_FIELD: &str = "ids";
/// Hidden field carrying the id of a single-item action.
pub const ID_FIELD: &str = "id";

/// A user intent, before it is bound to a concrete URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionRequest {
    /// Full document navigation; never carries a body.
    Navigate(Navigation),
    /// Form submission with hidden fields.
    Submit(Submission),
    /// Close the popup surface this page lives in.
    ClosePopup,
}

/// Reserved-key assignment of a navigation.
///
/// `operation: None` means "back to the base URL", i.e. list mode.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Navigation {
    /// Value of `o`.
    pub operation: Option<Operation>,
    /// Value of `item`.
    pub target_id: Option<ItemId>,
    /// Ids joined into `items`.
    pub items: Option<Vec<ItemId>>,
}

impl Navigation {
    /// Navigation to the operation-less base URL.
    pub fn to_base() -> Self {
        Self::default()
    }

    /// Navigation to `o=<operation>` without a target.
    pub fn operation(operation: Operation) -> Self {
        Self {
            operation: Some(operation),
            ..Self::default()
        }
    }

    /// Navigation to `o=<operation>&item=<id>`.
    pub fn targeting(operation: Operation, id: ItemId) -> Self {
        Self {
            operation: Some(operation),
            target_id: Some(id),
            items: None,
        }
    }

    /// Navigation to `o=<operation>&items=<ids>`.
    pub fn with_items(operation: Operation, ids: Vec<ItemId>) -> Self {
        Self {
            operation: Some(operation),
            target_id: None,
            items: Some(ids),
        }
    }

    /// Serialized `name=value` segments, in `o`, `item`, `items` order.
    ///
    /// Ids are percent-encoded individually so the comma stays an
    /// unambiguous separator inside `items`.
    pub fn query_params(&self) -> Vec<String> {
        let mut params = Vec::with_capacity(3);
        if let Some(op) = self.operation {
            params.push(op.to_param());
        }
        if let Some(id) = &self.target_id {
            params.push(format!("{ITEM_KEY}={}", id.encoded()));
        }
        if let Some(ids) = &self.items {
            params.push(format!("{ITEMS_KEY}={}", join_encoded(ids)));
        }
        params
    }
}

/// Whether a submission acts on one item or on the selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SubmitScope {
    /// One row, sent as `id`.
    Single,
    /// The selection, sent as `ids`.
    Bulk,
}

/// A handler invocation to be posted through the action form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Handler the server dispatches to.
    pub handler: HandlerKey,
    /// Items the handler acts on.
    pub target_ids: Vec<ItemId>,
    /// Single item or selection.
    pub scope: SubmitScope,
}

impl Submission {
    /// Submission for one row.
    pub fn single(handler: HandlerKey, id: ItemId) -> Self {
        Self {
            handler,
            target_ids: vec![id],
            scope: SubmitScope::Single,
        }
    }

    /// Submission for the selected rows.
    pub fn bulk(handler: HandlerKey, ids: Vec<ItemId>) -> Self {
        Self {
            handler,
            target_ids: ids,
            scope: SubmitScope::Bulk,
        }
    }

    /// Reserved-key segments of the form's action URL.
    ///
    /// Single-item submissions also name the item so the endpoint knows
    /// both the acting item and the handler.
    pub fn query_params(&self) -> Vec<String> {
        match (self.scope, self.target_ids.first()) {
            (SubmitScope::Single, Some(id)) => {
                Navigation::targeting(Operation::Action, id.clone()).query_params()
            }
            _ => Navigation::operation(Operation::Action).query_params(),
        }
    }

    /// Exactly two hidden fields: the handler and the id(s).
    pub fn hidden_fields(&self) -> [HiddenField; 2] {
        let ids_field = match self.scope {
            SubmitScope::Single => HiddenField::new(
                ID_FIELD,
                self.target_ids
                    .first()
                    .map(ItemId::as_str)
                    .unwrap_or_default(),
            ),
            SubmitScope::Bulk => HiddenField::new(IDS_FIELD, &join_raw(&self.target_ids)),
        };
        [HiddenField::new(HANDLER_FIELD, self.handler.as_str()), ids_field]
    }
}

/// `<input type="hidden">` materialized right before submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiddenField {
    /// Input name.
    pub name: String,
    /// Input value.
    pub value: String,
}

impl HiddenField {
    /// Field `name` carrying `value`.
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }
}

/// A fully materialized, single-use form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSubmission {
    /// Slot id of the action form.
    pub form_id: String,
    /// Target URL the form posts to.
    pub action_url: String,
    /// Hidden fields appended to the form for this submission only.
    pub fields: Vec<HiddenField>,
}

impl FormSubmission {
    /// Value of the hidden field `name`.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|f| f.name == name)
            .map(|f| f.value.as_str())
    }
}

/// Externally visible effect; every variant ends the page lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "effect", rename_all = "snake_case")]
pub enum Effect {
    /// Load another page.
    Navigate {
        /// Target URL.
        url: String,
    },
    /// Post the action form.
    Submit(FormSubmission),
    /// Close the popup surface.
    ClosePopup,
}

/// State of a related-object change link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeLink {
    /// Link points at the selected object.
    Enabled {
        /// Resolved link target.
        href: String,
    },
    /// Nothing selected; no href.
    Disabled,
}

/// In-page change applied through the DOM port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageUpdate {
    /// Make a region visible.
    ShowRegion(Region),
    /// Hide a region.
    HideRegion(Region),
    /// Check or uncheck one row checkbox.
    SetRowChecked {
        /// Row position.
        index: usize,
        /// New state.
        checked: bool,
    },
    /// Check or uncheck the select-all control.
    SetSelectAllChecked(bool),
    /// Enable or disable the bulk action menu.
    SetActionMenuEnabled(bool),
    /// Point a change link at a new target or disable it.
    SetChangeLink {
        /// Related select the link belongs to.
        select: String,
        /// New link state.
        link: ChangeLink,
    },
}

fn join_encoded(ids: &[ItemId]) -> String {
    ids.iter().map(ItemId::encoded).collect::<Vec<_>>().join(",")
}

fn join_raw(ids: &[ItemId]) -> String {
    ids.iter().map(ItemId::as_str).collect::<Vec<_>>().join(",")
}
