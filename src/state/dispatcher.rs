//! Action dispatch.
//!
//! Turns user intents into [`ActionRequest`]s and resolves them against the
//! current URL into [`Effect`]s. Add/edit/delete/cancel and bulk delete are
//! navigations; every other bulk or per-item action is a form submission.

use super::url_codec::UrlStateCodec;
use crate::model::{
    ActionRequest, Effect, FormSubmission, HandlerKey, ItemId, Navigation, Operation, Submission,
};
use tracing::info;

/// Dispatcher bound to one page URL and its action form.
#[derive(Debug, Clone, Copy)]
pub struct ActionDispatcher<'a> {
    codec: &'a UrlStateCodec,
    form_id: &'a str,
}

impl<'a> ActionDispatcher<'a> {
    /// Dispatcher for the page parsed into `codec`.
    pub fn new(codec: &'a UrlStateCodec, form_id: &'a str) -> Self {
        Self { codec, form_id }
    }

    /// Open the empty add form.
    pub fn add_item(&self) -> ActionRequest {
        ActionRequest::Navigate(Navigation::operation(Operation::Add))
    }

    /// Open the edit form of `id`.
    pub fn edit_item(&self, id: ItemId) -> ActionRequest {
        ActionRequest::Navigate(Navigation::targeting(Operation::Edit, id))
    }

    /// Open the delete confirmation of `id`.
    pub fn delete_item(&self, id: ItemId) -> ActionRequest {
        ActionRequest::Navigate(Navigation::targeting(Operation::Delete, id))
    }

    /// Leave the edit panel: close the popup, or go back to the list.
    pub fn cancel(&self, is_popup: bool) -> ActionRequest {
        if is_popup {
            ActionRequest::ClosePopup
        } else {
            ActionRequest::Navigate(Navigation::to_base())
        }
    }

    /// Leave the delete confirmation.
    pub fn cancel_delete(&self) -> ActionRequest {
        ActionRequest::Navigate(Navigation::to_base())
    }

    /// Open the delete confirmation of `ids`.
    pub fn delete_multiple(&self, ids: Vec<ItemId>) -> ActionRequest {
        ActionRequest::Navigate(Navigation::with_items(Operation::DeleteMultiple, ids))
    }

    /// Bulk action from the menu. The bulk-delete sentinel navigates.
    pub fn invoke_bulk_action(&self, handler: HandlerKey, ids: Vec<ItemId>) -> ActionRequest {
        if handler.is_bulk_delete() {
            return self.delete_multiple(ids);
        }
        ActionRequest::Submit(Submission::bulk(handler, ids))
    }

    /// Custom action of a single row.
    pub fn invoke_item_action(&self, handler: HandlerKey, id: ItemId) -> ActionRequest {
        ActionRequest::Submit(Submission::single(handler, id))
    }

    /// Bind a request to the current URL.
    ///
    /// Submissions get a fresh field set every time: exactly the two hidden
    /// fields of this request, never fields of an earlier one.
    pub fn resolve(&self, request: ActionRequest) -> Effect {
        let effect = match request {
            ActionRequest::Navigate(navigation) => Effect::Navigate {
                url: self.codec.url_for(&navigation),
            },
            ActionRequest::Submit(submission) => Effect::Submit(FormSubmission {
                form_id: self.form_id.to_string(),
                action_url: self.codec.compose_url(&submission.query_params()),
                fields: submission.hidden_fields().into(),
            }),
            ActionRequest::ClosePopup => Effect::ClosePopup,
        };
        info!(?effect, "Action dispatched");
        effect
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
