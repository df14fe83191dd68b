//! Per-page controller session.
//!
//! A `PageSession` lives for exactly one page load. It owns the parsed URL,
//! the resolved mode and the selection, and turns [`CrudAction`]s into
//! [`PageUpdate`]s plus at most one terminal [`Effect`]. It never touches the
//! page itself; the host applies the returned [`Transition`] through a
//! [`DomPort`](crate::port::DomPort).
//!
//! # Lifecycle
//!
//! `Active` → `Ended` on the first navigation, submission or popup close.
//! An ended session ignores further actions, so a second submission can
//! never reuse (and re-augment) the same action form.

use super::dispatcher::ActionDispatcher;
use super::related_link::change_link_update;
use super::selection::{menu_transition, MenuTransition, SelectionState, SelectionTracker};
use super::url_codec::UrlStateCodec;
use super::view_mode::{region_updates, resolve_mode_for};
use crate::model::query::POPUP_KEY;
use crate::model::{
    ActionCatalog, ActionRequest, CrudAction, Effect, HandlerKey, ItemId, PageFixture, PageUpdate,
    RelatedSelect, UiMode,
};
use tracing::{debug, info, warn};

/// Inputs of one page load supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    /// Full URL of the page.
    pub url: String,
    /// Page lives in a popup surface.
    pub is_popup: bool,
    /// Server signalled a failed save (already interpreted per alert policy).
    pub error_flag: bool,
}

impl PageContext {
    /// Context for `url`, detecting popups from the `_popup` parameter.
    ///
    /// `force_popup` lets the host mark the page as a popup regardless.
    pub fn from_url(url: impl Into<String>, force_popup: bool, error_flag: bool) -> Self {
        let url = url.into();
        let is_popup = force_popup || UrlStateCodec::parse(&url).has_param(POPUP_KEY);
        Self {
            url,
            is_popup,
            error_flag,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Active,
    Ended,
}

/// Result of one action: in-page updates and an optional terminal effect.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Transition {
    /// In-page changes, to apply in order.
    pub updates: Vec<PageUpdate>,
    /// Terminal effect, if the action ended the page.
    pub effect: Option<Effect>,
}

impl Transition {
    fn updates(updates: Vec<PageUpdate>) -> Self {
        Self {
            updates,
            effect: None,
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            updates: Vec::new(),
            effect: Some(effect),
        }
    }
}

/// Controller state of one page load.
#[derive(Debug, Clone)]
pub struct PageSession {
    context: PageContext,
    codec: UrlStateCodec,
    mode: UiMode,
    selection: SelectionTracker,
    catalog: ActionCatalog,
    related: Vec<RelatedSelect>,
    form_id: String,
    lifecycle: Lifecycle,
}

impl PageSession {
    /// Start the session for a freshly rendered page.
    pub fn load(context: PageContext, page: &PageFixture, form_id: impl Into<String>) -> Self {
        let codec = UrlStateCodec::parse(&context.url);
        let mode = resolve_mode_for(&codec, context.error_flag);
        info!(url = %context.url, ?mode, popup = context.is_popup, rows = page.rows.len(), "Page loaded");
        Self {
            selection: SelectionTracker::new(page.row_ids()),
            catalog: page.actions.clone(),
            related: page.related.clone(),
            form_id: form_id.into(),
            lifecycle: Lifecycle::Active,
            context,
            codec,
            mode,
        }
    }

    /// Inputs of this page load.
    pub fn context(&self) -> &PageContext {
        &self.context
    }

    /// Parsed page URL.
    pub fn codec(&self) -> &UrlStateCodec {
        &self.codec
    }

    /// Mode resolved at load.
    pub fn mode(&self) -> UiMode {
        self.mode
    }

    /// Row selection.
    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    /// Snapshot of the row selection.
    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    /// Actions the page offers.
    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    /// Related selects with their current values.
    pub fn related(&self) -> &[RelatedSelect] {
        &self.related
    }

    /// Whether a terminal effect was emitted.
    pub fn is_ended(&self) -> bool {
        self.lifecycle == Lifecycle::Ended
    }

    /// Updates applied once, before any interaction: region visibility,
    /// a disabled action menu, an unchecked select-all and the change links.
    pub fn initial_updates(&self) -> Vec<PageUpdate> {
        let mut updates: Vec<PageUpdate> = region_updates(self.mode).into();
        updates.push(PageUpdate::SetActionMenuEnabled(false));
        updates.push(PageUpdate::SetSelectAllChecked(false));
        updates.extend(
            self.related
                .iter()
                .map(|select| change_link_update(select, select.selected.as_deref())),
        );
        updates
    }

    /// Handle one user action.
    pub fn handle_action(&mut self, action: CrudAction) -> Transition {
        if self.is_ended() {
            warn!(?action, "Action after page lifecycle ended ignored");
            return Transition::default();
        }

        match action {
            CrudAction::ToggleRow { index, checked } => self.toggle_row(index, checked),
            CrudAction::SelectAllClicked { checked } => self.select_all_clicked(checked),
            CrudAction::AddItem => self.finish(|d| d.add_item()),
            CrudAction::EditItem(id) => self.finish(|d| d.edit_item(id)),
            CrudAction::DeleteItem(id) => self.finish(|d| d.delete_item(id)),
            CrudAction::Cancel => {
                let popup = self.context.is_popup;
                self.finish(|d| d.cancel(popup))
            }
            CrudAction::CancelDelete => self.finish(|d| d.cancel_delete()),
            CrudAction::BulkAction(handler) => self.bulk_action(handler),
            CrudAction::ItemAction { handler, id } => self.item_action(handler, id),
            CrudAction::RelatedChanged { select, value } => self.related_changed(&select, value),
        }
    }

    fn toggle_row(&mut self, index: usize, checked: bool) -> Transition {
        let previous = self.selection.state();
        let next = self.selection.toggle(index, checked);
        let mut updates = Vec::new();
        if index < self.selection.total_count() {
            updates.push(PageUpdate::SetRowChecked {
                index,
                checked: self.selection.is_checked(index),
            });
        }
        updates.extend(selection_updates(&previous, &next));
        Transition::updates(updates)
    }

    fn select_all_clicked(&mut self, checked: bool) -> Transition {
        let previous = self.selection.state();
        let next = if checked {
            self.selection.select_all()
        } else {
            self.selection.select_none()
        };
        let mut updates: Vec<PageUpdate> = (0..self.selection.total_count())
            .map(|index| PageUpdate::SetRowChecked { index, checked })
            .collect();
        updates.extend(selection_updates(&previous, &next));
        Transition::updates(updates)
    }

    fn bulk_action(&mut self, handler: HandlerKey) -> Transition {
        if !self.selection.state().bulk_actions_enabled() {
            debug!(%handler, "Bulk action with empty selection ignored (menu disabled)");
            return Transition::default();
        }
        if !self.catalog.bulk.iter().any(|a| a.handler == handler) {
            warn!(%handler, "Bulk action not offered by this page ignored");
            return Transition::default();
        }
        let ids = self.selection.selected_ids();
        self.finish(|d| d.invoke_bulk_action(handler, ids))
    }

    fn item_action(&mut self, handler: HandlerKey, id: ItemId) -> Transition {
        if !self.catalog.item.iter().any(|a| a.key == handler) {
            warn!(%handler, %id, "Item action not offered by this page ignored");
            return Transition::default();
        }
        self.finish(|d| d.invoke_item_action(handler, id))
    }

    fn related_changed(&mut self, select: &str, value: Option<String>) -> Transition {
        let Some(related) = self.related.iter_mut().find(|r| r.name == select) else {
            warn!(select, "Change for unknown related select ignored");
            return Transition::default();
        };
        related.selected = value;
        let update = change_link_update(related, related.selected.as_deref());
        Transition::updates(vec![update])
    }

    /// Build a request with the dispatcher, resolve it and end the lifecycle.
    fn finish(&mut self, build: impl FnOnce(&ActionDispatcher<'_>) -> ActionRequest) -> Transition {
        let dispatcher = ActionDispatcher::new(&self.codec, &self.form_id);
        let effect = dispatcher.resolve(build(&dispatcher));
        self.lifecycle = Lifecycle::Ended;
        Transition::effect(effect)
    }
}

/// Menu and select-all updates for a selection change.
fn selection_updates(previous: &SelectionState, next: &SelectionState) -> Vec<PageUpdate> {
    let mut updates = Vec::with_capacity(2);
    match menu_transition(previous, next) {
        Some(MenuTransition::Enable) => updates.push(PageUpdate::SetActionMenuEnabled(true)),
        Some(MenuTransition::Disable) => updates.push(PageUpdate::SetActionMenuEnabled(false)),
        None => {}
    }
    updates.push(PageUpdate::SetSelectAllChecked(next.all_selected));
    updates
}

// ===== Tests =====

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
