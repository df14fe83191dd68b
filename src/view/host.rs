//! Page host: the browser stand-in driving one page session at a time.
//!
//! Owns the in-memory page and the current [`PageSession`], turns host key
//! actions into [`CrudAction`]s using its cursor, applies the resulting page
//! updates and handles effects the way a browser would: a navigation or a
//! form submission loads the next page, closing the popup ends the host.

use crate::config::{ResolvedConfig, SlotConfig};
use crate::model::{
    AlertPolicy, CrudAction, Effect, HandlerKey, ItemId, KeyAction, Operation, PageFixture,
    UiMode,
};
use crate::port::{apply_updates, read_error_signal, run_effect, MemoryPage};
use crate::state::{PageContext, PageSession};
use tracing::{debug, info};

/// What the host does after an input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostSignal {
    /// Keep reading input.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Screen the current page renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Item list with checkboxes and the action menu.
    List,
    /// Delete confirmation for one item or the selection.
    ConfirmDelete,
    /// Add or edit form.
    Form,
}

/// Browser stand-in holding the current page and its session.
pub struct PageHost {
    fixture: PageFixture,
    slots: SlotConfig,
    policy: AlertPolicy,
    force_popup: bool,
    session: PageSession,
    page: MemoryPage,
    cursor: usize,
    related_focus: usize,
    transcript: Vec<Effect>,
    loads: usize,
    closed: bool,
}

impl PageHost {
    /// Open the page at the configured start URL.
    ///
    /// The server's error signal only applies to this first load; pages
    /// loaded later come from the host's own navigations.
    pub fn open(fixture: PageFixture, config: &ResolvedConfig) -> Self {
        let page = MemoryPage::from_fixture(&fixture, &config.slots);
        let error_flag = read_error_signal(&page, &config.slots).is_present(config.error_signal);
        let session = Self::start_session(&fixture, config, &config.start_url, error_flag);
        let mut host = Self {
            fixture,
            slots: config.slots.clone(),
            policy: config.error_signal,
            force_popup: config.popup,
            session,
            page,
            cursor: 0,
            related_focus: 0,
            transcript: Vec::new(),
            loads: 1,
            closed: false,
        };
        host.apply_initial_updates();
        host
    }

    fn start_session(
        fixture: &PageFixture,
        config: &ResolvedConfig,
        url: &str,
        error_flag: bool,
    ) -> PageSession {
        PageSession::load(
            PageContext::from_url(url, config.popup, error_flag),
            fixture,
            config.slots.action_form.clone(),
        )
    }

    fn apply_initial_updates(&mut self) {
        let updates = self.session.initial_updates();
        apply_updates(&mut self.page, &self.slots, &updates);
    }

    /// Replace the current page with a fresh load of `url`.
    fn reload(&mut self, url: &str) {
        self.page = MemoryPage::from_fixture(&self.fixture, &self.slots);
        self.session = PageSession::load(
            PageContext::from_url(url, self.force_popup, false),
            &self.fixture,
            self.slots.action_form.clone(),
        );
        self.cursor = 0;
        self.related_focus = 0;
        self.loads += 1;
        self.apply_initial_updates();
    }

    // ===== Accessors =====

    /// Session of the current page.
    pub fn session(&self) -> &PageSession {
        &self.session
    }

    /// In-memory page the session drives.
    pub fn page(&self) -> &MemoryPage {
        &self.page
    }

    /// What the server renders on every load.
    pub fn fixture(&self) -> &PageFixture {
        &self.fixture
    }

    /// Slot ids in use.
    pub fn slots(&self) -> &SlotConfig {
        &self.slots
    }

    /// How the first load interpreted the error signal.
    pub fn policy(&self) -> AlertPolicy {
        self.policy
    }

    /// URL of the current page.
    pub fn url(&self) -> &str {
        &self.session.context().url
    }

    /// Row under the cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Related select with focus on the form.
    pub fn related_focus(&self) -> usize {
        self.related_focus
    }

    /// Every effect the host has run, oldest first.
    pub fn transcript(&self) -> &[Effect] {
        &self.transcript
    }

    /// Number of page loads, including the first.
    pub fn loads(&self) -> usize {
        self.loads
    }

    /// Whether the popup was closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Screen the current URL renders.
    pub fn screen(&self) -> Screen {
        let operation = self.session.codec().operation();
        if self.session.mode() == UiMode::Edit || operation == Some(Operation::Add) {
            Screen::Form
        } else if matches!(
            operation,
            Some(Operation::Delete) | Some(Operation::DeleteMultiple)
        ) {
            Screen::ConfirmDelete
        } else {
            Screen::List
        }
    }

    fn cursor_row(&self) -> Option<ItemId> {
        self.session.selection().row_id(self.cursor).cloned()
    }

    // ===== Input =====

    /// Handle one host key action.
    pub fn handle_key_action(&mut self, action: KeyAction) -> HostSignal {
        if action == KeyAction::Quit || self.closed {
            return HostSignal::Quit;
        }
        let screen = self.screen();
        let crud = match (screen, action) {
            (Screen::List, KeyAction::CursorDown) => {
                let last = self.session.selection().total_count().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
                None
            }
            (Screen::List, KeyAction::CursorUp) => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            (Screen::List, KeyAction::ToggleRow) => {
                let checkbox = self.slots.row_checkbox(self.cursor);
                Some(CrudAction::ToggleRow {
                    index: self.cursor,
                    checked: !self.page.is_checked(&checkbox),
                })
            }
            (Screen::List, KeyAction::ToggleSelectAll) => Some(CrudAction::SelectAllClicked {
                checked: !self.page.is_checked(&self.slots.select_all),
            }),
            (Screen::List, KeyAction::AddItem) => Some(CrudAction::AddItem),
            (Screen::List, KeyAction::EditItem) => self.cursor_row().map(CrudAction::EditItem),
            (Screen::List, KeyAction::DeleteItem) => self.cursor_row().map(CrudAction::DeleteItem),
            (Screen::List, KeyAction::DeleteSelected) => {
                Some(CrudAction::BulkAction(HandlerKey::bulk_delete()))
            }
            (Screen::List, KeyAction::BulkAction(index)) => self
                .session
                .catalog()
                .bulk_action(index)
                .map(|entry| CrudAction::BulkAction(entry.handler.clone())),
            (Screen::List | Screen::Form, KeyAction::ItemAction(index)) => {
                self.item_action(screen, index)
            }
            (Screen::Form, KeyAction::Cancel) => Some(CrudAction::Cancel),
            (Screen::ConfirmDelete, KeyAction::Cancel) => Some(CrudAction::CancelDelete),
            (Screen::Form, KeyAction::NextRelated) => {
                let count = self.session.related().len();
                if count > 0 {
                    self.related_focus = (self.related_focus + 1) % count;
                }
                None
            }
            (Screen::Form, KeyAction::CycleRelatedValue) => self.cycle_related_value(),
            _ => {
                debug!(?action, ?screen, "Key has no meaning on this screen");
                None
            }
        };
        match crud {
            Some(action) => self.dispatch(action),
            None => HostSignal::Continue,
        }
    }

    /// Item action on the row under the cursor, or on the item being edited.
    fn item_action(&self, screen: Screen, index: usize) -> Option<CrudAction> {
        let handler = self.session.catalog().item_action(index)?.key.clone();
        let id = match screen {
            Screen::Form => self.session.codec().target_id(),
            _ => self.cursor_row(),
        }?;
        Some(CrudAction::ItemAction { handler, id })
    }

    /// Next option of the focused select; past the last option nothing is selected.
    fn cycle_related_value(&self) -> Option<CrudAction> {
        let select = self.session.related().get(self.related_focus)?;
        let next = match &select.selected {
            None => select.options.first().cloned(),
            Some(current) => select
                .options
                .iter()
                .position(|option| option == current)
                .and_then(|i| select.options.get(i + 1))
                .cloned(),
        };
        Some(CrudAction::RelatedChanged {
            select: select.name.clone(),
            value: next,
        })
    }

    /// Hand an action to the session, apply its updates and run its effect.
    pub fn dispatch(&mut self, action: CrudAction) -> HostSignal {
        let transition = self.session.handle_action(action);
        apply_updates(&mut self.page, &self.slots, &transition.updates);
        let Some(effect) = transition.effect else {
            return HostSignal::Continue;
        };

        self.transcript.push(effect.clone());
        let next_url = match &effect {
            Effect::Navigate { url } => Some(url.clone()),
            Effect::Submit(form) => Some(form.action_url.clone()),
            Effect::ClosePopup => None,
        };
        run_effect(&mut self.page, effect);

        match next_url {
            Some(url) => {
                info!(%url, "Loading next page");
                self.reload(&url);
                HostSignal::Continue
            }
            None => {
                self.closed = true;
                HostSignal::Quit
            }
        }
    }
}

#[cfg(test)]
#[path = "host_tests.rs"]
mod tests;
