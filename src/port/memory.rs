//! In-memory page.
//!
//! Holds the state of every slot the controller addresses and records the
//! terminal effects it receives. Backs the terminal host and the tests.

use super::DomPort;
use crate::config::SlotConfig;
use crate::model::{FormSubmission, PageFixture, PortError};
use std::collections::HashMap;
use tracing::info;

/// Observable state of one slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotState {
    /// Element is displayed.
    pub visible: bool,
    /// Control accepts input.
    pub enabled: bool,
    /// Checkbox state.
    pub checked: bool,
    /// Link target; `None` on a disabled link.
    pub href: Option<String>,
    /// Form field value.
    pub value: Option<String>,
    /// Alert blocks directly inside this container.
    pub alerts: usize,
}

impl SlotState {
    fn shown() -> Self {
        Self {
            visible: true,
            enabled: true,
            ..Self::default()
        }
    }
}

/// Terminal effect the page received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// Navigation to the URL.
    Navigated(String),
    /// Form submission.
    Submitted(FormSubmission),
    /// Popup surface closed.
    Closed,
}

/// [`DomPort`] over a map of slot states.
#[derive(Debug, Clone, Default)]
pub struct MemoryPage {
    slots: HashMap<String, SlotState>,
    events: Vec<PageEvent>,
}

impl MemoryPage {
    /// Page without any slots.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the slot `id`.
    pub fn with_slot(mut self, id: impl Into<String>, state: SlotState) -> Self {
        self.slots.insert(id.into(), state);
        self
    }

    /// The page as the server renders it for `page`: both regions visible,
    /// every checkbox unchecked, the action menu enabled.
    pub fn from_fixture(page: &PageFixture, slots: &SlotConfig) -> Self {
        let mut memory = Self::new()
            .with_slot(&slots.item_list, SlotState::shown())
            .with_slot(
                &slots.edit_panel,
                SlotState {
                    alerts: page.alerts.len(),
                    ..SlotState::shown()
                },
            )
            .with_slot(&slots.action_menu, SlotState::shown())
            .with_slot(&slots.select_all, SlotState::shown())
            .with_slot(&slots.action_form, SlotState::shown())
            .with_slot(
                &slots.error_field,
                SlotState {
                    value: page.error_field.clone(),
                    ..SlotState::default()
                },
            );
        for index in 0..page.rows.len() {
            memory = memory.with_slot(slots.row_checkbox(index), SlotState::shown());
        }
        for select in &page.related {
            memory = memory.with_slot(slots.change_link(&select.name), SlotState::shown());
        }
        memory
    }

    /// State of slot `id`, if the page has it.
    pub fn slot(&self, id: &str) -> Option<&SlotState> {
        self.slots.get(id)
    }

    /// Missing slots read as hidden.
    pub fn is_visible(&self, id: &str) -> bool {
        self.slot(id).is_some_and(|s| s.visible)
    }

    /// Missing slots read as disabled.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.slot(id).is_some_and(|s| s.enabled)
    }

    /// Missing slots read as unchecked.
    pub fn is_checked(&self, id: &str) -> bool {
        self.slot(id).is_some_and(|s| s.checked)
    }

    /// Link target of slot `id`.
    pub fn href(&self, id: &str) -> Option<&str> {
        self.slot(id).and_then(|s| s.href.as_deref())
    }

    /// Effects received, oldest first.
    pub fn events(&self) -> &[PageEvent] {
        &self.events
    }

    fn slot_mut(&mut self, id: &str) -> Result<&mut SlotState, PortError> {
        self.slots.get_mut(id).ok_or_else(|| PortError::missing(id))
    }
}

impl DomPort for MemoryPage {
    fn set_visible(&mut self, slot: &str, visible: bool) -> Result<(), PortError> {
        self.slot_mut(slot)?.visible = visible;
        Ok(())
    }

    fn set_enabled(&mut self, slot: &str, enabled: bool) -> Result<(), PortError> {
        self.slot_mut(slot)?.enabled = enabled;
        Ok(())
    }

    fn set_checked(&mut self, slot: &str, checked: bool) -> Result<(), PortError> {
        self.slot_mut(slot)?.checked = checked;
        Ok(())
    }

    fn set_link(&mut self, slot: &str, href: Option<&str>) -> Result<(), PortError> {
        let state = self.slot_mut(slot)?;
        state.href = href.map(str::to_string);
        state.enabled = href.is_some();
        Ok(())
    }

    fn field_value(&self, slot: &str) -> Result<Option<String>, PortError> {
        self.slot(slot)
            .map(|s| s.value.clone())
            .ok_or_else(|| PortError::missing(slot))
    }

    fn alert_count(&self, slot: &str) -> Result<usize, PortError> {
        self.slot(slot)
            .map(|s| s.alerts)
            .ok_or_else(|| PortError::missing(slot))
    }

    fn navigate(&mut self, url: &str) {
        info!(url, "Navigating");
        self.events.push(PageEvent::Navigated(url.to_string()));
    }

    fn submit_form(&mut self, submission: FormSubmission) -> Result<(), PortError> {
        if !self.slots.contains_key(&submission.form_id) {
            return Err(PortError::missing(submission.form_id));
        }
        info!(form = %submission.form_id, action = %submission.action_url, "Submitting form");
        self.events.push(PageEvent::Submitted(submission));
        Ok(())
    }

    fn close_surface(&mut self) {
        info!("Closing popup surface");
        self.events.push(PageEvent::Closed);
    }
}
