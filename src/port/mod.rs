//! Page access port.
//!
//! The controller core never touches a page directly. It emits
//! [`PageUpdate`]s and [`Effect`]s; the functions here apply them through a
//! [`DomPort`], addressing elements by the slot ids of [`SlotConfig`].
//! A slot the page does not have degrades to a logged no-op.

pub mod memory;

pub use memory::{MemoryPage, PageEvent, SlotState};

use crate::config::SlotConfig;
use crate::model::{ChangeLink, Effect, ErrorSignal, FormSubmission, PageUpdate, PortError, Region};
use tracing::{debug, warn};

/// Minimal set of page capabilities the controller needs.
pub trait DomPort {
    /// Show or hide an element.
    fn set_visible(&mut self, slot: &str, visible: bool) -> Result<(), PortError>;

    /// Enable or disable a control.
    fn set_enabled(&mut self, slot: &str, enabled: bool) -> Result<(), PortError>;

    /// Check or uncheck a checkbox.
    fn set_checked(&mut self, slot: &str, checked: bool) -> Result<(), PortError>;

    /// Point a link at `href`, or strip its href and mark it disabled.
    fn set_link(&mut self, slot: &str, href: Option<&str>) -> Result<(), PortError>;

    /// Current value of a form field.
    fn field_value(&self, slot: &str) -> Result<Option<String>, PortError>;

    /// Number of alert blocks directly inside a container.
    fn alert_count(&self, slot: &str) -> Result<usize, PortError> {
        let _ = slot;
        Ok(0)
    }

    /// Replace the page with the document at `url`.
    fn navigate(&mut self, url: &str);

    /// Append the hidden fields to the form, point it at the action URL and submit.
    fn submit_form(&mut self, submission: FormSubmission) -> Result<(), PortError>;

    /// Close the popup surface this page lives in.
    fn close_surface(&mut self);
}

fn report(result: Result<(), PortError>, update: &PageUpdate) {
    if let Err(err) = result {
        warn!(%err, ?update, "Page update skipped");
    }
}

fn region_slot(slots: &SlotConfig, region: Region) -> &str {
    match region {
        Region::ItemList => &slots.item_list,
        Region::EditPanel => &slots.edit_panel,
    }
}

/// Apply one in-page update.
pub fn apply_update<P: DomPort + ?Sized>(port: &mut P, slots: &SlotConfig, update: &PageUpdate) {
    let result = match update {
        PageUpdate::ShowRegion(region) => port.set_visible(region_slot(slots, *region), true),
        PageUpdate::HideRegion(region) => port.set_visible(region_slot(slots, *region), false),
        PageUpdate::SetRowChecked { index, checked } => {
            port.set_checked(&slots.row_checkbox(*index), *checked)
        }
        PageUpdate::SetSelectAllChecked(checked) => port.set_checked(&slots.select_all, *checked),
        PageUpdate::SetActionMenuEnabled(enabled) => port.set_enabled(&slots.action_menu, *enabled),
        PageUpdate::SetChangeLink { select, link } => {
            let href = match link {
                ChangeLink::Enabled { href } => Some(href.as_str()),
                ChangeLink::Disabled => None,
            };
            port.set_link(&slots.change_link(select), href)
        }
    };
    report(result, update);
}

/// Apply updates in order.
pub fn apply_updates<P: DomPort + ?Sized>(port: &mut P, slots: &SlotConfig, updates: &[PageUpdate]) {
    for update in updates {
        apply_update(port, slots, update);
    }
}

/// Hand a terminal effect to the page.
pub fn run_effect<P: DomPort + ?Sized>(port: &mut P, effect: Effect) {
    match effect {
        Effect::Navigate { url } => port.navigate(&url),
        Effect::Submit(submission) => {
            if let Err(err) = port.submit_form(submission) {
                warn!(%err, "Form submission skipped");
            }
        }
        Effect::ClosePopup => port.close_surface(),
    }
}

/// Read the server's error evidence from the rendered page.
///
/// A missing error field or edit panel counts as "no error".
pub fn read_error_signal<P: DomPort + ?Sized>(port: &P, slots: &SlotConfig) -> ErrorSignal {
    let form_has_errors = match port.field_value(&slots.error_field) {
        Ok(value) => value.as_deref() == Some("1"),
        Err(err) => {
            debug!(%err, "No error field on page");
            false
        }
    };
    let alert_count = port.alert_count(&slots.edit_panel).unwrap_or_else(|err| {
        debug!(%err, "No edit panel to count alerts in");
        0
    });
    ErrorSignal {
        form_has_errors,
        alert_count,
    }
}

#[cfg(test)]
#[path = "port_tests.rs"]
mod tests;
