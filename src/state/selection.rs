//! Row selection tracking.
//!
//! One tracker per page load. The per-row checked flags are authoritative;
//! `selected_count` always equals the number of checked rows, so it stays
//! within `0..=total_count` even when the host delivers a redundant or
//! out-of-range checkbox event.

use crate::model::ItemId;
use serde::Serialize;
use tracing::{debug, warn};

/// Snapshot of the selection.
///
/// `all_selected` is derived: `selected_count == total_count && total_count > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SelectionState {
    /// Checked rows.
    pub selected_count: usize,
    /// Rendered rows.
    pub total_count: usize,
    /// Every row is checked and there is at least one.
    pub all_selected: bool,
}

impl SelectionState {
    fn new(selected_count: usize, total_count: usize) -> Self {
        Self {
            selected_count,
            total_count,
            all_selected: total_count > 0 && selected_count == total_count,
        }
    }

    /// Bulk actions are available while anything is selected.
    pub fn bulk_actions_enabled(&self) -> bool {
        self.selected_count > 0
    }
}

/// Change of the bulk action menu's availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTransition {
    /// Menu becomes available.
    Enable,
    /// Menu becomes unavailable.
    Disable,
}

/// Menu change between two snapshots.
///
/// `Enable` exactly on `0 -> >0`, `Disable` exactly on `>0 -> 0`.
pub fn menu_transition(previous: &SelectionState, next: &SelectionState) -> Option<MenuTransition> {
    match (previous.bulk_actions_enabled(), next.bulk_actions_enabled()) {
        (false, true) => Some(MenuTransition::Enable),
        (true, false) => Some(MenuTransition::Disable),
        _ => None,
    }
}

/// Checked state of every rendered row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionTracker {
    rows: Vec<ItemId>,
    checked: Vec<bool>,
    selected_count: usize,
}

impl SelectionTracker {
    /// Tracker for the rows rendered by the server, all unchecked.
    pub fn new(rows: Vec<ItemId>) -> Self {
        let checked = vec![false; rows.len()];
        Self {
            rows,
            checked,
            selected_count: 0,
        }
    }

    /// Current snapshot.
    pub fn state(&self) -> SelectionState {
        SelectionState::new(self.selected_count, self.rows.len())
    }

    /// Number of rows on the page.
    pub fn total_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of checked rows.
    pub fn selected_count(&self) -> usize {
        self.selected_count
    }

    /// Out-of-range rows read as unchecked.
    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Id of the row at `index`.
    pub fn row_id(&self, index: usize) -> Option<&ItemId> {
        self.rows.get(index)
    }

    /// Apply one checkbox event.
    ///
    /// Counts move by exactly one per effective event. Events that would not
    /// change the row (already in that state) and unknown rows are ignored.
    pub fn toggle(&mut self, index: usize, is_now_checked: bool) -> SelectionState {
        let Some(slot) = self.checked.get_mut(index) else {
            warn!(index, total = self.rows.len(), "Checkbox event for unknown row ignored");
            return self.state();
        };

        if *slot == is_now_checked {
            debug!(index, is_now_checked, "Redundant checkbox event ignored");
            return self.state();
        }

        *slot = is_now_checked;
        if is_now_checked {
            self.selected_count = (self.selected_count + 1).min(self.rows.len());
        } else {
            self.selected_count = self.selected_count.saturating_sub(1);
        }

        let state = self.state();
        debug!(index, is_now_checked, selected = state.selected_count, "Row toggled");
        state
    }

    /// Check every row.
    pub fn select_all(&mut self) -> SelectionState {
        self.checked.iter_mut().for_each(|c| *c = true);
        self.selected_count = self.rows.len();
        debug!(selected = self.selected_count, "All rows selected");
        self.state()
    }

    /// Uncheck every row.
    pub fn select_none(&mut self) -> SelectionState {
        self.checked.iter_mut().for_each(|c| *c = false);
        self.selected_count = 0;
        debug!("Selection cleared");
        self.state()
    }

    /// Ids of the checked rows, in row order.
    pub fn selected_ids(&self) -> Vec<ItemId> {
        self.rows
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(id, _)| id.clone())
            .collect()
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
