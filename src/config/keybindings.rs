//! Keyboard bindings configuration.

use crate::model::key_action::KeyAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Maps keyboard events to host actions.
///
/// Provides vim-style defaults for the list, the action menu and the edit panel.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    bindings: HashMap<KeyEvent, KeyAction>,
}

impl KeyBindings {
    /// Look up the action for a key event.
    pub fn get(&self, key: KeyEvent) -> Option<KeyAction> {
        self.bindings.get(&key).copied()
    }

    fn bind(&mut self, code: KeyCode, modifiers: KeyModifiers, action: KeyAction) {
        self.bindings.insert(KeyEvent::new(code, modifiers), action);
    }
}

impl Default for KeyBindings {
    fn default() -> Self {
        let mut keys = Self {
            bindings: HashMap::new(),
        };
        let none = KeyModifiers::NONE;

        // Cursor
        keys.bind(KeyCode::Char('j'), none, KeyAction::CursorDown);
        keys.bind(KeyCode::Char('k'), none, KeyAction::CursorUp);
        keys.bind(KeyCode::Down, none, KeyAction::CursorDown);
        keys.bind(KeyCode::Up, none, KeyAction::CursorUp);

        // Selection
        keys.bind(KeyCode::Char(' '), none, KeyAction::ToggleRow);
        keys.bind(KeyCode::Char('*'), none, KeyAction::ToggleSelectAll);
        keys.bind(KeyCode::Char('*'), KeyModifiers::SHIFT, KeyAction::ToggleSelectAll);

        // Item operations
        keys.bind(KeyCode::Char('n'), none, KeyAction::AddItem);
        keys.bind(KeyCode::Char('e'), none, KeyAction::EditItem);
        keys.bind(KeyCode::Enter, none, KeyAction::EditItem);
        keys.bind(KeyCode::Char('d'), none, KeyAction::DeleteItem);
        keys.bind(KeyCode::Char('D'), KeyModifiers::SHIFT, KeyAction::DeleteSelected);
        keys.bind(KeyCode::Esc, none, KeyAction::Cancel);

        // Action menu entries and per-row actions
        for n in 1..=9u8 {
            keys.bind(
                KeyCode::Char(char::from(b'0' + n)),
                none,
                KeyAction::BulkAction(usize::from(n - 1)),
            );
            keys.bind(KeyCode::F(n), none, KeyAction::ItemAction(usize::from(n - 1)));
        }

        // Related selects
        keys.bind(KeyCode::Tab, none, KeyAction::NextRelated);
        keys.bind(KeyCode::Char('r'), none, KeyAction::CycleRelatedValue);

        // Application controls
        keys.bind(KeyCode::Char('q'), none, KeyAction::Quit);
        keys.bind(KeyCode::Char('c'), KeyModifiers::CONTROL, KeyAction::Quit);

        keys
    }
}
