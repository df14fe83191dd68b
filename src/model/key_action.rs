//! Host-level keyboard actions independent of key bindings.

/// User intents of the terminal host.
///
/// These represent what the user pointed at, not specific keys. The host
/// turns them into [`CrudAction`](super::CrudAction)s using its cursor
/// position; the mapping from `KeyEvent` to `KeyAction` is `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor
    /// Move the row cursor up. Default: k/↑
    CursorUp,
    /// Move the row cursor down. Default: j/↓
    CursorDown,

    // Selection
    /// Click the checkbox of the row under the cursor. Default: Space
    ToggleRow,
    /// Click the select-all control. Default: *
    ToggleSelectAll,

    // Item operations
    /// Add-item button. Default: n
    AddItem,
    /// Edit the row under the cursor. Default: e/Enter
    EditItem,
    /// Delete the row under the cursor. Default: d
    DeleteItem,
    /// Delete all selected rows. Default: D
    DeleteSelected,
    /// Bulk action menu entry (0-based). Default: 1-9
    BulkAction(usize),
    /// Custom action of the row under the cursor (0-based). Default: F1-F9
    ItemAction(usize),
    /// Cancel edit or delete. Default: Esc
    Cancel,

    // Related-object selects (edit panel)
    /// Focus the next related select. Default: Tab
    NextRelated,
    /// Cycle the value of the focused related select. Default: r
    CycleRelatedValue,

    // Application
    /// Exit the host. Default: q/Ctrl+c
    Quit,
}
