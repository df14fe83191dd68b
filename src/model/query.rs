//! Query-string vocabulary: parameters, reserved keys and operations.

use std::fmt;

/// Query parameter naming the CRUD operation of a page load.
pub const OPERATION_KEY: &str = "o";
/// Query parameter carrying a single target item id.
pub const ITEM_KEY: &str = "item";
/// Query parameter carrying a comma-joined list of item ids.
pub const ITEMS_KEY: &str = "items";
/// Query parameter the server adds to pages opened as popups.
pub const POPUP_KEY: &str = "_popup";

/// Keys the codec strips from the current URL and injects into new ones.
pub const RESERVED_KEYS: [&str; 3] = [OPERATION_KEY, ITEM_KEY, ITEMS_KEY];

/// One `name=value` segment of a query string.
///
/// The raw segment is kept so non-reserved parameters are re-emitted
/// byte-for-byte. A segment without `=` has an empty value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryParameter {
    raw: String,
    name_len: usize,
}

impl QueryParameter {
    /// Parse a single segment (the text between two `&`).
    pub fn parse(segment: &str) -> Self {
        let name_len = segment.find('=').unwrap_or(segment.len());
        Self {
            raw: segment.to_string(),
            name_len,
        }
    }

    /// Build a parameter from an already-encoded name and value.
    pub fn new(name: &str, value: &str) -> Self {
        Self {
            raw: format!("{name}={value}"),
            name_len: name.len(),
        }
    }

    /// Everything before the first `=`.
    pub fn name(&self) -> &str {
        &self.raw[..self.name_len]
    }

    /// Everything after the first `=`, or `""` when there is none.
    pub fn value(&self) -> &str {
        self.raw.get(self.name_len + 1..).unwrap_or("")
    }

    /// The segment exactly as it appeared in the URL.
    pub fn as_raw(&self) -> &str {
        &self.raw
    }

    /// Whether the name is one of [`RESERVED_KEYS`].
    pub fn is_reserved(&self) -> bool {
        RESERVED_KEYS.contains(&self.name())
    }
}

impl fmt::Display for QueryParameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Value of the `o` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Empty add form.
    Add,
    /// Edit form for `item`.
    Edit,
    /// Delete confirmation for `item`.
    Delete,
    /// Delete confirmation for `items`.
    DeleteMultiple,
    /// Custom action endpoint.
    Action,
}

impl Operation {
    /// Value as it appears in the query.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Edit => "edit",
            Operation::Delete => "delete",
            Operation::DeleteMultiple => "delete_multiple",
            Operation::Action => "action",
        }
    }

    /// Parse an `o` value. Unknown operations yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "add" => Some(Operation::Add),
            "edit" => Some(Operation::Edit),
            "delete" => Some(Operation::Delete),
            "delete_multiple" => Some(Operation::DeleteMultiple),
            "action" => Some(Operation::Action),
            _ => None,
        }
    }

    /// The `o=<operation>` segment.
    pub fn to_param(self) -> String {
        format!("{OPERATION_KEY}={}", self.as_str())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
