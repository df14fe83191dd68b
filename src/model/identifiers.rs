//! Identifier newtypes with smart constructors.
//!
//! Item ids and handler keys are opaque strings supplied by the server.
//! Both reject the empty string at construction time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Handler key the server reserves for "delete the selected items".
///
/// Bulk actions with this key are turned into a navigation instead of a
/// form submission.
pub const BULK_DELETE_HANDLER: &str = "__delete_multiple_items";

/// Primary key of one row, as rendered by the server.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    /// Smart constructor: validates non-empty id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidItemId> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidItemId::Empty);
        }
        Ok(Self(raw))
    }

    /// The raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form for use inside a query parameter value.
    pub fn encoded(&self) -> String {
        urlencoding::encode(&self.0).into_owned()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Name of a server-side action handler (bulk or per-item).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HandlerKey(String);

impl HandlerKey {
    /// Smart constructor: validates non-empty handler key
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidHandlerKey> {
        let raw = raw.into();
        if raw.is_empty() {
            return Err(InvalidHandlerKey::Empty);
        }
        Ok(Self(raw))
    }

    /// The bulk-delete sentinel handler.
    pub fn bulk_delete() -> Self {
        Self(BULK_DELETE_HANDLER.to_string())
    }

    /// The raw key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this is [`BULK_DELETE_HANDLER`].
    pub fn is_bulk_delete(&self) -> bool {
        self.0 == BULK_DELETE_HANDLER
    }
}

impl fmt::Display for HandlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for ItemId {
    type Error = InvalidItemId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl TryFrom<String> for HandlerKey {
    type Error = InvalidHandlerKey;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<HandlerKey> for String {
    fn from(key: HandlerKey) -> Self {
        key.0
    }
}

// ===== Error Types =====

/// Rejected [`ItemId`] input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidItemId {
    /// The id was empty.
    #[error("Item ID cannot be empty")]
    Empty,
}

/// Rejected [`HandlerKey`] input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidHandlerKey {
    /// The key was empty.
    #[error("Handler key cannot be empty")]
    Empty,
}

// ===== Tests =====
