//! Error types for crudctl.
//!
//! The controller core has no error hierarchy of its own: malformed query
//! strings parse leniently and missing page slots degrade to logged no-ops.
//! Errors exist only at the edges, where the host loads its configuration,
//! reads a page fixture or drives the terminal.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned from `main`
//!   - [`PageError`] - Page fixture reading/validation failures
//!   - [`PortError`] - A named slot is absent from the page (recoverable)
//!   - `std::io::Error` - Terminal failures

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The page fixture could not be loaded.
    ///
    /// Fatal: without rows and actions there is nothing to drive.
    #[error("Failed to load page: {0}")]
    Page(#[from] PageError),

    /// Terminal or rendering error.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors encountered while loading a page fixture.
#[derive(Debug, Error)]
pub enum PageError {
    /// The fixture file could not be read.
    #[error("Failed to read page fixture at {path:?}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The fixture is not valid JSON or misses required fields.
    ///
    /// Empty row ids and empty handler keys are rejected here too, since the
    /// identifier smart constructors run during deserialization.
    #[error("Invalid page fixture: {reason}")]
    InvalidFixture {
        /// Parser error details.
        reason: String,
    },

    /// Two rows share the same id; selection could not tell them apart.
    #[error("Duplicate row id: {id}")]
    DuplicateRow {
        /// The repeated id.
        id: String,
    },

    /// A related select's link template has no `__fk__` placeholder.
    #[error("Change link template of '{select}' has no __fk__ placeholder")]
    MissingPlaceholder {
        /// Name of the offending select.
        select: String,
    },
}

/// A page slot the core wanted to touch does not exist.
///
/// Never fatal. The effect becomes a no-op and the condition is logged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PortError {
    /// No element carries this id.
    #[error("Page has no slot named '{slot}'")]
    MissingSlot {
        /// Slot id as configured in `[slots]`.
        slot: String,
    },
}

impl PortError {
    /// `MissingSlot` for `slot`.
    pub fn missing(slot: impl Into<String>) -> Self {
        PortError::MissingSlot { slot: slot.into() }
    }
}
