//! Domain model types (pure).
//!
//! All types in this module are plain data with smart constructors.

pub mod action;
pub mod effect;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod mode;
pub mod page;
pub mod query;

// Re-export for convenience
pub use action::CrudAction;
pub use effect::{
    ActionRequest, ChangeLink, Effect, FormSubmission, HiddenField, Navigation, PageUpdate,
    Submission, SubmitScope,
};
pub use error::{AppError, PageError, PortError};
pub use identifiers::{HandlerKey, InvalidHandlerKey, InvalidItemId, ItemId, BULK_DELETE_HANDLER};
pub use key_action::KeyAction;
pub use mode::{Region, UiMode};
pub use page::{
    ActionCatalog, AlertPolicy, BulkAction, ErrorSignal, ItemAction, PageFixture, RelatedSelect,
    Row, FK_PLACEHOLDER,
};
pub use query::{Operation, QueryParameter, RESERVED_KEYS};
