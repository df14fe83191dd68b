//! Page controller state machine (pure).
//!
//! All transitions are pure functions testable without a page or terminal.

pub mod dispatcher;
pub mod related_link;
pub mod selection;
pub mod session;
pub mod url_codec;
pub mod view_mode;

// Re-export for convenience
pub use dispatcher::ActionDispatcher;
pub use related_link::{change_link_update, resolve_change_link};
pub use selection::{menu_transition, MenuTransition, SelectionState, SelectionTracker};
pub use session::{PageContext, PageSession, Transition};
pub use url_codec::{base_url, compose_url, parse_query, UrlStateCodec};
pub use view_mode::{region_updates, resolve_mode, resolve_mode_for};
