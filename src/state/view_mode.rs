//! List-vs-edit mode resolution.
//!
//! Pure functions. Applying the resolved mode to the page happens through
//! the DOM port, see [`crate::port::apply_updates`].

use super::url_codec::UrlStateCodec;
use crate::model::query::OPERATION_KEY;
use crate::model::{Operation, PageUpdate, UiMode};

/// Resolve the mode of a page load.
///
/// `Edit` when any `o` parameter equals `edit` or the error flag is set;
/// `List` otherwise.
pub fn resolve_mode(url: &str, error_flag_present: bool) -> UiMode {
    resolve_mode_for(&UrlStateCodec::parse(url), error_flag_present)
}

/// [`resolve_mode`] over an already parsed URL.
pub fn resolve_mode_for(codec: &UrlStateCodec, error_flag_present: bool) -> UiMode {
    let edit_requested = codec
        .values(OPERATION_KEY)
        .any(|value| value == Operation::Edit.as_str());
    if edit_requested || error_flag_present {
        UiMode::Edit
    } else {
        UiMode::List
    }
}

/// Region updates that make exactly one region visible.
pub fn region_updates(mode: UiMode) -> [PageUpdate; 2] {
    [
        PageUpdate::HideRegion(mode.hidden_region()),
        PageUpdate::ShowRegion(mode.visible_region()),
    ]
}
