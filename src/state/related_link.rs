//! Related-object change links.
//!
//! Every related-object select on the edit form has a "change" link whose
//! href is a template with a `__fk__` placeholder. The link points at the
//! selected object, or is disabled while nothing is selected.

use crate::model::{ChangeLink, PageUpdate, RelatedSelect};
pub use crate::model::FK_PLACEHOLDER;

/// Link state for a template and the currently selected value.
///
/// Only the first placeholder is replaced. The value is percent-encoded.
pub fn resolve_change_link(template: &str, selected: Option<&str>) -> ChangeLink {
    match selected.filter(|value| !value.is_empty()) {
        Some(value) => ChangeLink::Enabled {
            href: template.replacen(FK_PLACEHOLDER, &urlencoding::encode(value), 1),
        },
        None => ChangeLink::Disabled,
    }
}

/// Page update for one select's change link.
pub fn change_link_update(select: &RelatedSelect, selected: Option<&str>) -> PageUpdate {
    PageUpdate::SetChangeLink {
        select: select.name.clone(),
        link: resolve_change_link(&select.link_template, selected),
    }
}
