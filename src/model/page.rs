//! Server-rendered page description.
//!
//! A [`PageFixture`] is the host's stand-in for what the server renders into
//! one page: the rows (with their ids), the action catalog, related-object
//! selects on the edit form and the error signal.

use super::error::PageError;
use super::identifiers::{HandlerKey, ItemId, BULK_DELETE_HANDLER};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

/// Placeholder in a change-link template replaced by the selected value.
pub const FK_PLACEHOLDER: &str = "__fk__";

/// Entry of the bulk action menu.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BulkAction {
    /// Menu text.
    pub label: String,
    /// Handler posted with the selection.
    pub handler: HandlerKey,
}

/// Custom per-row action button.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ItemAction {
    /// Button text.
    pub title: String,
    /// Handler posted with the row id.
    pub key: HandlerKey,
}

/// Actions the page offers besides add/edit/delete.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct ActionCatalog {
    /// Bulk action menu entries, in menu order.
    #[serde(default)]
    pub bulk: Vec<BulkAction>,
    /// Buttons rendered on every row.
    #[serde(default)]
    pub item: Vec<ItemAction>,
}

impl ActionCatalog {
    /// Bulk action at menu position `index`.
    pub fn bulk_action(&self, index: usize) -> Option<&BulkAction> {
        self.bulk.get(index)
    }

    /// Item action at button position `index`.
    pub fn item_action(&self, index: usize) -> Option<&ItemAction> {
        self.item.get(index)
    }
}

/// One rendered row.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Row {
    /// Primary key of the row.
    pub id: ItemId,
    /// Rendered column values.
    #[serde(default)]
    pub cells: Vec<String>,
}

/// Related-object select on the edit form with its change link.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RelatedSelect {
    /// Field name; also names the change-link slot.
    pub name: String,
    /// Link href with a `__fk__` placeholder.
    pub link_template: String,
    /// Selectable values, in option order.
    #[serde(default)]
    pub options: Vec<String>,
    /// Value selected when the page was rendered.
    #[serde(default)]
    pub selected: Option<String>,
}

/// How the error signal is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlertPolicy {
    /// Hidden error field set to "1", or any alert block in the edit form.
    #[default]
    HiddenFieldOrAlerts,
    /// Only the hidden error field counts; alert blocks are ignored.
    HiddenFieldOnly,
}

/// Raw error evidence read from the rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ErrorSignal {
    /// The hidden error field carried the value "1".
    pub form_has_errors: bool,
    /// Number of alert blocks directly inside the edit form.
    pub alert_count: usize,
}

impl ErrorSignal {
    /// Whether the page reports a failed save under `policy`.
    pub fn is_present(&self, policy: AlertPolicy) -> bool {
        match policy {
            AlertPolicy::HiddenFieldOrAlerts => self.form_has_errors || self.alert_count > 0,
            AlertPolicy::HiddenFieldOnly => self.form_has_errors,
        }
    }
}

/// Everything the server renders into one page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PageFixture {
    /// Page heading.
    #[serde(default = "default_title")]
    pub title: String,
    /// Column headings.
    #[serde(default)]
    pub columns: Vec<String>,
    /// Rows in display order.
    #[serde(default)]
    pub rows: Vec<Row>,
    /// Bulk and per-item actions.
    #[serde(default)]
    pub actions: ActionCatalog,
    /// Related-object selects on the edit form.
    #[serde(default)]
    pub related: Vec<RelatedSelect>,
    /// Value of the hidden error field (server sets "1" after a failed save).
    #[serde(default)]
    pub error_field: Option<String>,
    /// Alert blocks rendered inside the edit form.
    #[serde(default)]
    pub alerts: Vec<String>,
}

fn default_title() -> String {
    "Items".to_string()
}

impl PageFixture {
    /// Parse a fixture from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, PageError> {
        let fixture: PageFixture =
            serde_json::from_str(json).map_err(|e| PageError::InvalidFixture {
                reason: e.to_string(),
            })?;
        fixture.validate()?;
        Ok(fixture)
    }

    /// Load a fixture file.
    pub fn load(path: &Path) -> Result<Self, PageError> {
        let contents = std::fs::read_to_string(path).map_err(|source| PageError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Demo page with `count` numbered rows and a small action catalog.
    pub fn demo(count: usize) -> Self {
        let rows = (1..=count)
            .filter_map(|n| {
                let status = if n % 2 == 0 { "draft" } else { "published" };
                ItemId::new(n.to_string()).ok().map(|id| Row {
                    id,
                    cells: vec![format!("Item {n}"), status.to_string()],
                })
            })
            .collect();
        let bulk = [
            ("Delete selected", BULK_DELETE_HANDLER),
            ("Publish", "publish"),
        ]
        .into_iter()
        .filter_map(|(label, key)| {
            HandlerKey::new(key).ok().map(|handler| BulkAction {
                label: label.to_string(),
                handler,
            })
        })
        .collect();
        let item = HandlerKey::new("archive")
            .ok()
            .map(|key| ItemAction {
                title: "Archive".to_string(),
                key,
            })
            .into_iter()
            .collect();

        Self {
            title: default_title(),
            columns: vec!["Name".to_string(), "Status".to_string()],
            rows,
            actions: ActionCatalog { bulk, item },
            related: Vec::new(),
            error_field: None,
            alerts: Vec::new(),
        }
    }

    /// Ids of all rows, in display order.
    pub fn row_ids(&self) -> Vec<ItemId> {
        self.rows.iter().map(|r| r.id.clone()).collect()
    }

    fn validate(&self) -> Result<(), PageError> {
        let mut seen = HashSet::new();
        for row in &self.rows {
            if !seen.insert(row.id.as_str()) {
                return Err(PageError::DuplicateRow {
                    id: row.id.to_string(),
                });
            }
        }
        for select in &self.related {
            if !select.link_template.contains(FK_PLACEHOLDER) {
                return Err(PageError::MissingPlaceholder {
                    select: select.name.clone(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "page_tests.rs"]
mod tests;
