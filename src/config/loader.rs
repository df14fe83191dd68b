//! Configuration file loading with precedence handling.

use crate::model::AlertPolicy;
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// URL the host opens when neither CLI, env nor file name one.
pub const DEFAULT_START_URL: &str = "/crud/";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// A slot id is empty.
    #[error("Slot '{slot}' must not be empty")]
    EmptySlot {
        /// Key of the slot in `[slots]`.
        slot: &'static str,
    },
}

/// Element ids the controller addresses on a page.
///
/// Row checkboxes are `{row_checkbox_prefix}{index}`; the change link of a
/// related select is `{related_link_class}-{select name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotConfig {
    /// Container of the item list.
    pub item_list: String,
    /// Container of the add/edit form.
    pub edit_panel: String,
    /// Bulk action menu.
    pub action_menu: String,
    /// Select-all checkbox.
    pub select_all: String,
    /// Prefix of the per-row checkbox ids.
    pub row_checkbox_prefix: String,
    /// Form that carries action submissions.
    pub action_form: String,
    /// Hidden field the server sets to "1" after a failed save.
    pub error_field: String,
    /// Prefix of related-object change link ids.
    pub related_link_class: String,
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self {
            item_list: "itemList".to_string(),
            edit_panel: "editItemPanel".to_string(),
            action_menu: "id_action_dropdown".to_string(),
            select_all: "id_select_all".to_string(),
            row_checkbox_prefix: "id_select_".to_string(),
            action_form: "id_form_action".to_string(),
            error_field: "id_form_haserrors".to_string(),
            related_link_class: "change-existing".to_string(),
        }
    }
}

impl SlotConfig {
    /// Checkbox id of the row at `index`.
    pub fn row_checkbox(&self, index: usize) -> String {
        format!("{}{index}", self.row_checkbox_prefix)
    }

    /// Change link id of the related select `select`.
    pub fn change_link(&self, select: &str) -> String {
        format!("{}-{select}", self.related_link_class)
    }

    /// Reject empty slot ids; every other string is a valid id.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let slots = [
            ("item_list", &self.item_list),
            ("edit_panel", &self.edit_panel),
            ("action_menu", &self.action_menu),
            ("select_all", &self.select_all),
            ("row_checkbox_prefix", &self.row_checkbox_prefix),
            ("action_form", &self.action_form),
            ("error_field", &self.error_field),
            ("related_link_class", &self.related_link_class),
        ];
        match slots.into_iter().find(|(_, value)| value.trim().is_empty()) {
            Some((slot, _)) => Err(ConfigError::EmptySlot { slot }),
            None => Ok(()),
        }
    }
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/crudctl/config.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Page URL opened on startup.
    #[serde(default)]
    pub start_url: Option<String>,

    /// Treat the page as a popup regardless of `_popup`.
    #[serde(default)]
    pub popup: Option<bool>,

    /// How alerts in the edit form count towards the error signal.
    #[serde(default)]
    pub error_signal: Option<AlertPolicy>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Slot id overrides.
    #[serde(default)]
    pub slots: Option<SlotsSection>,
}

/// `[slots]` section; absent keys keep their defaults.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct SlotsSection {
    /// Overrides `item_list`.
    #[serde(default)]
    pub item_list: Option<String>,
    /// Overrides `edit_panel`.
    #[serde(default)]
    pub edit_panel: Option<String>,
    /// Overrides `action_menu`.
    #[serde(default)]
    pub action_menu: Option<String>,
    /// Overrides `select_all`.
    #[serde(default)]
    pub select_all: Option<String>,
    /// Overrides `row_checkbox_prefix`.
    #[serde(default)]
    pub row_checkbox_prefix: Option<String>,
    /// Overrides `action_form`.
    #[serde(default)]
    pub action_form: Option<String>,
    /// Overrides `error_field`.
    #[serde(default)]
    pub error_field: Option<String>,
    /// Overrides `related_link_class`.
    #[serde(default)]
    pub related_link_class: Option<String>,
}

impl SlotsSection {
    fn merge_into(self, defaults: SlotConfig) -> SlotConfig {
        SlotConfig {
            item_list: self.item_list.unwrap_or(defaults.item_list),
            edit_panel: self.edit_panel.unwrap_or(defaults.edit_panel),
            action_menu: self.action_menu.unwrap_or(defaults.action_menu),
            select_all: self.select_all.unwrap_or(defaults.select_all),
            row_checkbox_prefix: self
                .row_checkbox_prefix
                .unwrap_or(defaults.row_checkbox_prefix),
            action_form: self.action_form.unwrap_or(defaults.action_form),
            error_field: self.error_field.unwrap_or(defaults.error_field),
            related_link_class: self
                .related_link_class
                .unwrap_or(defaults.related_link_class),
        }
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Page URL opened on startup.
    pub start_url: String,
    /// Force popup context.
    pub popup: bool,
    /// Error signal interpretation.
    pub error_signal: AlertPolicy,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Slot ids.
    pub slots: SlotConfig,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            start_url: DEFAULT_START_URL.to_string(),
            popup: false,
            error_signal: AlertPolicy::default(),
            log_file_path: default_log_path(),
            slots: SlotConfig::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/crudctl/crudctl.log` on Unix-like systems,
/// or the platform state directory elsewhere. Falls back to the current
/// directory if no state directory exists.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("crudctl").join("crudctl.log")
    } else {
        PathBuf::from("crudctl.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path (`~/.config/crudctl/config.toml` on Unix).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("crudctl").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `CRUDCTL_CONFIG` environment variable
/// 3. Default path `~/.config/crudctl/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("CRUDCTL_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `CRUDCTL_URL`: Override start URL
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(url) = std::env::var("CRUDCTL_URL") {
        config.start_url = url;
    }

    config
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        start_url: config.start_url.unwrap_or(defaults.start_url),
        popup: config.popup.unwrap_or(defaults.popup),
        error_signal: config.error_signal.unwrap_or(defaults.error_signal),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        slots: match config.slots {
            Some(section) => section.merge_into(defaults.slots),
            None => defaults.slots,
        },
    }
}

/// Apply CLI argument overrides to resolved config.
///
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    url_override: Option<String>,
    popup_override: Option<bool>,
) -> ResolvedConfig {
    if let Some(url) = url_override {
        config.start_url = url;
    }

    if let Some(popup) = popup_override {
        config.popup = popup;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
