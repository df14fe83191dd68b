//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn write_temp(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(name);
    fs::write(&path, contents).expect("Failed to write test config");
    path
}

#[test]
fn default_config_path_contains_crudctl_config_toml() {
    let path = default_config_path().expect("Should have default path");
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("crudctl") && path_str.ends_with("config.toml"),
        "Path should contain 'crudctl' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn default_log_path_ends_with_crudctl_log() {
    let path = default_log_path();
    assert!(
        path.to_string_lossy().ends_with("crudctl.log"),
        "got: {:?}",
        path
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let config_path = write_temp(
        "crudctl_test_config.toml",
        r#"
start_url = "/books/?page=2"
popup = true
error_signal = "hidden-field-only"

[slots]
action_menu = "bulk-menu"
row_checkbox_prefix = "row_"
"#,
    );

    let config = load_config_file(&config_path)
        .expect("Should successfully parse valid TOML")
        .expect("Should return Some(ConfigFile) for existing file");

    assert_eq!(config.start_url.as_deref(), Some("/books/?page=2"));
    assert_eq!(config.popup, Some(true));
    assert_eq!(config.error_signal, Some(AlertPolicy::HiddenFieldOnly));
    let slots = config.slots.expect("slots section");
    assert_eq!(slots.action_menu.as_deref(), Some("bulk-menu"));
    assert_eq!(slots.edit_panel, None);

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_returns_error_for_invalid_toml() {
    let config_path = write_temp("crudctl_test_invalid.toml", "this is not valid TOML ][}{");

    match load_config_file(&config_path) {
        Err(ConfigError::ParseError { path, reason: _ }) => assert_eq!(path, config_path),
        other => panic!("Expected ParseError, got {:?}", other),
    }

    fs::remove_file(config_path).ok();
}

#[test]
fn load_config_file_rejects_unknown_error_signal() {
    let config_path = write_temp("crudctl_test_bad_signal.toml", r#"error_signal = "sometimes""#);

    assert!(matches!(
        load_config_file(&config_path),
        Err(ConfigError::ParseError { .. })
    ));

    fs::remove_file(config_path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let result: Result<ConfigFile, _> = toml::from_str("theme = \"monokai\"");
    assert!(result.is_err(), "unknown top-level keys are rejected");

    let result: Result<ConfigFile, _> = toml::from_str("[slots]\nsidebar = \"x\"");
    assert!(result.is_err(), "unknown slot keys are rejected");
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();
    assert_eq!(config.start_url, "/crud/");
    assert!(!config.popup);
    assert_eq!(config.error_signal, AlertPolicy::HiddenFieldOrAlerts);
    assert_eq!(config.slots.action_form, "id_form_action");
    assert_eq!(config.slots.error_field, "id_form_haserrors");
}

#[test]
fn merge_config_overrides_only_present_fields() {
    let file = ConfigFile {
        start_url: Some("/people/".to_string()),
        slots: Some(SlotsSection {
            select_all: Some("all".to_string()),
            ..SlotsSection::default()
        }),
        ..ConfigFile::default()
    };

    let resolved = merge_config(Some(file));
    let defaults = ResolvedConfig::default();

    assert_eq!(resolved.start_url, "/people/");
    assert_eq!(resolved.popup, defaults.popup);
    assert_eq!(resolved.log_file_path, defaults.log_file_path);
    assert_eq!(resolved.slots.select_all, "all");
    assert_eq!(resolved.slots.item_list, defaults.slots.item_list);
}

#[test]
fn config_file_log_path_overrides_default() {
    let custom_path = PathBuf::from("/custom/path/to/app.log");
    let file = ConfigFile {
        log_file_path: Some(custom_path.clone()),
        ..ConfigFile::default()
    };
    assert_eq!(merge_config(Some(file)).log_file_path, custom_path);
}

// ===== Slots =====

#[test]
fn slot_names_are_derived_from_prefixes() {
    let slots = SlotConfig::default();
    assert_eq!(slots.row_checkbox(3), "id_select_3");
    assert_eq!(slots.change_link("category"), "change-existing-category");
}

#[test]
fn empty_slot_is_rejected() {
    let slots = SlotConfig {
        action_menu: "  ".to_string(),
        ..SlotConfig::default()
    };
    assert_eq!(
        slots.validate(),
        Err(ConfigError::EmptySlot {
            slot: "action_menu"
        })
    );
    assert_eq!(SlotConfig::default().validate(), Ok(()));
}

// ===== Environment =====

/// RAII guard to ensure environment variable cleanup even under test parallelism.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(crudctl_url)]
fn apply_env_overrides_respects_crudctl_url() {
    let _guard = EnvGuard::new("CRUDCTL_URL");
    env::set_var("CRUDCTL_URL", "/orders/?o=add");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.start_url, "/orders/?o=add");
    assert_eq!(result.slots, SlotConfig::default());
}

#[test]
#[serial(crudctl_url)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new("CRUDCTL_URL");
    let base = ResolvedConfig::default();
    assert_eq!(apply_env_overrides(base.clone()), base);
}

#[test]
#[serial(crudctl_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new("CRUDCTL_CONFIG");
    let explicit = write_temp("crudctl_test_explicit.toml", r#"start_url = "/explicit/""#);
    let from_env = write_temp("crudctl_test_env.toml", r#"start_url = "/env/""#);
    env::set_var("CRUDCTL_CONFIG", &from_env);

    let config = load_config_with_precedence(Some(explicit.clone()))
        .expect("loads")
        .expect("present");
    assert_eq!(config.start_url.as_deref(), Some("/explicit/"));

    fs::remove_file(explicit).ok();
    fs::remove_file(from_env).ok();
}

#[test]
#[serial(crudctl_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new("CRUDCTL_CONFIG");
    let from_env = write_temp("crudctl_test_env_only.toml", "popup = true");
    env::set_var("CRUDCTL_CONFIG", &from_env);

    let config = load_config_with_precedence(None)
        .expect("loads")
        .expect("present");
    assert_eq!(config.popup, Some(true));

    fs::remove_file(from_env).ok();
}

// ===== CLI =====

#[test]
fn apply_cli_overrides_no_overrides() {
    let base = ResolvedConfig::default();
    assert_eq!(apply_cli_overrides(base.clone(), None, None), base);
}

#[test]
#[serial(crudctl_url)]
fn precedence_chain_full_defaults_to_cli() {
    let _guard = EnvGuard::new("CRUDCTL_URL");
    let file = ConfigFile {
        start_url: Some("/from-file/".to_string()),
        popup: Some(false),
        ..ConfigFile::default()
    };
    env::set_var("CRUDCTL_URL", "/from-env/");

    let merged = merge_config(Some(file));
    assert_eq!(merged.start_url, "/from-file/");

    let with_env = apply_env_overrides(merged);
    assert_eq!(with_env.start_url, "/from-env/");

    let final_config =
        apply_cli_overrides(with_env, Some("/from-cli/?o=add".to_string()), Some(true));
    assert_eq!(final_config.start_url, "/from-cli/?o=add");
    assert!(final_config.popup);
}
