//! Integration test: Verify binary prints correct version

use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_crudctl"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "--version should exit cleanly");
    assert!(
        stdout.contains("crudctl 0.1.0"),
        "Expected output to contain 'crudctl 0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn empty_slot_in_config_is_rejected() {
    let dir = std::env::temp_dir().join(format!("crudctl-version-test-{}", std::process::id()));
    std::fs::create_dir_all(&dir).expect("temp dir");
    let config = dir.join("config.toml");
    std::fs::write(&config, "[slots]\nitem_list = \"\"\n").expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_crudctl"))
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("item_list"), "stderr: {}", stderr);
}
