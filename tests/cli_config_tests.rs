//! End-to-end tests for `gstore config` commands.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

/// Path to the gstore binary
fn gstore_bin() -> &'static str {
    env!("CARGO_BIN_EXE_gstore")
}

/// Runs gstore against the given config directory.
fn run_with_config(args: &[&str], config_dir: &Path) -> Output {
    Command::new(gstore_bin())
        .env("GSTORE_CONFIG_DIR", config_dir)
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn show_json(config_dir: &Path) -> Value {
    let output = run_with_config(&["config", "show", "--json"], config_dir);
    assert_eq!(output.status.code(), Some(0));
    serde_json::from_slice(&output.stdout).expect("Should parse JSON output")
}

#[test]
fn test_config_show_defaults() {
    let config_dir = TempDir::new().unwrap();

    let result = show_json(config_dir.path());

    assert!(result["store"].get("default_source").is_none());
    assert_eq!(result["store"]["install_cli"], "gingee-cli");
    assert_eq!(result["store"]["descriptor_file"], "gstore.json");
    assert_eq!(result["ui"]["theme"], "auto");
    assert_eq!(result["web"]["port"], 3002);
}

#[test]
fn test_config_show_human_readable() {
    let config_dir = TempDir::new().unwrap();

    let output = run_with_config(&["config", "show"], config_dir.path());

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("GStore Configuration"));
    assert!(stdout.contains("Install CLI: gingee-cli"));
}

#[test]
fn test_config_set_and_show() {
    let config_dir = TempDir::new().unwrap();

    let output = run_with_config(
        &[
            "config",
            "set",
            "--source",
            "https://apps.example.com/store/",
            "--install-cli",
            "other-cli",
            "--theme",
            "light",
        ],
        config_dir.path(),
    );
    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(config_dir.path().join("config.toml").exists());

    let result = show_json(config_dir.path());
    assert_eq!(
        result["store"]["default_source"],
        "https://apps.example.com/store/"
    );
    assert_eq!(result["store"]["install_cli"], "other-cli");
    assert_eq!(result["ui"]["theme"], "light");
}

#[test]
fn test_config_set_requires_an_option() {
    let config_dir = TempDir::new().unwrap();

    let output = run_with_config(&["config", "set"], config_dir.path());

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_config_set_rejects_invalid_values() {
    let config_dir = TempDir::new().unwrap();

    let output = run_with_config(&["config", "set", "--theme", "sepia"], config_dir.path());
    assert_eq!(output.status.code(), Some(1));

    let output = run_with_config(
        &["config", "set", "--install-cli", "two words"],
        config_dir.path(),
    );
    assert_eq!(output.status.code(), Some(1));

    assert!(!config_dir.path().join("config.toml").exists());
}

#[test]
fn test_configured_cli_is_used_by_install_command() {
    let config_dir = TempDir::new().unwrap();
    let store = TempDir::new().unwrap();
    std::fs::write(
        store.path().join("gstore.json"),
        r#"{"storeName":"Demo","storeLogo":"l.png","apps":[
            {"name":"Calc","version":"1","description":"d","long_description":"l",
             "icon_url":"c.png","category":"c","publisher":{"name":"p"},"featured":true}]}"#,
    )
    .unwrap();

    let output = run_with_config(
        &["config", "set", "--install-cli", "store-cli"],
        config_dir.path(),
    );
    assert_eq!(output.status.code(), Some(0));

    let output = run_with_config(
        &[
            "install-command",
            store.path().to_str().unwrap(),
            "Calc",
            "--base-url",
            "https://host/store/",
        ],
        config_dir.path(),
    );
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "store-cli install-store-app Calc -g https://host/store/"
    );
}
