//! Tests for CLI argument parsing against the built binary.

mod common;

use common::temp_config;
use std::process::Command;

fn shoplist_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_shoplist"))
}

#[test]
fn test_help_lists_options() {
    let output = shoplist_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-level"));
    assert!(stdout.contains("--monotonic-ids"));
}

#[test]
fn test_version_flag() {
    let output = shoplist_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_malformed_config_exits_with_error() {
    let (_dir, path) = temp_config("[ui\n");
    let output = shoplist_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Error: Failed to parse config file"),
        "Expected parse error, got: {}",
        stderr
    );
}

#[test]
fn test_invalid_config_value_exits_with_error() {
    let (_dir, path) = temp_config("[ui]\ntick_rate_ms = 0\n");
    let output = shoplist_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Config validation failed"));
}

#[test]
fn test_missing_config_value_shows_error() {
    let output = shoplist_cmd()
        .arg("--config")
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("a value is required") || stderr.contains("requires a value"),
        "Expected clap error about missing value, got: {}",
        stderr
    );
}
