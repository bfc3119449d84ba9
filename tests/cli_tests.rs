//! CLI Integration Tests for OmniRoute
//!
//! Runs the built `omniroute` binary for the commands that don't start a
//! server: help, init, config and dashboard.

use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run omniroute with arguments, isolated from any local .env or config
fn run_omniroute(args: &[&str], working_dir: &std::path::Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_omniroute"))
        .args(args)
        .current_dir(working_dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// =============================================================================
// Help and Version Tests
// =============================================================================

#[test]
fn test_help_command() {
    let dir = TempDir::new().unwrap();
    let output = run_omniroute(&["--help"], dir.path());

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("OmniRoute"));
    for command in ["serve", "init", "config", "dashboard", "chat"] {
        assert!(text.contains(command), "help is missing {command}");
    }
}

#[test]
fn test_version_command() {
    let dir = TempDir::new().unwrap();
    let output = run_omniroute(&["--version"], dir.path());

    assert!(output.status.success());
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

// =============================================================================
// Init Command Tests
// =============================================================================

#[test]
fn test_init_then_validate() {
    let dir = TempDir::new().unwrap();

    let output = run_omniroute(&["init", "--no-color", "--port", "4100"], dir.path());
    assert!(output.status.success(), "init failed: {:?}", output);
    let toml = fs::read_to_string(dir.path().join("omniroute.toml")).unwrap();
    assert!(toml.contains("port = 4100"));
    assert!(dir.path().join(".env.example").exists());

    let output = run_omniroute(&["config", "--validate", "--no-color"], dir.path());
    assert!(output.status.success(), "validate failed: {:?}", output);
    assert!(stdout(&output).contains("Configuration is valid"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("omniroute.toml"), "# mine\n").unwrap();

    let output = run_omniroute(&["init", "--no-color"], dir.path());

    assert!(!output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("omniroute.toml")).unwrap(),
        "# mine\n"
    );
}

// =============================================================================
// Config Command Tests
// =============================================================================

#[test]
fn test_config_validate_reports_bad_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("omniroute.toml"), "[server]\nport = 0\n").unwrap();

    let output = run_omniroute(&["config", "--validate", "--no-color"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("port"));
}

#[test]
fn test_config_without_file_shows_defaults() {
    let dir = TempDir::new().unwrap();

    let output = run_omniroute(&["config", "--no-color"], dir.path());

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("127.0.0.1:3000"));
    assert!(text.contains("gemini-flash-latest"));
}

// =============================================================================
// Dashboard Command Tests
// =============================================================================

#[test]
fn test_dashboard_command() {
    let dir = TempDir::new().unwrap();

    let output = run_omniroute(&["dashboard", "dispatcher", "--no-color"], dir.path());

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Dispatcher Command"));
    assert!(text.contains("Warehouse Capacity"));
}

#[test]
fn test_dashboard_unknown_role_fails() {
    let dir = TempDir::new().unwrap();

    let output = run_omniroute(&["dashboard", "pilot", "--no-color"], dir.path());

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("pilot"));
}
