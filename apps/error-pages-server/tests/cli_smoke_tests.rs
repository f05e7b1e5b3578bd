#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the error-pages-server binary

use std::io::Write;
use std::process::{Command, Stdio};

use tempfile::NamedTempFile;

fn run_server(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_error-pages-server"))
        .args(args)
        .env_remove("APP__SERVER__PORT")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute error-pages-server")
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_cli_help_command() {
    let output = run_server(&["--help"]);
    assert!(output.status.success(), "Help command should succeed");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("run"), "Should contain 'run' subcommand");
    assert!(stdout.contains("check"), "Should contain 'check' subcommand");
    assert!(stdout.contains("--config"));
}

#[test]
fn test_cli_version_command() {
    let output = run_server(&["--version"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("error-pages-server"));
}

#[test]
fn test_cli_missing_config_file() {
    let output = run_server(&["--config", "/definitely/not/here.yaml", "check"]);
    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("config file does not exist"), "stderr: {stderr}");
}

#[test]
fn test_cli_check_valid_config() {
    let file = config_file(
        r"
server:
  port: 18080
error_pages:
  site_url: https://example.org
  incidents:
    - id: 1
      kind: other
      message: queue stalled
      url: /mail
      timestamp: 1700000000
",
    );
    let path = file.path().to_str().unwrap();

    let output = run_server(&["--config", path, "check"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(stdout.contains("Configuration is valid"));
    assert!(stdout.contains("18080"));
}

#[test]
fn test_cli_check_rejects_bad_offset() {
    let file = config_file("error_pages:\n  timestamp_utc_offset_minutes: 3000\n");
    let path = file.path().to_str().unwrap();

    let output = run_server(&["--config", path, "check"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("timestamp_utc_offset_minutes"));
}

#[test]
fn test_cli_print_config_applies_port_override() {
    let output = run_server(&["--print-config", "--port", "9191"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Effective configuration"));
    assert!(stdout.contains("9191"));
    assert!(stdout.contains("news_slider_grid"));
}
