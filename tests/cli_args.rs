//! CLI parsing and binary behavior that does not need a terminal.

use calcterm::cli::Cli;
use calcterm::config::Config;
use clap::Parser;
use std::path::PathBuf;
use std::process::Command;

fn calcterm_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_calcterm"))
}

#[test]
fn test_no_args_keeps_config() {
    let cli = Cli::try_parse_from(["calcterm"]).unwrap();
    let mut config = Config::default();
    cli.apply(&mut config);
    assert_eq!(config, Config::default());
}

#[test]
fn test_overrides_apply_to_config() {
    let cli = Cli::try_parse_from([
        "calcterm",
        "--log-file",
        "/tmp/calc.log",
        "--log-level",
        "debug",
        "--no-mouse",
    ])
    .unwrap();
    let mut config = Config::default();
    cli.apply(&mut config);

    assert_eq!(config.logging.file, Some(PathBuf::from("/tmp/calc.log")));
    assert_eq!(config.logging.level, "debug");
    assert!(!config.ui.mouse);
}

#[test]
fn test_config_flag_takes_path() {
    let cli = Cli::try_parse_from(["calcterm", "--config", "/etc/calc.toml"]).unwrap();
    assert_eq!(cli.config, Some(PathBuf::from("/etc/calc.toml")));
}

#[test]
fn test_unknown_flag_is_rejected() {
    assert!(Cli::try_parse_from(["calcterm", "--frobnicate"]).is_err());
}

#[test]
fn test_help_lists_options() {
    let output = calcterm_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--log-file"));
    assert!(stdout.contains("--no-mouse"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[ui]\ntick_rate_ms = 0\n").unwrap();

    let output = calcterm_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn test_invalid_log_level_exits_before_touching_terminal() {
    let output = calcterm_cmd()
        .args(["--log-level", "calcterm=nope", "--config", "/nonexistent/calc.toml"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid logging.level"));
}
