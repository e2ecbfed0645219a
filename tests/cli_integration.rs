//! CLI integration tests
//!
//! Runs the `occlum-version` binary and checks what it prints.

use assert_cmd::Command;
use occlum_version::{LEGACY_VERSION_STRING, MAJOR, MINOR, PATCH, VERSION_STRING};
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

/// Command with no reporting configuration leaking in from the environment
fn occlum_version() -> Command {
    let mut cmd = Command::cargo_bin("occlum-version").unwrap();
    cmd.env_remove("OCCLUM_VERSION_CONFIG")
        .env_remove("OCCLUM_VERSION_FORMAT")
        .env_remove("OCCLUM_VERSION_RENDERING")
        .env_remove("LOG_LEVEL")
        .env_remove("VERBOSE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_version_flag() {
    let mut cmd = occlum_version();
    cmd.arg("--version");

    cmd.assert()
        .success()
        .stdout(format!("occlum-version {}\n", VERSION_STRING));
}

#[test]
fn test_help_flag() {
    let mut cmd = occlum_version();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("--legacy"))
        .stdout(predicate::str::contains("--detailed"));
}

#[test]
fn test_default_output_is_version_string() {
    occlum_version()
        .assert()
        .success()
        .stdout(format!("{}\n", VERSION_STRING));
}

#[test]
fn test_legacy_output() {
    let mut cmd = occlum_version();
    cmd.arg("--legacy");

    cmd.assert()
        .success()
        .stdout(format!("{}\n", LEGACY_VERSION_STRING));
}

#[test]
fn test_detailed_output() {
    let mut cmd = occlum_version();
    cmd.arg("--detailed");

    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with(format!("{} (", VERSION_STRING)))
        .stdout(predicate::str::contains("@"));
}

#[test]
fn test_json_output_format() {
    let mut cmd = occlum_version();
    cmd.args(["--format", "json"]);

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(json["major"], MAJOR);
    assert_eq!(json["minor"], MINOR);
    assert_eq!(json["patch"], PATCH);
    assert_eq!(json["version"], VERSION_STRING);
    assert_eq!(json["legacyVersion"], LEGACY_VERSION_STRING);
}

#[test]
fn test_invalid_format_rejected() {
    let mut cmd = occlum_version();
    cmd.args(["--format", "xml"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("xml"));
}

#[test]
fn test_config_flag_recognized() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[output]\nrendering = \"legacy\"").unwrap();
    temp_file.flush().unwrap();

    let mut cmd = occlum_version();
    cmd.args(["--config", temp_file.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(format!("{}\n", LEGACY_VERSION_STRING));
}

#[test]
fn test_config_env_var_recognized() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[output]\nformat = \"json\"").unwrap();
    temp_file.flush().unwrap();

    let mut cmd = occlum_version();
    cmd.env("OCCLUM_VERSION_CONFIG", temp_file.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"legacyVersion\""));
}

#[test]
fn test_cli_overrides_env() {
    let mut cmd = occlum_version();
    cmd.env("OCCLUM_VERSION_FORMAT", "json");
    cmd.args(["--format", "text"]);

    cmd.assert()
        .success()
        .stdout(format!("{}\n", VERSION_STRING));
}

#[test]
fn test_broken_config_warns_and_uses_defaults() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[output\nformat = ").unwrap();
    temp_file.flush().unwrap();

    let mut cmd = occlum_version();
    cmd.args(["--config", temp_file.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(format!("{}\n", VERSION_STRING))
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_verbose_logs_startup_on_stderr() {
    let mut cmd = occlum_version();
    cmd.arg("--verbose");

    cmd.assert()
        .success()
        .stdout(format!("{}\n", VERSION_STRING))
        .stderr(predicate::str::contains(format!(
            "starting occlum-version v{}",
            VERSION_STRING
        )));
}

#[test]
fn test_rendering_flag() {
    let mut cmd = occlum_version();
    cmd.args(["--rendering", "legacy"]);

    cmd.assert()
        .success()
        .stdout(format!("{}\n", LEGACY_VERSION_STRING));
}

#[test]
fn test_legacy_conflicts_with_rendering() {
    let mut cmd = occlum_version();
    cmd.args(["--legacy", "--rendering", "standard"]);

    cmd.assert().failure().code(2);
}

#[test]
fn test_missing_config_file_warns() {
    let mut cmd = occlum_version();
    cmd.args(["--config", "/nonexistent/occlum-version/typo.toml"]);

    cmd.assert()
        .success()
        .stdout(format!("{}\n", VERSION_STRING))
        .stderr(predicate::str::contains("Configuration file not found"))
        .stderr(predicate::str::contains("typo.toml"));
}

#[test]
fn test_missing_config_env_path_warns() {
    let mut cmd = occlum_version();
    cmd.env("OCCLUM_VERSION_CONFIG", "/nonexistent/occlum-version/env.toml");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("env.toml"));
}

#[test]
fn test_env_resets_file_value_to_default() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "[output]\nformat = \"json\"\nrendering = \"legacy\"").unwrap();
    temp_file.flush().unwrap();

    let mut cmd = occlum_version();
    cmd.env("OCCLUM_VERSION_FORMAT", "text");
    cmd.env("OCCLUM_VERSION_RENDERING", "standard");
    cmd.args(["--config", temp_file.path().to_str().unwrap()]);

    cmd.assert()
        .success()
        .stdout(format!("{}\n", VERSION_STRING));
}
