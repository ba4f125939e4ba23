//! Integration tests for the installer binary.
//!
//! Every run uses a temporary directory as `PATH`, empty or holding fake
//! scripts, so no real package manager or installer can ever be reached.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
#[cfg(unix)]
use std::fs;
#[cfg(unix)]
use std::path::Path;
#[cfg(unix)]
use tempfile::TempDir;

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
fn isolated() -> (Command, TempDir) {
    let empty = TempDir::new().unwrap();
    let mut cmd = Command::new(cargo_bin("ai-coding-kit"));
    cmd.env("PATH", empty.path()).env_remove("RUST_LOG");
    (cmd, empty)
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ai-coding-kit"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Install AI-assisted development tools"))
        .stdout(predicate::str::contains("--no-color"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ai-coding-kit"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn cli_rejects_unknown_arguments() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ai-coding-kit"));
    cmd.arg("openspec");
    cmd.assert().failure();
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_lists_tools_and_finishes_on_invalid_selection() -> Result<(), Box<dyn std::error::Error>> {
    let (mut cmd, _path) = isolated();
    cmd.arg("--no-color").write_stdin("9\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("AI Coding Kit"))
        .stdout(predicate::str::contains("1. openspec"))
        .stdout(predicate::str::contains("2. spec-kit"))
        .stdout(predicate::str::contains("Done."))
        .stderr(predicate::str::contains("Invalid selection '9'"))
        .stderr(predicate::str::contains("No valid selection"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_declining_dependencies_still_exits_zero() -> Result<(), Box<dyn std::error::Error>> {
    let (mut cmd, _path) = isolated();
    cmd.arg("--no-color").write_stdin("1,2\nn\n");
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Missing dependencies: npm, uv, git"))
        .stderr(predicate::str::contains("Required dependencies are missing"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_closed_stdin_exits_with_error() -> Result<(), Box<dyn std::error::Error>> {
    let (mut cmd, _path) = isolated();
    cmd.arg("--no-color").write_stdin("");
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Done.").not())
        .stderr(predicate::str::contains("tool_selection"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_quiet_hides_banner() -> Result<(), Box<dyn std::error::Error>> {
    let (mut cmd, _path) = isolated();
    cmd.args(["--quiet", "--no-color"]).write_stdin("9\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("AI Coding Kit").not())
        .stderr(predicate::str::contains("No valid selection"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_failed_install_reports_stderr_once_without_ansi() -> Result<(), Box<dyn std::error::Error>> {
    let (mut cmd, path) = isolated();
    write_script(path.path(), "which", "exit 0");
    write_script(
        path.path(),
        "npm",
        "echo 'EACCES permission denied' >&2\nexit 1",
    );

    cmd.arg("--no-color").write_stdin("1\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Done."))
        .stderr(predicate::str::contains("openspec failed to install"))
        .stderr(predicate::str::contains("npm install -g @fission-ai/openspec@latest"))
        .stderr(predicate::function(|err: &str| {
            err.matches("EACCES permission denied").count() == 1
        }))
        .stderr(predicate::str::contains("\u{1b}[").not())
        .stderr(predicate::str::contains("Installing tool").not());
    Ok(())
}
