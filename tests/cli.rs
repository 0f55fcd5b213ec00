//
//  floe-cli
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/20.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! End-to-end smoke tests for the `floe` binary. These never touch the
//! network; they exercise argument parsing, help output, completion
//! generation, and the missing-token error path.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Builds a command with config and token lookup pointed at an empty
/// temporary home.
fn floe(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("floe").unwrap();
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("FLOE_ACCESS_TOKEN")
        .env_remove("FLOE_API_URL")
        .env_remove("FLOE_WORKSPACE");
    cmd
}

#[test]
fn test_help_lists_commands() {
    let home = TempDir::new().unwrap();
    floe(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("pipelines"))
        .stdout(predicate::str::contains("compute-envs"))
        .stdout(predicate::str::contains("workspaces"));
}

#[test]
fn test_version_flag() {
    let home = TempDir::new().unwrap();
    floe(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("floe"));
}

#[test]
fn test_missing_token_is_reported() {
    let home = TempDir::new().unwrap();
    floe(&home)
        .args(["pipelines", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No access token configured"));
}

#[test]
fn test_completion_bash() {
    let home = TempDir::new().unwrap();
    floe(&home)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("floe"));
}

#[test]
fn test_unknown_subcommand_fails() {
    let home = TempDir::new().unwrap();
    floe(&home).arg("does-not-exist").assert().failure();
}

#[test]
fn test_config_set_and_get_roundtrip() {
    let home = TempDir::new().unwrap();
    floe(&home)
        .args(["config", "set", "api_url", "https://floe.example.com/api"])
        .assert()
        .success();
    floe(&home)
        .args(["config", "get", "api_url"])
        .assert()
        .success()
        .stdout(predicate::str::contains("https://floe.example.com/api"));
}

#[test]
fn test_config_rejects_unknown_key() {
    let home = TempDir::new().unwrap();
    floe(&home)
        .args(["config", "get", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key"));
}
