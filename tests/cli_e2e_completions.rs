//! End-to-end tests for the `completions` command.

mod common;
use common::prelude::*;

#[test]
fn test_completions_help() {
    let mut cmd = cargo_bin_cmd!("toggle-dev-mode");
    cmd.arg("completions")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Generate shell completion scripts",
        ))
        .stdout(predicate::str::contains("bash"))
        .stdout(predicate::str::contains("zsh"));
}

#[test]
fn test_completions_bash() {
    let mut cmd = cargo_bin_cmd!("toggle-dev-mode");
    cmd.arg("completions")
        .arg("bash")
        .assert()
        .success()
        .stdout(predicate::str::contains("_toggle__dev__mode()"))
        .stdout(predicate::str::contains("settings-local"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_completions_fish() {
    let mut cmd = cargo_bin_cmd!("toggle-dev-mode");
    cmd.arg("completions")
        .arg("fish")
        .assert()
        .success()
        .stdout(predicate::str::contains("complete -c toggle-dev-mode"));
}

#[test]
fn test_completions_unknown_shell() {
    let mut cmd = cargo_bin_cmd!("toggle-dev-mode");
    cmd.arg("completions").arg("tcsh").assert().code(2);
}
