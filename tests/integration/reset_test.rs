//! Integration tests for `termintro reset`

use predicates::prelude::*;

use crate::helpers::{TestEnv, SESSION};

#[test]
fn reset_removes_session_so_next_play_animates() {
    let env = TestEnv::new();
    env.cmd().arg("play").assert().success();
    assert!(env.session_path().exists());

    env.cmd()
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Session {} ended", SESSION)));
    assert!(!env.session_path().exists());

    env.cmd()
        .args(["play", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("first visit"));
}

#[test]
fn reset_without_session_reports_nothing_to_do() {
    let env = TestEnv::new();
    env.cmd()
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("No active session"));
}

#[test]
fn reset_accepts_explicit_session() {
    let env = TestEnv::new();
    env.cmd()
        .args(["play", "--session", "abc"])
        .assert()
        .success();

    env.cmd()
        .args(["reset", "--session", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Session abc ended"));
}
