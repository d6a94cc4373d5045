//! Integration tests for `termintro play`

use predicates::prelude::*;

use crate::helpers::TestEnv;

#[test]
fn first_play_prints_final_page_without_terminal() {
    let env = TestEnv::new();
    env.cmd()
        .arg("play")
        .assert()
        .success()
        .stdout(predicate::str::contains("$ cat introduction.html"))
        .stdout(predicate::str::contains("• about.html"))
        .stdout(predicate::str::contains("$ _"));
}

#[test]
fn first_play_sets_session_flag() {
    let env = TestEnv::new();
    env.cmd().arg("play").assert().success();

    let content = std::fs::read_to_string(env.session_path()).expect("session file written");
    assert!(content.contains("hasVisitedMain"));
    assert!(content.contains("true"));
}

#[test]
fn second_play_is_a_return_visit() {
    let env = TestEnv::new();
    env.cmd()
        .args(["play", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("first visit"));

    env.cmd()
        .args(["play", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("return visit"))
        .stdout(predicate::str::contains("$ ls pages/"));
}

#[test]
fn same_origin_referrer_skips_animation_and_keeps_session_unset() {
    let env = TestEnv::new();
    env.cmd()
        .args([
            "play",
            "-v",
            "--referrer",
            "https://LOCALHOST:443/pages/about.html",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("return visit"));

    assert!(!env.session_path().exists());
}

#[test]
fn explicit_origin_overrides_config() {
    let env = TestEnv::new();
    env.cmd()
        .args([
            "play",
            "-v",
            "--origin",
            "https://example.com",
            "--referrer",
            "https://localhost/",
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("first visit"));
}

#[test]
fn separate_sessions_are_independent() {
    let env = TestEnv::new();
    env.cmd().arg("play").assert().success();

    env.cmd()
        .args(["play", "-v", "--session", "other"])
        .assert()
        .success()
        .stderr(predicate::str::contains("first visit"));
}

#[test]
fn corrupt_session_file_starts_fresh() {
    let env = TestEnv::new();
    let path = env.session_path();
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(&path, "{ not json").unwrap();

    env.cmd()
        .args(["play", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("first visit"));
}

#[test]
fn unusable_session_directory_still_plays() {
    let env = TestEnv::new();
    // A plain file where the session directory should be
    let blocker = env.dir.path().join("termintro");
    std::fs::write(&blocker, "").unwrap();

    env.cmd()
        .args(["play", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$ cat introduction.html"))
        .stderr(predicate::str::contains("first visit"));

    assert!(blocker.is_file());
}

#[test]
fn play_uses_configured_script() {
    let env = TestEnv::new();
    env.write_config(
        r#"
[script]
first_command = "$ cat about-me.txt"
"#,
    );
    env.cmd()
        .arg("play")
        .assert()
        .success()
        .stdout(predicate::str::contains("$ cat about-me.txt"));
}
