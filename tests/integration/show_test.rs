//! Integration tests for `termintro show` and top-level CLI behaviour

use predicates::prelude::*;

use crate::helpers::TestEnv;

#[test]
fn show_prints_final_page_in_order() {
    let env = TestEnv::new();
    let output = env.cmd().arg("show").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.first(), Some(&"$ cat introduction.html"));
    assert_eq!(lines.last(), Some(&"$ _"));
    let welcome = lines.iter().position(|l| *l == "Welcome!").unwrap();
    let pages = lines.iter().position(|l| *l == "$ ls pages/").unwrap();
    assert!(welcome < pages);
}

#[test]
fn show_does_not_touch_session() {
    let env = TestEnv::new();
    env.cmd().arg("show").assert().success();
    assert!(!env.session_path().exists());
}

#[test]
fn help_lists_subcommands() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("reset"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn missing_subcommand_is_usage_error() {
    let env = TestEnv::new();
    env.cmd().assert().code(2);
}

#[test]
fn completions_generate_script() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("termintro"));
}
