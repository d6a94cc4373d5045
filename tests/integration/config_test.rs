//! Integration tests for `termintro config`

use predicates::prelude::*;

use crate::helpers::TestEnv;

#[test]
fn config_path_honors_env_override() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn config_init_writes_defaults_once() {
    let env = TestEnv::new();
    env.cmd().args(["config", "init"]).assert().success();
    let content = std::fs::read_to_string(env.config_path()).unwrap();
    assert!(content.contains("[script]"));
    assert!(content.contains("[timing]"));

    env.cmd()
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    env.cmd()
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_prints_toml() {
    let env = TestEnv::new();
    env.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[script]"))
        .stdout(predicate::str::contains("after_first_command = 1000"));
}

#[test]
fn invalid_config_fails_with_context() {
    let env = TestEnv::new();
    env.write_config("[script\nbroken");
    env.cmd()
        .arg("show")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse config file"));
}
