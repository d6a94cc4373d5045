//! Shared helpers for integration tests.

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

pub const SESSION: &str = "itest";

/// Isolated environment: temp dir for session files and config.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("config.toml")
    }

    pub fn session_path(&self) -> PathBuf {
        self.dir
            .path()
            .join("termintro")
            .join(format!("session-{}.json", SESSION))
    }

    /// `termintro` with environment pointing into the temp dir.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("termintro").expect("binary should build");
        cmd.env("TMPDIR", self.dir.path())
            .env("TERMINTRO_CONFIG", self.config_path())
            .env("TERMINTRO_SESSION", SESSION)
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn write_config(&self, content: &str) {
        let path = self.config_path();
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }
}
