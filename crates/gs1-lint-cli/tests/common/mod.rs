//! Common test utilities for CLI testing.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

use assert_cmd::Command;
use tempfile::{tempdir, TempDir};

const ENV_VARS: &[&str] = &[
    "GS1LINT_OUTPUT_FORMAT",
    "GS1LINT_MARKER",
    "GS1LINT_LOG_LEVEL",
    "GS1LINT_LOG_FORMAT",
    "GS1LINT_LOG_FILE",
    "RUST_LOG",
];

/// Test context with temporary directory
pub struct TestContext {
    pub temp_dir: TempDir,
    pub config_path: PathBuf,
}

impl TestContext {
    /// A context with an empty (all defaults) config file.
    pub fn new() -> Self {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("gs1lint.yaml");
        std::fs::write(&config_path, "").expect("Failed to write config");

        Self {
            temp_dir,
            config_path,
        }
    }

    /// Replace the config file contents
    pub fn with_config(self, config: &str) -> Self {
        std::fs::write(&self.config_path, config).expect("Failed to write config");
        self
    }

    /// Get path to temp directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Create a command configured for this context
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("gs1lint").expect("Binary not found");
        cmd.current_dir(self.path())
            .env("GS1LINT_CONFIG", &self.config_path);
        for var in ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Assert helpers for CLI output
pub trait OutputAssertions {
    fn assert_success(&self);
    fn assert_stdout_contains(&self, text: &str);
    fn assert_stderr_contains(&self, text: &str);
    fn assert_exit_code(&self, code: i32);
}

impl OutputAssertions for Output {
    fn assert_success(&self) {
        assert!(
            self.status.success(),
            "Command failed with status: {}\nstderr: {}",
            self.status,
            String::from_utf8_lossy(&self.stderr)
        );
    }

    fn assert_stdout_contains(&self, text: &str) {
        let stdout = String::from_utf8_lossy(&self.stdout);
        assert!(
            stdout.contains(text),
            "stdout does not contain '{text}'\nstdout: {stdout}"
        );
    }

    fn assert_stderr_contains(&self, text: &str) {
        let stderr = String::from_utf8_lossy(&self.stderr);
        assert!(
            stderr.contains(text),
            "stderr does not contain '{text}'\nstderr: {stderr}"
        );
    }

    fn assert_exit_code(&self, code: i32) {
        assert_eq!(
            self.status.code(),
            Some(code),
            "unexpected exit status\nstderr: {}",
            String::from_utf8_lossy(&self.stderr)
        );
    }
}
