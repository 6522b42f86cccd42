//! Shared testing utilities for confit CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated base directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Path to the base directory used for CLI invocations.
    pub fn base_dir(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `confit` binary against the
    /// test base directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("confit").expect("Failed to locate confit binary");
        cmd.arg("--base-dir").arg(self.base_dir());
        cmd
    }

    /// Write a file below the base directory, creating parent directories as
    /// needed. Returns the absolute path.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file below the base directory.
    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.root.path().join(relative)).expect("Failed to read test file")
    }

    /// Whether a path below the base directory exists.
    pub fn exists(&self, relative: &str) -> bool {
        self.root.path().join(relative).exists()
    }
}
