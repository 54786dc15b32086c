//! Shared testing utilities for tpm CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Manifest declaring no placeholders.
#[allow(dead_code)]
pub const EMPTY_MANIFEST: &str = r#"{"placeholders": []}"#;

/// Testing harness providing an isolated store and working directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    store_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        let store_dir = root.path().join("templates");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir, store_dir }
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the isolated managed store.
    pub fn store_dir(&self) -> &Path {
        &self.store_dir
    }

    /// Build a command for invoking the compiled `tpm` binary in the default
    /// working directory.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `tpm` binary in a custom
    /// directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("tpm").expect("Failed to locate tpm binary");
        cmd.current_dir(dir.as_ref()).env("TPM_TEMPLATES_DIR", &self.store_dir);
        cmd
    }

    /// Write `_template.json` in the working directory.
    pub fn write_manifest(&self, content: &str) {
        fs::write(self.work_dir.join("_template.json"), content)
            .expect("Failed to write manifest");
    }

    /// Write a file (creating parent directories) inside the working
    /// directory.
    pub fn write_work_file(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    /// Path to a stored artifact.
    pub fn artifact_path(&self, name: &str) -> PathBuf {
        self.store_dir.join(format!("{name}.tgz"))
    }

    /// Assert that an artifact for `name` is stored.
    pub fn assert_template_saved(&self, name: &str) {
        assert!(self.artifact_path(name).exists(), "artifact for '{name}' should exist");
    }
}
