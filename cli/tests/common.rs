//! # Filekit CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//!
//! ## Overview
//!
//! Shared helpers for the integration tests in `cli/tests/`. Each test file
//! declares `mod common;` and builds commands through [`filekit_cmd`].
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Returns a `Command` for the compiled `filekit` binary, isolated from the
/// developer's own configuration: HOME and XDG_CONFIG_HOME point into
/// `sandbox`, and the working directory is `sandbox` itself.
pub fn filekit_cmd(sandbox: &Path) -> Command {
    let mut cmd = Command::cargo_bin("filekit").expect("Failed to find filekit binary for testing");
    cmd.current_dir(sandbox)
        .env("HOME", sandbox)
        .env("XDG_CONFIG_HOME", sandbox.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

/// Creates a fresh sandbox directory containing an empty `.git` marker so the
/// project-config search never leaves it.
pub fn sandbox() -> TempDir {
    let dir = tempfile::tempdir().expect("Failed to create sandbox");
    fs::create_dir(dir.path().join(".git")).expect("Failed to create .git marker");
    dir
}

/// Writes `contents` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent directory");
    }
    fs::write(path, contents).expect("Failed to write test file");
}
