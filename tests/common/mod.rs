//! Common test utilities and fixtures
//!
//! Shared helpers for rbk-config integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Creates a temporary directory for test fixtures
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Creates an rbk-config command running inside `dir`
pub fn cmd_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rbk-config").expect("binary should be built");
    cmd.current_dir(dir).arg("--no-banner");
    cmd
}

/// Writes `config.json` with the given content into `dir`
pub fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, content).expect("Failed to write config.json");
    path
}

/// Default header location relative to the working directory
pub fn header_path(dir: &Path) -> PathBuf {
    dir.join("include").join("pak_config.h")
}

/// Default build script location relative to the working directory
pub fn script_path(dir: &Path) -> PathBuf {
    dir.join("build.bat")
}
