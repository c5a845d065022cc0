//! Generated artifacts and console output
//!
//! - `header` - `pak_config.h` rendering
//! - `script` - Embedded Windows build script
//! - `console` - Banner and configuration summary

pub mod console;
pub mod header;
pub mod script;

pub use console::{COMPRESSION_LABELS, banner, compression_label, render_summary, rule};
pub use header::{ENGINE_NAME, RBK_VERSION, TIMESTAMP_FORMAT, render_header};
pub use script::build_script;

use crate::error::ConfigError;
use std::fs;
use std::path::Path;

/// Write a generated file, creating parent directories if needed
pub fn write_artifact(path: &Path, contents: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConfigError::io("create directory", parent, e))?;
    }

    fs::write(path, contents).map_err(|e| ConfigError::io("write", path, e))?;
    tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_artifact_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("include").join("pak_config.h");

        write_artifact(&path, "#pragma once\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "#pragma once\n");
    }

    #[test]
    fn test_write_artifact_reports_failing_path() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("include");
        fs::write(&blocker, "not a directory").unwrap();

        let err = write_artifact(&blocker.join("pak_config.h"), "x").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("include"));
    }
}
