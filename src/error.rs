//! Error types for configuration loading, validation, and output generation

use std::path::PathBuf;
use thiserror::Error;

/// Failures that stop a generator run
///
/// Every variant is terminal: the binary reports it and exits non-zero
/// without retrying.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("JSON error in {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to {action} {}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode the default configuration as JSON")]
    Encode(#[source] serde_json::Error),

    #[error("configuration validation failed ({} violation(s))", .0.len())]
    Validation(Vec<String>),
}

impl ConfigError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Violations carried by a validation failure, empty for other kinds
    pub fn violations(&self) -> &[String] {
        match self {
            ConfigError::Validation(violations) => violations,
            _ => &[],
        }
    }
}
