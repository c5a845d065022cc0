//! Configuration file I/O operations
//!
//! Reads `config.json`, writing the starter configuration first when the
//! file does not exist. A file that is already present is never rewritten.

use super::schema::BuildConfig;
use crate::error::ConfigError;
use std::fs;
use std::path::Path;

/// Result of [`load_or_create`]
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub config: BuildConfig,
    /// True when the starter configuration was written during this load
    pub created: bool,
}

/// Load configuration from disk, creating the starter file if absent
pub fn load_or_create(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let created = if path.exists() {
        false
    } else {
        write_starter_config(path)?;
        true
    };

    let config = read_config(path)?;
    Ok(LoadedConfig { config, created })
}

/// Read and parse a configuration file
pub fn read_config(path: &Path) -> Result<BuildConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::io("read", path, e))?;

    let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("Parsed configuration from {}", path.display());
    Ok(config)
}

/// Write the starter configuration as pretty-printed JSON
///
/// Creates parent directories if needed.
pub fn write_starter_config(path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ConfigError::io("create directory", parent, e))?;
    }

    let content =
        serde_json::to_string_pretty(&BuildConfig::starter()).map_err(ConfigError::Encode)?;

    fs::write(path, content).map_err(|e| ConfigError::io("write", path, e))?;

    tracing::info!("Wrote starter configuration to {}", path.display());
    Ok(())
}
