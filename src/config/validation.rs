//! Validation rules for build configurations
//!
//! Rules are evaluated independently so a single pass reports every
//! violation in the file.

use super::schema::{
    BuildConfig, DEFAULT_COMPRESSION_ALGORITHM, DEFAULT_ENCRYPTION_KEY, DEFAULT_ENCRYPTION_METHOD,
    DEFAULT_PROJECT_AUTHOR, DEFAULT_PROJECT_NAME, DEFAULT_PROJECT_VERSION, DEFAULT_SIGNATURE_KEY,
    ResolvedConfig,
};
use crate::error::ConfigError;
use serde_json::Value;

/// Encryption methods the packing library implements
pub const SUPPORTED_ENCRYPTION_METHODS: &[&str] = &["XOR", "AES"];

/// Minimum encryption key length, in characters
pub const MIN_ENCRYPTION_KEY_LEN: usize = 8;

impl BuildConfig {
    /// Collect every rule violation, empty when the configuration is valid
    pub fn violations(&self) -> Vec<String> {
        let mut violations = Vec::new();

        if self.encryption_enabled() {
            let method = self.encryption.method.as_deref().unwrap_or("");
            if !SUPPORTED_ENCRYPTION_METHODS.contains(&method) {
                violations.push(format!("Unsupported encryption method: {}", method));
            }

            let key_len = self
                .encryption
                .key
                .as_deref()
                .map_or(0, |key| key.chars().count());
            if key_len < MIN_ENCRYPTION_KEY_LEN {
                violations.push(format!(
                    "Encryption key must be at least {} characters",
                    MIN_ENCRYPTION_KEY_LEN
                ));
            }
        }

        if self.compression_level().is_none() {
            let shown = match &self.compression.level {
                Some(Value::String(text)) => text.clone(),
                Some(other) => other.to_string(),
                None => String::new(),
            };
            violations.push(format!("Compression level must be 0-9, got: {}", shown));
        }

        let name = self.project.name.as_deref().unwrap_or("");
        if name.trim().is_empty() {
            violations.push("Project name cannot be empty".to_string());
        }

        violations
    }

    /// Validate the configuration
    ///
    /// Returns Ok(()) if valid, or Err with a list of error messages
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }

    /// Validate and apply defaults to every absent field
    pub fn resolve(&self) -> Result<ResolvedConfig, ConfigError> {
        self.validate().map_err(ConfigError::Validation)?;

        let text = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };

        Ok(ResolvedConfig {
            project_name: text(&self.project.name, DEFAULT_PROJECT_NAME),
            project_version: text(&self.project.version, DEFAULT_PROJECT_VERSION),
            project_author: text(&self.project.author, DEFAULT_PROJECT_AUTHOR),
            encryption_enabled: self.encryption_enabled(),
            encryption_method: text(&self.encryption.method, DEFAULT_ENCRYPTION_METHOD),
            encryption_key: text(&self.encryption.key, DEFAULT_ENCRYPTION_KEY),
            compression_level: self
                .compression_level()
                .ok_or_else(|| ConfigError::Validation(self.violations()))?,
            compression_algorithm: text(
                &self.compression.algorithm,
                DEFAULT_COMPRESSION_ALGORITHM,
            ),
            obfuscate_filenames: self.security.obfuscate_filenames.unwrap_or(false),
            verify_checksums: self.security.verify_checksums.unwrap_or(true),
            signature_key: text(&self.security.signature_key, DEFAULT_SIGNATURE_KEY),
            debug_output: self.build.debug_output.unwrap_or(true),
            progress_indicators: self.build.progress_indicators.unwrap_or(true),
        })
    }
}
