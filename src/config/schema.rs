//! Configuration schema for the RBK build options
//!
//! Every section and every field is optional so that partial, hand-edited
//! files load cleanly. Defaults are applied when the configuration is
//! resolved, not when it is read.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_PROJECT_NAME: &str = "Project32Game";
pub const DEFAULT_PROJECT_VERSION: &str = "1.0.0";
pub const DEFAULT_PROJECT_AUTHOR: &str = "Retroboi64";
pub const DEFAULT_ENCRYPTION_METHOD: &str = "XOR";
pub const DEFAULT_ENCRYPTION_KEY: &str = "DefaultKey2024_Project32";
pub const DEFAULT_COMPRESSION_LEVEL: u8 = 6;
pub const DEFAULT_COMPRESSION_ALGORITHM: &str = "zlib";
pub const DEFAULT_SIGNATURE_KEY: &str = "Project32Engine_v1.0";

/// Build options as they appear in `config.json`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    pub project: ProjectSection,
    pub encryption: EncryptionSection,
    pub compression: CompressionSection,
    pub security: SecuritySection,
    pub build: BuildSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncryptionSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompressionSection {
    /// Raw JSON value; a non-integer level is a validation failure, not a parse failure
    ///
    /// An explicit `null` is kept as `Some(Value::Null)` so it is not
    /// mistaken for an absent key.
    #[serde(
        skip_serializing_if = "Option::is_none",
        deserialize_with = "present_value"
    )]
    pub level: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub algorithm: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SecuritySection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub obfuscate_filenames: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_checksums: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_key: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_output: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_indicators: Option<bool>,
}

/// Deserialize a key that is present, keeping `null` as a value
fn present_value<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Fully populated configuration with every default applied
///
/// Only produced by [`BuildConfig::resolve`], so `compression_level` is
/// always within `0..=9`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub project_name: String,
    pub project_version: String,
    pub project_author: String,
    pub encryption_enabled: bool,
    pub encryption_method: String,
    pub encryption_key: String,
    pub compression_level: u8,
    pub compression_algorithm: String,
    pub obfuscate_filenames: bool,
    pub verify_checksums: bool,
    pub signature_key: String,
    pub debug_output: bool,
    pub progress_indicators: bool,
}

impl BuildConfig {
    /// The configuration written when no `config.json` exists yet
    pub fn starter() -> Self {
        BuildConfig {
            project: ProjectSection {
                name: Some(DEFAULT_PROJECT_NAME.to_string()),
                version: Some(DEFAULT_PROJECT_VERSION.to_string()),
                author: Some(DEFAULT_PROJECT_AUTHOR.to_string()),
            },
            encryption: EncryptionSection {
                enabled: Some(false),
                method: Some(DEFAULT_ENCRYPTION_METHOD.to_string()),
                key: Some(DEFAULT_ENCRYPTION_KEY.to_string()),
            },
            compression: CompressionSection {
                level: Some(Value::from(DEFAULT_COMPRESSION_LEVEL)),
                algorithm: Some(DEFAULT_COMPRESSION_ALGORITHM.to_string()),
            },
            security: SecuritySection {
                obfuscate_filenames: Some(false),
                verify_checksums: Some(true),
                signature_key: Some(DEFAULT_SIGNATURE_KEY.to_string()),
            },
            build: BuildSection {
                debug_output: Some(true),
                progress_indicators: Some(true),
            },
        }
    }

    pub fn encryption_enabled(&self) -> bool {
        self.encryption.enabled.unwrap_or(false)
    }

    /// Compression level if it is an integer in `0..=9`
    ///
    /// An absent level counts as the default.
    pub fn compression_level(&self) -> Option<u8> {
        match &self.compression.level {
            None => Some(DEFAULT_COMPRESSION_LEVEL),
            Some(value) => value
                .as_i64()
                .filter(|level| (0..=9).contains(level))
                .map(|level| level as u8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_default_to_empty() {
        let config: BuildConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, BuildConfig::default());
        assert!(config.project.name.is_none());
        assert!(!config.encryption_enabled());
    }

    #[test]
    fn test_partial_section_keeps_present_fields() {
        let config: BuildConfig =
            serde_json::from_str(r#"{"project": {"name": "Demo"}, "build": {}}"#).unwrap();
        assert_eq!(config.project.name.as_deref(), Some("Demo"));
        assert!(config.project.version.is_none());
        assert!(config.build.debug_output.is_none());
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let config: BuildConfig =
            serde_json::from_str(r#"{"extra": 1, "project": {"name": "Demo", "tag": "x"}}"#)
                .unwrap();
        assert_eq!(config.project.name.as_deref(), Some("Demo"));
    }

    #[test]
    fn test_compression_level_accepts_only_small_integers() {
        let mut config = BuildConfig::default();
        assert_eq!(config.compression_level(), Some(6));

        for (value, expected) in [
            (serde_json::json!(0), Some(0)),
            (serde_json::json!(9), Some(9)),
            (serde_json::json!(10), None),
            (serde_json::json!(-1), None),
            (serde_json::json!(4.5), None),
            (serde_json::json!("6"), None),
            (serde_json::json!(true), None),
            (Value::Null, None),
        ] {
            config.compression.level = Some(value.clone());
            assert_eq!(config.compression_level(), expected, "level {}", value);
        }
    }

    #[test]
    fn test_explicit_null_level_is_not_absent() {
        let config: BuildConfig =
            serde_json::from_str(r#"{"compression": {"level": null}}"#).unwrap();
        assert_eq!(config.compression.level, Some(Value::Null));
        assert_eq!(config.compression_level(), None);

        let config: BuildConfig = serde_json::from_str(r#"{"compression": {}}"#).unwrap();
        assert_eq!(config.compression.level, None);
        assert_eq!(config.compression_level(), Some(6));
    }

    #[test]
    fn test_starter_serializes_sections_in_order() {
        let json = serde_json::to_string_pretty(&BuildConfig::starter()).unwrap();
        let project = json.find("\"project\"").unwrap();
        let encryption = json.find("\"encryption\"").unwrap();
        let compression = json.find("\"compression\"").unwrap();
        let security = json.find("\"security\"").unwrap();
        let build = json.find("\"build\"").unwrap();
        assert!(project < encryption);
        assert!(encryption < compression);
        assert!(compression < security);
        assert!(security < build);
        assert!(json.contains("\n  \"project\": {\n    \"name\": \"Project32Game\""));
        assert!(json.contains("\"level\": 6"));
    }
}
