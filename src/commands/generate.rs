//! The generator pipeline: load, validate, render, write, summarize
//!
//! Runs synchronously from start to finish. Nothing is written unless the
//! configuration validates, and a successful run always writes both the
//! header and the build script.

use crate::config;
use crate::output::{self, banner, build_script, render_header, render_summary, rule};
use anyhow::{Context, Result};
use chrono::Local;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_HEADER_PATH: &str = "include/pak_config.h";
pub const DEFAULT_SCRIPT_PATH: &str = "build.bat";

/// Input and output locations for one generator run
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub config_path: PathBuf,
    pub header_path: PathBuf,
    pub script_path: PathBuf,
    pub show_banner: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        GenerateOptions {
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
            header_path: PathBuf::from(DEFAULT_HEADER_PATH),
            script_path: PathBuf::from(DEFAULT_SCRIPT_PATH),
            show_banner: true,
        }
    }
}

/// Run the generator once
///
/// Progress lines go to stdout. Errors are returned to the caller, which
/// owns reporting and the exit status.
pub fn run(options: &GenerateOptions) -> Result<()> {
    if options.show_banner {
        println!("{}", banner());
    }
    println!("Initializing RetroBoi64 configuration system...");
    println!("{}", rule());

    let loaded = config::load_or_create(&options.config_path)?;
    if loaded.created {
        println!("✓ Created default {}", options.config_path.display());
        println!("  Edit this file to customize your RBK settings!");
    }
    println!("✓ Loaded configuration from {}", options.config_path.display());

    let resolved = loaded.config.resolve()?;
    println!("✓ Configuration validated successfully");
    tracing::debug!(
        compression_level = resolved.compression_level,
        encryption = resolved.encryption_enabled,
        "Resolved configuration"
    );

    let header = render_header(&resolved, Local::now().naive_local());
    let script = build_script().context("build script template is missing from the binary")?;

    output::write_artifact(&options.header_path, &header)?;
    println!("✓ Generated: {}", options.header_path.display());

    output::write_artifact(&options.script_path, script)?;
    println!(
        "✓ Created {} for easy Windows building",
        options.script_path.display()
    );

    println!("{}", render_summary(&loaded.config, &script_name(&options.script_path)));
    tracing::info!("Generation finished");

    Ok(())
}

fn script_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_SCRIPT_PATH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use std::fs;
    use tempfile::TempDir;

    fn options_in(dir: &Path) -> GenerateOptions {
        GenerateOptions {
            config_path: dir.join("config.json"),
            header_path: dir.join("include").join("pak_config.h"),
            script_path: dir.join("build.bat"),
            show_banner: false,
        }
    }

    #[test]
    fn test_default_options_use_conventional_paths() {
        let options = GenerateOptions::default();
        assert_eq!(options.config_path, PathBuf::from("config.json"));
        assert_eq!(options.header_path, PathBuf::from("include/pak_config.h"));
        assert_eq!(options.script_path, PathBuf::from("build.bat"));
        assert!(options.show_banner);
    }

    #[test]
    fn test_run_writes_all_outputs_from_scratch() {
        let temp_dir = TempDir::new().unwrap();
        let options = options_in(temp_dir.path());

        run(&options).unwrap();

        assert!(options.config_path.exists());
        let header = fs::read_to_string(&options.header_path).unwrap();
        assert!(header.contains("PROJECT_NAME = \"Project32Game\";"));
        let script = fs::read_to_string(&options.script_path).unwrap();
        assert_eq!(Some(script.as_str()), build_script());
    }

    #[test]
    fn test_validation_failure_leaves_outputs_untouched() {
        let temp_dir = TempDir::new().unwrap();
        let options = options_in(temp_dir.path());
        fs::write(
            &options.config_path,
            r#"{"encryption": {"enabled": true, "method": "RSA", "key": "short"}}"#,
        )
        .unwrap();
        fs::create_dir_all(options.header_path.parent().unwrap()).unwrap();
        fs::write(&options.header_path, "sentinel header").unwrap();

        let err = run(&options).unwrap_err();
        let violations = err.downcast_ref::<ConfigError>().unwrap().violations();
        assert!(violations.len() >= 2);

        assert_eq!(
            fs::read_to_string(&options.header_path).unwrap(),
            "sentinel header"
        );
        assert!(!options.script_path.exists());
    }

    #[test]
    fn test_parse_failure_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let options = options_in(temp_dir.path());
        fs::write(&options.config_path, "{ not json").unwrap();

        let err = run(&options).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::Parse { .. })
        ));
        assert!(!options.header_path.exists());
        assert!(!options.script_path.exists());
    }

    #[test]
    fn test_script_name_falls_back_to_default() {
        assert_eq!(script_name(Path::new("out/make.bat")), "make.bat");
        assert_eq!(script_name(Path::new("/")), "build.bat");
    }
}
