//! Windows build script
//!
//! The script is static: it runs the generator, then configures and builds
//! the library with CMake, stopping with exit code 1 at the first failing
//! step. It is embedded at compile time from `templates/build.bat`.

use include_dir::{Dir, include_dir};

// Embed templates at compile time
static TEMPLATES: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Name of the embedded build script template
pub const BUILD_SCRIPT_TEMPLATE: &str = "build.bat";

/// Contents of the Windows build script
pub fn build_script() -> Option<&'static str> {
    TEMPLATES
        .get_file(BUILD_SCRIPT_TEMPLATE)
        .and_then(|file| file.contents_utf8())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_script_is_embedded() {
        let script = build_script().expect("build.bat should be embedded");
        assert!(script.starts_with("@echo off"));
    }

    #[test]
    fn test_build_script_runs_steps_in_order() {
        let script = build_script().unwrap();
        let generate = script.find("rbk-config").unwrap();
        let configure = script.find("cmake .. -DRBK_USE_CONFIG=ON").unwrap();
        let build = script.find("cmake --build . --config Release").unwrap();
        assert!(generate < configure);
        assert!(configure < build);
    }

    #[test]
    fn test_every_step_propagates_failure() {
        let script = build_script().unwrap();
        assert_eq!(script.matches("if errorlevel 1 (").count(), 3);
        assert_eq!(script.matches("exit /b 1").count(), 3);
    }
}
