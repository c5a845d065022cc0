//! Console output: banner, progress rules, and the configuration summary

use crate::config::BuildConfig;

/// Horizontal rule printed between output sections
pub const RULE_WIDTH: usize = 60;

/// Qualitative label for each compression level, indexed by level
pub const COMPRESSION_LABELS: [&str; 10] = [
    "None", "Fastest", "Fast", "Fast", "Normal", "Normal", "Good", "Good", "Better", "Best",
];

const BANNER: &str = r#"
██████╗ ███████╗████████╗██████╗  ██████╗ ██████╗  ██████╗ ██╗ ██████╗ ██╗  ██╗
██╔══██╗██╔════╝╚══██╔══╝██╔══██╗██╔═══██╗██╔══██╗██╔═══██╗██║██╔════╝ ██║  ██║
██████╔╝█████╗     ██║   ██████╔╝██║   ██║██████╔╝██║   ██║██║███████╗ ███████║
██╔══██╗██╔══╝     ██║   ██╔══██╗██║   ██║██╔══██╗██║   ██║██║██╔═══██╗╚════██║
██║  ██║███████╗   ██║   ██║  ██║╚██████╔╝██████╔╝╚██████╔╝██║╚██████╔╝     ██║
╚═╝  ╚═╝╚══════╝   ╚═╝   ╚═╝  ╚═╝ ╚═════╝ ╚═════╝  ╚═════╝ ╚═╝ ╚═════╝      ╚═╝
                          Asset Configuration Generator v2.0
                               For Project32 Game Engine
"#;

/// ASCII banner shown at startup
pub fn banner() -> &'static str {
    BANNER
}

pub fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

/// Label for a compression level, `None` outside `0..=9`
pub fn compression_label(level: u8) -> Option<&'static str> {
    COMPRESSION_LABELS.get(usize::from(level)).copied()
}

fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

/// Render the post-generation summary
///
/// Reads the loaded configuration directly, so absent project fields show
/// neutral placeholders instead of the header defaults.
pub fn render_summary(config: &BuildConfig, script_name: &str) -> String {
    let project = &config.project;
    let name = project.name.as_deref().unwrap_or("Unknown");
    let version = project.version.as_deref().unwrap_or("1.0");
    let author = project.author.as_deref().unwrap_or("Unknown");

    let mut lines = vec![
        String::new(),
        rule(),
        "CONFIGURATION SUMMARY".to_string(),
        rule(),
        format!("Project: {} v{}", name, version),
        format!("Author: {}", author),
        String::new(),
        "Security Features:".to_string(),
        format!("  Encryption: {}", on_off(config.encryption_enabled())),
    ];

    if config.encryption_enabled() {
        let method = config.encryption.method.as_deref().unwrap_or("XOR");
        let key_len = config
            .encryption
            .key
            .as_deref()
            .map_or(0, |key| key.chars().count());
        lines.push(format!("    Method: {}", method));
        lines.push(format!("    Key Length: {} characters", key_len));
    }

    lines.push(format!(
        "  Filename Obfuscation: {}",
        on_off(config.security.obfuscate_filenames.unwrap_or(false))
    ));
    lines.push(format!(
        "  Checksum Verification: {}",
        on_off(config.security.verify_checksums.unwrap_or(true))
    ));
    lines.push(String::new());
    lines.push("Performance:".to_string());

    let compression = match config.compression_level() {
        Some(level) => format!(
            "  Compression: Level {}/9 ({})",
            level,
            compression_label(level).unwrap_or("Unknown")
        ),
        None => "  Compression: invalid level".to_string(),
    };
    lines.push(compression);

    lines.extend([
        String::new(),
        rule(),
        "RetroBoi64 is ready for Project32 Engine!".to_string(),
        String::new(),
        "Next steps:".to_string(),
        format!("  1. Run '{}' (Windows) or build with your IDE", script_name),
        "  2. Link RetroBoi64 library to your Project32 game".to_string(),
        "  3. Start packing your game assets!".to_string(),
        String::new(),
        "Happy retro game development!".to_string(),
        rule(),
    ]);

    lines.join("\n")
}
