//! `pak_config.h` rendering
//!
//! The header is fixed-shape, so it is produced with plain formatting. The
//! only non-deterministic input is the generation timestamp, which callers
//! pass in explicitly.

use crate::config::ResolvedConfig;
use chrono::NaiveDateTime;

/// Version of the RBK configuration format baked into every header
pub const RBK_VERSION: &str = "2.0.0";

/// Engine the generated header targets
pub const ENGINE_NAME: &str = "Project32";

/// Format used for `BUILD_TIMESTAMP` and the banner comments
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

// Width between the box-drawing borders of the summary comment
const BOX_INNER_WIDTH: usize = 78;

/// Render the complete header for a validated configuration
pub fn render_header(config: &ResolvedConfig, generated_at: NaiveDateTime) -> String {
    let timestamp = generated_at.format(TIMESTAMP_FORMAT).to_string();

    let mut header = format!(
        r#"#pragma once

// ============================================================================
// RetroBoi64 Configuration Header (Auto-Generated)
// ============================================================================
// Generated: {timestamp}
// Project: {name} v{version}
// Author: {author}
//
// WARNING: DO NOT EDIT THIS FILE MANUALLY!
// This file is auto-generated from config.json by rbk-config
// ============================================================================

#define RBK_USE_CONFIG 1

namespace RBKConfig {{
    // Project Information
    constexpr const char* PROJECT_NAME = "{name_lit}";
    constexpr const char* PROJECT_VERSION = "{version_lit}";
    constexpr const char* PROJECT_AUTHOR = "{author_lit}";

    // Encryption Settings
    constexpr bool ENCRYPTION_ENABLED = {encryption_enabled};
    constexpr const char* ENCRYPTION_KEY = "{encryption_key}";
    constexpr const char* ENCRYPTION_METHOD = "{encryption_method}";

    // Compression Settings
    constexpr int COMPRESSION_LEVEL = {compression_level};
    constexpr const char* COMPRESSION_ALGORITHM = "{compression_algorithm}";

    // Security Settings
    constexpr bool OBFUSCATE_FILENAMES = {obfuscate_filenames};
    constexpr bool VERIFY_CHECKSUMS = {verify_checksums};
    constexpr const char* SIGNATURE_KEY = "{signature_key}";

    // Build Settings
    constexpr bool DEBUG_OUTPUT = {debug_output};
    constexpr bool PROGRESS_INDICATORS = {progress_indicators};

    // Version Information
    constexpr const char* RBK_VERSION = "{rbk_version}";
    constexpr const char* ENGINE_NAME = "{engine_name}";
    constexpr const char* BUILD_TIMESTAMP = "{timestamp}";
}}

// Configuration Summary (for reference):
/*
"#,
        name = comment_text(&config.project_name),
        version = comment_text(&config.project_version),
        author = comment_text(&config.project_author),
        name_lit = c_string(&config.project_name),
        version_lit = c_string(&config.project_version),
        author_lit = c_string(&config.project_author),
        encryption_enabled = bool_literal(config.encryption_enabled),
        encryption_key = c_string(&config.encryption_key),
        encryption_method = c_string(&config.encryption_method),
        compression_level = config.compression_level,
        compression_algorithm = c_string(&config.compression_algorithm),
        obfuscate_filenames = bool_literal(config.obfuscate_filenames),
        verify_checksums = bool_literal(config.verify_checksums),
        signature_key = c_string(&config.signature_key),
        debug_output = bool_literal(config.debug_output),
        progress_indicators = bool_literal(config.progress_indicators),
        rbk_version = RBK_VERSION,
        engine_name = ENGINE_NAME,
    );

    for line in summary_box(config, &timestamp) {
        header.push_str(&line);
        header.push('\n');
    }
    header.push_str("*/\n");

    header
}

/// C++ boolean literal
pub fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

/// Escape a value for use inside a C++ string literal
pub fn c_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Make a value safe to place inside `//` and `/* */` comments
///
/// Control characters become spaces so a value cannot start a new source
/// line, and `*/` is broken up so it cannot close the summary block.
pub fn comment_text(value: &str) -> String {
    value
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect::<String>()
        .replace("*/", "*\\/")
}

fn on_off(value: bool) -> &'static str {
    if value { "ON" } else { "OFF" }
}

fn summary_box(config: &ResolvedConfig, timestamp: &str) -> Vec<String> {
    let encryption = if config.encryption_enabled {
        format!("ENABLED ({})", config.encryption_method)
    } else {
        "DISABLED".to_string()
    };

    vec![
        border('╔', '╗'),
        title_row("RetroBoi64 Build Configuration"),
        border('╠', '╣'),
        box_row(&format!("Project: {}", config.project_name)),
        box_row(&format!("Version: {}", config.project_version)),
        box_row(&format!("Author:  {}", config.project_author)),
        box_row(""),
        box_row("Security Features:"),
        box_row(&format!("  • Encryption: {}", encryption)),
        box_row(&format!(
            "  • Filename Obfuscation: {}",
            on_off(config.obfuscate_filenames)
        )),
        box_row(&format!(
            "  • Checksum Verification: {}",
            on_off(config.verify_checksums)
        )),
        box_row(""),
        box_row("Performance Settings:"),
        box_row(&format!(
            "  • Compression Level: {}/9",
            config.compression_level
        )),
        box_row(&format!("  • Algorithm: {}", config.compression_algorithm)),
        box_row(""),
        box_row("Build Options:"),
        box_row(&format!("  • Debug Output: {}", on_off(config.debug_output))),
        box_row(&format!(
            "  • Progress Indicators: {}",
            on_off(config.progress_indicators)
        )),
        box_row(""),
        box_row(&format!("Generated: {}", timestamp)),
        border('╚', '╝'),
    ]
}

fn border(left: char, right: char) -> String {
    format!("{}{}{}", left, "═".repeat(BOX_INNER_WIDTH), right)
}

fn title_row(title: &str) -> String {
    format!("║{:^width$}║", title, width = BOX_INNER_WIDTH)
}

fn box_row(text: &str) -> String {
    format!(
        "║ {:<width$} ║",
        comment_text(text),
        width = BOX_INNER_WIDTH - 2
    )
}
