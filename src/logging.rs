use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize diagnostic logging for rbk-config
///
/// Diagnostics go to stderr so they never mix with the progress lines and
/// summary on stdout. The level comes from the `-v` count only:
/// - no flag: warnings and errors
/// - `-v`: info
/// - `-vv` or more: debug
pub fn init(verbosity: u8) -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::new(filter_directive(verbosity)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(false)
                .compact(),
        )
        .try_init()
        .context("Failed to initialize tracing subscriber")?;

    tracing::debug!("Logging initialized at verbosity {}", verbosity);

    Ok(())
}

/// Filter directive for a `-v` count
fn filter_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "rbk_config=warn",
        1 => "rbk_config=info",
        _ => "rbk_config=debug",
    }
}
