pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;

pub use config::{BuildConfig, ResolvedConfig};
pub use error::ConfigError;
