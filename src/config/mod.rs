//! Build configuration management
//!
//! ## Architecture
//!
//! - `schema` - Configuration data structures and defaults
//! - `validation` - Rule checks and default resolution
//! - `io` - Reading and creating `config.json`

pub mod io;
pub mod schema;
pub mod validation;

pub use io::{LoadedConfig, load_or_create, read_config, write_starter_config};
pub use schema::{BuildConfig, ResolvedConfig};
pub use validation::{MIN_ENCRYPTION_KEY_LEN, SUPPORTED_ENCRYPTION_METHODS};
