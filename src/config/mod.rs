//! Configuration: TOML file under the user config dir, defaults when the
//! file is missing.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, UiConfig};
