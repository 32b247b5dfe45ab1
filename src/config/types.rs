use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick interval in milliseconds; a pressed button stays highlighted
    /// for one tick (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Capture the mouse so keypad buttons are clickable (default: true).
    #[serde(default = "default_mouse")]
    pub mouse: bool,
}

/// Diagnostic logging. Nothing is written unless `file` is set, since the
/// terminal itself belongs to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. `~` is expanded to the home directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_mouse() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            mouse: default_mouse(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}
