use clap::Parser;
use std::path::PathBuf;

/// Terminal keypad calculator.
#[derive(Debug, Parser)]
#[command(name = "calcterm", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write diagnostic logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "calcterm=trace"
    #[arg(long, value_name = "FILTER")]
    pub log_level: Option<String>,

    /// Do not capture the mouse; keypad buttons are not clickable
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Apply command line overrides on top of the loaded config.
    pub fn apply(&self, config: &mut crate::config::Config) {
        if let Some(path) = &self.log_file {
            config.logging.file = Some(path.clone());
        }
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
    }
}
