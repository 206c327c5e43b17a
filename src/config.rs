//! Configuration and CLI argument handling

use std::path::PathBuf;

use clap::Parser;

use crate::settings::{SettingsStore, DEFAULT_SETTINGS_FILE};

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomodoro-timer")]
#[command(about = "A terminal Pomodoro timer with persisted interval durations")]
#[command(version)]
pub struct Config {
    /// Preference file holding `[pomodoro, short_break, long_break]` minutes
    #[arg(long, default_value = DEFAULT_SETTINGS_FILE)]
    pub settings: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Store backed by the configured preference file
    pub fn settings_store(&self) -> SettingsStore {
        SettingsStore::new(&self.settings)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }
}
