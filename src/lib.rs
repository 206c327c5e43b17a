//! Pomodoro Timer - a terminal timer for the Pomodoro technique
//!
//! This library provides the settings editor that persists interval durations
//! and the single-threaded countdown that rotates between work and break phases.

pub mod config;
pub mod settings;
pub mod state;
pub mod tasks;
pub mod ui;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use settings::{Durations, SettingsOutcome, SettingsStore};
pub use state::{AppState, Phase};
pub use tasks::{countdown_task, Command};
pub use utils::signals::shutdown_signal;
