//! Settings module
//!
//! Loads the persisted interval durations, lets the user edit them and
//! writes them back before the timer starts.

pub mod durations;
pub mod editor;
pub mod form;
pub mod store;

// Re-export main types
pub use durations::{Durations, FieldSpec};
pub use editor::{run_settings_editor, EditCommand};
pub use form::{SettingsForm, SettingsOutcome, SpinField};
pub use store::{SettingsStore, DEFAULT_SETTINGS_FILE};
