//! Background tasks module
//!
//! This module contains the countdown loop that owns the timer state.

pub mod countdown;

// Re-export main functions
pub use countdown::{countdown_task, Command, Delays};
