//! State management module
//!
//! This module contains the phase model, the per-phase countdowns and the
//! state machine that rotates between them.

pub mod app_state;
pub mod phase;
pub mod snapshot;
pub mod timer_state;

// Re-export main types
pub use app_state::{AppState, Transition, LONG_BREAK_EVERY};
pub use phase::Phase;
pub use snapshot::{Action, PhaseView, TimerSnapshot};
pub use timer_state::TimerState;
