//! Utility functions module
//!
//! Process-level helpers shared by the settings editor and the timer.

pub mod join;
pub mod lines;
pub mod signals;

// Re-export main functions
pub use join::report_task;
pub use lines::next_line;
pub use signals::shutdown_signal;
