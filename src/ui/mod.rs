//! Terminal surface module
//!
//! Reads button presses from stdin and renders timer snapshots to stdout.
//! It holds no timer state of its own.

pub mod input;
pub mod render;

// Re-export main functions
pub use input::{input_task, parse_command};
pub use render::{render_status, render_task};
