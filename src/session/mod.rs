//! Interactive snapshot session
//!
//! Contains the session controller, split into:
//! - `state`: queue, lifecycle and run requests
//! - `input`: keystroke handling
//! - `results`: run result handling and overlay redraw

mod input;
mod results;
mod state;

pub use state::{EndReason, RunRequestFn, SnapshotInteractiveMode};
