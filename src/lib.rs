//! snapit - interactive snapshot review for watch-mode test runners
//!
//! Reviews a queue of test files with failing snapshots one file at a
//! time: re-run, approve (update), skip or quit with a single key.
//!
//! This library provides:
//! - [`session`]: The interactive session controller
//! - [`keys`]: Key binding definitions
//! - [`model`]: Run result models
//! - [`runner`]: Test runner execution and output parsing
//! - [`watch`]: Host wiring the controller to a runner
//! - [`ui`]: Progress overlay rendering
//! - [`cli`]: Command-line configuration
//! - [`terminal`]: Raw mode handling for the binary
//! - [`format`]: Count formatting

pub mod cli;
pub mod format;
pub mod keys;
pub mod model;
pub mod runner;
pub mod session;
pub mod terminal;
pub mod ui;
pub mod watch;
