//! Test runner execution layer
//!
//! This module runs a single test file through an external runner command
//! and turns its output into an [`AggregatedResult`].

mod executor;
/// Parser module (public for integration testing)
pub mod parser;

pub use executor::{RunOutput, TestRunner};
pub use parser::SummaryParser;

use std::io;
use thiserror::Error;

/// Errors that can occur when running the test runner
#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Runner command is empty")]
    EmptyCommand,

    #[error("Runner `{0}` is not installed or not in PATH")]
    NotFound(String),

    #[error("Invalid failure pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// One run asked for by the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    /// Test file to run (empty = no restriction)
    pub path: String,
    /// Overwrite stored snapshots with the current output
    pub update_snapshots: bool,
}

impl RunRequest {
    pub fn new(path: impl Into<String>, update_snapshots: bool) -> Self {
        Self {
            path: path.into(),
            update_snapshots,
        }
    }

    /// The session asked the runner to drop its single-file restriction
    pub fn clears_restriction(&self) -> bool {
        self.path.is_empty()
    }
}

/// Something that can execute a run request
pub trait RunTests {
    fn run_tests(&mut self, request: &RunRequest) -> Result<RunOutput, RunnerError>;
}
