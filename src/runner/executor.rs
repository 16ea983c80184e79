//! Test runner executor
//!
//! Handles running the runner command for one file and capturing its output.

use std::process::Command;

use super::parser::SummaryParser;
use super::{RunRequest, RunTests, RunnerError};
use crate::model::AggregatedResult;

/// Captured output and parsed result of one run
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// Combined stdout and stderr
    pub output: String,
    pub results: AggregatedResult,
}

/// Executor for an external test runner
#[derive(Debug, Clone)]
pub struct TestRunner {
    program: String,
    args: Vec<String>,
    /// Argument added in update mode
    update_flag: String,
    parser: SummaryParser,
}

impl TestRunner {
    /// Create a runner from a command line such as `npx jest --ci`
    ///
    /// The command line is split on whitespace.
    pub fn from_command_line(
        command: &str,
        update_flag: impl Into<String>,
    ) -> Result<Self, RunnerError> {
        let mut parts = command.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(RunnerError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
            update_flag: update_flag.into(),
            parser: SummaryParser::new(),
        })
    }

    /// Use a custom summary parser
    pub fn with_parser(mut self, parser: SummaryParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed for `request`, after the program name
    pub fn args_for(&self, request: &RunRequest) -> Vec<String> {
        let mut args = self.args.clone();
        if request.update_snapshots && !self.update_flag.is_empty() {
            args.push(self.update_flag.clone());
        }
        if !request.clears_restriction() {
            args.push(request.path.clone());
        }
        args
    }

    /// Run the runner for `request` and parse its summary
    pub fn run(&self, request: &RunRequest) -> Result<RunOutput, RunnerError> {
        let args = self.args_for(request);
        log::info!("running {} {}", self.program, args.join(" "));

        let output = Command::new(&self.program).args(&args).output().map_err(|e| {
            log::warn!("failed to spawn {}: {e}", self.program);
            if e.kind() == std::io::ErrorKind::NotFound {
                RunnerError::NotFound(self.program.clone())
            } else {
                RunnerError::IoError(e)
            }
        })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&output.stderr));

        let results = self.parser.parse(&text, output.status.success());
        Ok(RunOutput {
            output: text,
            results,
        })
    }
}

impl RunTests for TestRunner {
    fn run_tests(&mut self, request: &RunRequest) -> Result<RunOutput, RunnerError> {
        self.run(request)
    }
}
