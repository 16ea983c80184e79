//! Command-line configuration

use clap::{Parser, ValueEnum};

use crate::runner::{RunnerError, SummaryParser, TestRunner};
use crate::ui::ColorMode;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "snapit",
    version,
    about = "Review failing snapshot tests one file at a time"
)]
pub struct Cli {
    /// Test files with failing snapshots, in review order
    pub paths: Vec<String>,

    /// Test runner command line (split on whitespace); the file path is appended
    #[arg(long, short = 'r', default_value = "npx jest")]
    pub runner: String,

    /// Argument added when snapshots should be updated
    #[arg(long, default_value = "-u", allow_hyphen_values = true)]
    pub update_flag: String,

    /// Extra regex marking a run as a snapshot failure when it matches the output
    #[arg(long)]
    pub failure_pattern: Option<String>,

    /// When to color the progress overlay
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => ColorMode::Auto,
            ColorChoice::Always => ColorMode::Always,
            ColorChoice::Never => ColorMode::Never,
        }
    }
}

impl Cli {
    /// Build the test runner described by the flags
    pub fn test_runner(&self) -> Result<TestRunner, RunnerError> {
        let parser = match &self.failure_pattern {
            Some(pattern) => SummaryParser::with_failure_pattern(pattern)?,
            None => SummaryParser::new(),
        };
        let runner = TestRunner::from_command_line(&self.runner, self.update_flag.clone())?;
        Ok(runner.with_parser(parser))
    }
}
