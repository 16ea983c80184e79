//! Parser for test runner summaries
//!
//! Reads the Jest-style summary block printed at the end of a run:
//!
//! ```text
//! Tests:       1 failed, 4 passed, 5 total
//! Snapshots:   1 failed, 2 passed, 3 total
//! ```

use regex::Regex;
use std::sync::LazyLock;

use super::RunnerError;
use crate::model::{AggregatedResult, SnapshotSummary};

/// Regex for ANSI SGR sequences (colored runner output)
static ANSI_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("Invalid ANSI regex"));

/// Regex for the `Snapshots:` summary line
static SNAPSHOTS_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^\s*Snapshots:\s*(.*)$").expect("Invalid snapshots line regex")
});

/// Regex for the `Tests:` summary line
static TESTS_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\s*Tests:\s*(.*)$").expect("Invalid tests line regex"));

/// Regex for one `N label` counter within a summary line
static COUNTER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d+) (failed|updated|written|passed|obsolete|skipped|todo|total)")
        .expect("Invalid counter regex")
});

/// Turns captured runner output into an [`AggregatedResult`]
#[derive(Debug, Clone, Default)]
pub struct SummaryParser {
    /// Extra pattern that marks the run as a snapshot failure
    failure_pattern: Option<Regex>,
}

impl SummaryParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also treat any match of `pattern` as a snapshot failure
    pub fn with_failure_pattern(pattern: &str) -> Result<Self, RunnerError> {
        Ok(Self {
            failure_pattern: Some(Regex::new(pattern)?),
        })
    }

    /// Parse combined stdout/stderr of one run
    pub fn parse(&self, output: &str, success: bool) -> AggregatedResult {
        let output = ANSI_REGEX.replace_all(output, "");

        let mut result = AggregatedResult {
            success,
            ..AggregatedResult::default()
        };

        if let Some(line) = last_capture(&SNAPSHOTS_LINE_REGEX, &output) {
            result.snapshot = parse_snapshot_counters(line);
        }
        if let Some(line) = last_capture(&TESTS_LINE_REGEX, &output) {
            for (count, label) in counters(line) {
                match label {
                    "failed" => result.num_failed_tests = count,
                    "passed" => result.num_passed_tests = count,
                    _ => {}
                }
            }
        }

        let pattern_matched = self
            .failure_pattern
            .as_ref()
            .is_some_and(|pattern| pattern.is_match(&output));
        result.snapshot.failure = result.snapshot.unmatched > 0 || pattern_matched;

        result
    }
}

fn parse_snapshot_counters(line: &str) -> SnapshotSummary {
    let mut summary = SnapshotSummary::default();
    for (count, label) in counters(line) {
        match label {
            "failed" => summary.unmatched = count,
            "updated" => summary.updated = count,
            "written" => summary.added = count,
            "passed" => summary.matched = count,
            "total" => summary.total = count,
            _ => {}
        }
    }
    summary
}

fn last_capture<'a>(regex: &Regex, text: &'a str) -> Option<&'a str> {
    regex
        .captures_iter(text)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

fn counters(line: &str) -> impl Iterator<Item = (u32, &str)> {
    COUNTER_REGEX.captures_iter(line).filter_map(|caps| {
        let count = caps.get(1)?.as_str().parse::<u32>().ok()?;
        Some((count, caps.get(2)?.as_str()))
    })
}
