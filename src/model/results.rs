//! Aggregated run result model
//!
//! One value is produced per completed test-file run.

/// Snapshot counters reported by a run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SnapshotSummary {
    /// A snapshot mismatch remains unresolved after the run
    pub failure: bool,
    /// Snapshots that did not match
    pub unmatched: u32,
    /// Snapshots overwritten in update mode
    pub updated: u32,
    /// Snapshots written for the first time
    pub added: u32,
    /// Snapshots that matched
    pub matched: u32,
    /// Total snapshots checked
    pub total: u32,
}

/// Summary of one completed run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregatedResult {
    /// Runner exited successfully
    pub success: bool,
    /// Failed tests
    pub num_failed_tests: u32,
    /// Passed tests
    pub num_passed_tests: u32,
    /// Snapshot counters
    pub snapshot: SnapshotSummary,
}

impl AggregatedResult {
    /// A run that left a snapshot mismatch behind
    pub fn snapshot_failure() -> Self {
        Self {
            success: false,
            snapshot: SnapshotSummary {
                failure: true,
                ..SnapshotSummary::default()
            },
            ..Self::default()
        }
    }

    /// A run with every snapshot resolved
    pub fn resolved() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    /// Check whether the run still reports an unresolved snapshot mismatch
    pub fn has_snapshot_failure(&self) -> bool {
        self.snapshot.failure
    }
}
