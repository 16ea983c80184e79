//! Data models for snapit
//!
//! This module contains UI-independent data structures describing the
//! outcome of a single test-file run.

mod results;

pub use results::{AggregatedResult, SnapshotSummary};
