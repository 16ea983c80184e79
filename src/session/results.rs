//! Run result handling for the session

use std::io::{self, Write};

use super::state::{EndReason, SnapshotInteractiveMode};
use crate::model::AggregatedResult;
use crate::ui::{OverlayStats, render_overlay};

impl<W: Write> SnapshotInteractiveMode<W> {
    /// Consume the result of the run requested last.
    ///
    /// A remaining snapshot failure keeps the current file and redraws the
    /// progress overlay; otherwise the file is resolved and the next one
    /// runs. Errors come only from writing the overlay.
    pub fn handle_results(&mut self, results: &AggregatedResult) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }

        if results.has_snapshot_failure() {
            return self.draw_overlay();
        }

        if let Some(resolved) = self.pending_paths.pop_front() {
            log::debug!("{resolved} has no snapshot failures left");
        }
        if self.pending_paths.is_empty() {
            self.finish(EndReason::Completed);
        } else {
            self.request_run(false);
        }
        Ok(())
    }

    fn draw_overlay(&mut self) -> io::Result<()> {
        let stats = OverlayStats {
            failed: self.pending_paths.len(),
            passed: self.passed_count(),
        };
        render_overlay(&mut self.pipe, stats, &self.painter)
    }
}
