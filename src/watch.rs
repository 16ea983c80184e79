//! Watch-mode host for the interactive session
//!
//! Wires the session controller to a test runner: run requests issued by
//! the controller are queued on a channel and executed one at a time, and
//! each result is fed back before the next key is read.

use std::io::Write;
use std::sync::mpsc::{self, Receiver, Sender};

use crossterm::event::KeyEvent;

use crate::keys;
use crate::runner::{RunRequest, RunTests, RunnerError};
use crate::session::{EndReason, SnapshotInteractiveMode};
use crate::ui::{OVERLAY_HEIGHT, Painter};

/// Interactive snapshot session bound to a runner
#[derive(Debug)]
pub struct WatchSession<R: RunTests, W: Write> {
    mode: SnapshotInteractiveMode<W>,
    runner: R,
    sender: Sender<RunRequest>,
    requests: Receiver<RunRequest>,
    /// Runs executed so far
    runs: usize,
}

impl<R: RunTests, W: Write> WatchSession<R, W> {
    pub fn new(runner: R, pipe: W, painter: Painter) -> Self {
        let (sender, requests) = mpsc::channel();
        Self {
            mode: SnapshotInteractiveMode::new(pipe).with_painter(painter),
            runner,
            sender,
            requests,
            runs: 0,
        }
    }

    pub fn mode(&self) -> &SnapshotInteractiveMode<W> {
        &self.mode
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn runs(&self) -> usize {
        self.runs
    }

    /// Start reviewing `paths` (the first run is queued, not executed)
    pub fn start<I, S>(&mut self, paths: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sender = self.sender.clone();
        self.mode.start(paths, move |path: &str, update: bool| {
            if sender.send(RunRequest::new(path, update)).is_err() {
                log::warn!("run request for {path:?} dropped: session host is gone");
            }
        });
    }

    /// Forward a key event; Ctrl+C aborts the session
    pub fn on_key(&mut self, key: KeyEvent) {
        if keys::is_interrupt_key(&key) {
            self.mode.abort();
        } else {
            self.mode.handle_key(key);
        }
    }

    /// Execute queued run requests until the controller stops asking.
    ///
    /// Only the most recent request is run: keys pressed between two calls
    /// supersede each other, and a result is always credited to the file at
    /// the head of the queue. Requests left over from an ended session are
    /// discarded.
    pub fn run_pending(&mut self) -> Result<(), RunnerError> {
        while let Some(request) = self.latest_request() {
            if request.clears_restriction() {
                log::debug!("single-file restriction cleared");
                continue;
            }
            if !self.mode.is_active() {
                log::debug!("discarding stale run request for {}", request.path);
                continue;
            }
            if self.mode.current_path() != Some(request.path.as_str()) {
                log::debug!("discarding superseded run request for {}", request.path);
                continue;
            }

            let run = self.runner.run_tests(&request)?;
            self.runs += 1;

            let pipe = self.mode.pipe_mut();
            pipe.write_all(run.output.as_bytes())?;
            if !run.output.is_empty() && !run.output.ends_with('\n') {
                pipe.write_all(b"\n")?;
            }
            if run.results.has_snapshot_failure() {
                // Rows the overlay moves back over
                pipe.write_all("\n".repeat(usize::from(OVERLAY_HEIGHT)).as_bytes())?;
            }
            pipe.flush()?;

            self.mode.handle_results(&run.results)?;
        }
        Ok(())
    }

    /// Drain the channel, keeping the last request
    fn latest_request(&mut self) -> Option<RunRequest> {
        let mut latest = None;
        while let Ok(request) = self.requests.try_recv() {
            if let Some(dropped) = latest.replace(request) {
                log::debug!("run request for {:?} superseded", dropped.path);
            }
        }
        latest
    }

    pub fn is_finished(&self) -> bool {
        !self.mode.is_active()
    }

    pub fn end_reason(&self) -> Option<EndReason> {
        self.mode.end_reason()
    }
}
