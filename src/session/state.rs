//! Session state and lifecycle

use std::collections::VecDeque;
use std::fmt;
use std::io::Write;

use crate::ui::Painter;

/// Callback asking the runner to execute one file, optionally approving snapshots
///
/// Called with an empty path and `false` when the session ends, meaning
/// "clear the single-file restriction". Kept until the next `start`.
pub type RunRequestFn = Box<dyn FnMut(&str, bool)>;

/// Why the last session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndReason {
    /// Quit, escape, or an explicit abort
    Aborted,
    /// Every queued file stopped reporting snapshot failures
    Completed,
}

/// Controller for interactive snapshot update mode
///
/// Owns the queue of failing test files. The output stream is only ever
/// written to, never closed.
pub struct SnapshotInteractiveMode<W: Write> {
    pub(super) pipe: W,
    pub(super) painter: Painter,
    pub(super) active: bool,
    /// Failing files not yet resolved (front = file under review)
    pub(super) pending_paths: VecDeque<String>,
    /// Number of files at session start
    pub(super) total_count: usize,
    pub(super) on_request_run: Option<RunRequestFn>,
    pub(super) end_reason: Option<EndReason>,
}

impl<W: Write> fmt::Debug for SnapshotInteractiveMode<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SnapshotInteractiveMode")
            .field("active", &self.active)
            .field("pending_paths", &self.pending_paths)
            .field("total_count", &self.total_count)
            .field("end_reason", &self.end_reason)
            .finish_non_exhaustive()
    }
}

impl<W: Write> SnapshotInteractiveMode<W> {
    /// Create an inactive controller writing plain text to `pipe`
    pub fn new(pipe: W) -> Self {
        Self {
            pipe,
            painter: Painter::plain(),
            active: false,
            pending_paths: VecDeque::new(),
            total_count: 0,
            on_request_run: None,
            end_reason: None,
        }
    }

    /// Use `painter` for overlay styling
    pub fn with_painter(mut self, painter: Painter) -> Self {
        self.painter = painter;
        self
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// File currently under review
    pub fn current_path(&self) -> Option<&str> {
        self.pending_paths.front().map(String::as_str)
    }

    /// Queued files in run order
    pub fn pending_paths(&self) -> impl Iterator<Item = &str> {
        self.pending_paths.iter().map(String::as_str)
    }

    pub fn pending_count(&self) -> usize {
        self.pending_paths.len()
    }

    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Files resolved since the session started
    pub fn passed_count(&self) -> usize {
        self.total_count - self.pending_paths.len()
    }

    /// How the most recent session ended (None while running or before any)
    pub fn end_reason(&self) -> Option<EndReason> {
        self.end_reason
    }

    pub fn pipe(&self) -> &W {
        &self.pipe
    }

    pub fn pipe_mut(&mut self) -> &mut W {
        &mut self.pipe
    }

    /// Begin a session over `failed_paths`.
    ///
    /// An empty list leaves any existing session untouched. Otherwise the
    /// previous session state is replaced and the first file is run.
    /// Repeated paths are kept once, at their first position.
    pub fn start<I, S, F>(&mut self, failed_paths: I, on_request_run: F)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        F: FnMut(&str, bool) + 'static,
    {
        let mut paths: VecDeque<String> = VecDeque::new();
        for path in failed_paths {
            let path = path.into();
            if !paths.contains(&path) {
                paths.push_back(path);
            }
        }
        if paths.is_empty() {
            return;
        }

        log::debug!("starting snapshot session with {} file(s)", paths.len());
        self.total_count = paths.len();
        self.pending_paths = paths;
        self.on_request_run = Some(Box::new(on_request_run));
        self.end_reason = None;
        self.active = true;
        self.request_run(false);
    }

    /// End the session and tell the runner to drop its file restriction.
    ///
    /// Safe to call at any time. Once a session has been started, every
    /// call repeats the `("", false)` signal; before any `start` there is
    /// no callback to signal.
    pub fn abort(&mut self) {
        self.finish(EndReason::Aborted);
    }

    pub(super) fn finish(&mut self, reason: EndReason) {
        if self.active {
            log::debug!("snapshot session ended: {reason:?}");
            self.end_reason = Some(reason);
        }
        self.active = false;
        self.pending_paths.clear();
        if let Some(on_request_run) = self.on_request_run.as_mut() {
            on_request_run("", false);
        }
    }

    /// Ask the runner to execute the file under review
    pub(super) fn request_run(&mut self, update_snapshots: bool) {
        let (Some(path), Some(on_request_run)) =
            (self.pending_paths.front(), self.on_request_run.as_mut())
        else {
            return;
        };
        log::debug!("requesting run of {path} (update: {update_snapshots})");
        on_request_run(path, update_snapshots);
    }
}
