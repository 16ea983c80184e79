//! Terminal mode handling for the binary
//!
//! Keystrokes are read in raw mode. The runner is started with raw mode
//! switched off so it gets a normal terminal and Ctrl+C reaches it.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

use crate::runner::{RunOutput, RunRequest, RunTests, RunnerError};

/// Enable raw mode.
///
/// Returns a scope guard that disables raw mode on drop.
pub fn enter_raw_mode() -> std::io::Result<impl Drop> {
    enable_raw_mode()?;
    Ok(scopeguard::guard((), |_| {
        let _ = disable_raw_mode();
    }))
}

/// Suspend raw mode.
///
/// Returns a scope guard that re-enables raw mode on drop.
fn suspend_raw_mode() -> impl Drop {
    let _ = disable_raw_mode();
    scopeguard::guard((), |_| {
        let _ = enable_raw_mode();
    })
}

/// Runner wrapper that leaves raw mode for the duration of each run
#[derive(Debug)]
pub struct CookedRunner<R: RunTests> {
    inner: R,
}

impl<R: RunTests> CookedRunner<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }
}

impl<R: RunTests> RunTests for CookedRunner<R> {
    fn run_tests(&mut self, request: &RunRequest) -> Result<RunOutput, RunnerError> {
        let _guard = suspend_raw_mode();
        self.inner.run_tests(request)
    }
}
