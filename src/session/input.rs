//! Keystroke handling for the session

use std::io::Write;

use crossterm::event::KeyEvent;

use super::state::SnapshotInteractiveMode;
use crate::keys::SessionKey;

impl<W: Write> SnapshotInteractiveMode<W> {
    /// Handle a terminal key event (ignored while inactive or unmapped)
    pub fn handle_key(&mut self, key: KeyEvent) {
        if let Some(session_key) = SessionKey::from_key(&key) {
            self.handle_session_key(session_key);
        }
    }

    /// Apply one decoded keystroke
    pub fn handle_session_key(&mut self, key: SessionKey) {
        if !self.active {
            return;
        }

        match key {
            SessionKey::Update => self.request_run(true),
            SessionKey::Run => self.request_run(false),
            SessionKey::Skip => self.skip(),
            SessionKey::Quit | SessionKey::Cancel => self.abort(),
        }
    }

    fn skip(&mut self) {
        if self.pending_paths.len() < 2 {
            return;
        }
        self.pending_paths.rotate_left(1);
        self.request_run(false);
    }
}
