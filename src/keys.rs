//! Keybinding definitions for snapit
//!
//! All keybindings for the interactive session are defined here, together
//! with the usage hints shown in the progress overlay.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// =============================================================================
// Key detection helpers (for modifier keys)
// =============================================================================

/// Check if key is Ctrl+C (interrupt)
/// Note: Accept both 'c' and 'C' for terminal compatibility
pub fn is_interrupt_key(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

// =============================================================================
// Session keys
// =============================================================================

/// Re-run the current test file and accept its new snapshots
pub const UPDATE: KeyCode = KeyCode::Char('u');

/// Move the current test file to the end of the queue
pub const SKIP: KeyCode = KeyCode::Char('s');

/// Quit interactive snapshot mode
pub const QUIT: KeyCode = KeyCode::Char('q');

/// Alternative quit
pub const ESC: KeyCode = KeyCode::Esc;

/// Re-run the current test file without updating
pub const RUN: KeyCode = KeyCode::Enter;

/// Decoded keystroke understood by the interactive session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKey {
    Update,
    Skip,
    Quit,
    Cancel,
    Run,
}

impl SessionKey {
    /// Decode a terminal key event.
    ///
    /// Keys combined with Ctrl or Alt are never session keys, so `Ctrl+U`
    /// does not approve snapshots by accident.
    pub fn from_key(key: &KeyEvent) -> Option<Self> {
        if key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        {
            return None;
        }

        match key.code {
            UPDATE => Some(Self::Update),
            SKIP => Some(Self::Skip),
            QUIT => Some(Self::Quit),
            ESC => Some(Self::Cancel),
            RUN => Some(Self::Run),
            _ => None,
        }
    }
}

// =============================================================================
// Help text generation
// =============================================================================

/// Key binding entry for the usage block
pub struct KeyBindEntry {
    pub key: &'static str,
    pub description: &'static str,
}

/// Update hint
pub const UPDATE_HINT: KeyBindEntry = KeyBindEntry {
    key: "u",
    description: "to update failing snapshots for this test.",
};

/// Skip hint (only shown while more than one file is queued)
pub const SKIP_HINT: KeyBindEntry = KeyBindEntry {
    key: "s",
    description: "to skip the current test suite.",
};

/// Quit hint
pub const QUIT_HINT: KeyBindEntry = KeyBindEntry {
    key: "q",
    description: "to quit Interactive Snapshot Update Mode.",
};

/// Run hint
pub const RUN_HINT: KeyBindEntry = KeyBindEntry {
    key: "Enter",
    description: "to trigger a test run.",
};

/// Usage hints in display order
pub fn usage_hints(can_skip: bool) -> Vec<&'static KeyBindEntry> {
    let mut hints = vec![&UPDATE_HINT];
    if can_skip {
        hints.push(&SKIP_HINT);
    }
    hints.push(&QUIT_HINT);
    hints.push(&RUN_HINT);
    hints
}
