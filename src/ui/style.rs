//! Optional ANSI styling of overlay text

use std::fmt::Display;

use crossterm::style::ContentStyle;

/// When to emit color and attribute sequences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Style only when stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve `Auto` against the terminal state of the output stream
    pub fn enabled(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

/// Applies styles when enabled, passes text through otherwise
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Painter that never styles
    pub fn plain() -> Self {
        Self::new(false)
    }

    /// Render `text` with `style`
    pub fn paint(&self, style: ContentStyle, text: impl Display) -> String {
        if self.enabled {
            style.apply(text).to_string()
        } else {
            text.to_string()
        }
    }
}
