//! Color theme definitions
//!
//! Centralized styles for the progress overlay.

use crossterm::style::{Attribute, Color, ContentStyle};

/// Styles for the progress overlay
pub mod overlay {
    use super::*;

    /// Section titles ("Interactive Snapshot Progress", "Watch Usage")
    pub fn title() -> ContentStyle {
        bold(None)
    }

    /// Failed suite count
    pub fn failed() -> ContentStyle {
        bold(Some(Color::Red))
    }

    /// Passed suite count
    pub fn passed() -> ContentStyle {
        bold(Some(Color::Green))
    }

    /// Hint prose around key names
    pub fn hint() -> ContentStyle {
        ContentStyle {
            attributes: Attribute::Dim.into(),
            ..ContentStyle::default()
        }
    }
}

fn bold(color: Option<Color>) -> ContentStyle {
    ContentStyle {
        foreground_color: color,
        attributes: Attribute::Bold.into(),
        ..ContentStyle::default()
    }
}
