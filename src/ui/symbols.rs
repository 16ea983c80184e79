//! UI symbols used in the overlay text
//!
//! ## Character Set Policy
//! - **Unicode adopted**: matches the watch-mode prompts of common JS runners
//!
//! ASCII alternative (for reference):
//! - BULLET: '>'

/// Bullet in front of status and hint lines (›)
pub const BULLET: char = '\u{203A}';

/// Overlay headings
pub mod headings {
    /// Heading above the pass/fail counts
    pub const PROGRESS: &str = "Interactive Snapshot Progress";
    /// Heading above the key hints
    pub const USAGE: &str = "Watch Usage";
}
