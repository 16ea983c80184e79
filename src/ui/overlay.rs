//! Interactive snapshot progress overlay
//!
//! Rewritten in place after every run that still reports a snapshot
//! failure: the cursor moves up over the previous block, the screen is
//! erased downward, and the block is written again.

use std::io::{self, Write};

use crossterm::cursor::MoveUp;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};

use super::style::Painter;
use super::symbols::{BULLET, headings};
use super::theme;
use crate::format::pluralize;
use crate::keys::{self, KeyBindEntry};

/// Rows reclaimed by the cursor-up before each redraw
pub const OVERLAY_HEIGHT: u16 = 6;

/// Counts shown in the overlay status line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayStats {
    /// Files still queued
    pub failed: usize,
    /// Files resolved since the session started
    pub passed: usize,
}

impl OverlayStats {
    /// Skipping only makes sense with another file to move to
    pub fn can_skip(&self) -> bool {
        self.failed > 1
    }
}

/// Build the overlay text (without the cursor movement)
pub fn overlay_text(stats: OverlayStats, painter: &Painter) -> String {
    let mut status = painter.paint(
        theme::overlay::failed(),
        format!("{} failed", pluralize("suite", stats.failed)),
    );
    if stats.passed > 0 {
        status.push_str(", ");
        status.push_str(&painter.paint(
            theme::overlay::passed(),
            format!("{} passed", pluralize("suite", stats.passed)),
        ));
    }

    let mut lines = vec![
        format!("\n{}", painter.paint(theme::overlay::title(), headings::PROGRESS)),
        format!(" {BULLET} {status}"),
        format!("\n{}", painter.paint(theme::overlay::title(), headings::USAGE)),
    ];
    lines.extend(
        keys::usage_hints(stats.can_skip())
            .into_iter()
            .map(|hint| hint_line(hint, painter)),
    );

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn hint_line(hint: &KeyBindEntry, painter: &Painter) -> String {
    format!(
        "{}{}{}",
        painter.paint(theme::overlay::hint(), format!(" {BULLET} Press ")),
        hint.key,
        painter.paint(theme::overlay::hint(), format!(" {}", hint.description)),
    )
}

/// Redraw the overlay on `out`
pub fn render_overlay<W: Write>(
    out: &mut W,
    stats: OverlayStats,
    painter: &Painter,
) -> io::Result<()> {
    queue!(out, MoveUp(OVERLAY_HEIGHT), Clear(ClearType::FromCursorDown))?;
    out.write_all(overlay_text(stats, painter).as_bytes())?;
    out.flush()
}
