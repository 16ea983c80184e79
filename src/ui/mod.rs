//! Terminal presentation for the interactive session
//!
//! - [`overlay`]: progress overlay rendering
//! - [`style`]: optional ANSI styling
//! - [`theme`]: overlay styles
//! - [`symbols`]: bullet and headings
//! - [`crlf`]: raw-mode line translation

pub mod crlf;
pub mod overlay;
pub mod style;
pub mod symbols;
pub mod theme;

pub use crlf::CrlfWriter;
pub use overlay::{OVERLAY_HEIGHT, OverlayStats, render_overlay};
pub use style::{ColorMode, Painter};
