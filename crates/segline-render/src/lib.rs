#![forbid(unsafe_code)]

//! Render pipeline for segment lines (shell prompts, status lines).
//!
//! - [`render_segments`] lays out a segment list for one [`Side`], inserting
//!   [`Divider`]s and padding. It is pure.
//! - [`emit_all`] turns the units into [`StyledChunk`]s.
//! - [`Presenter`] encodes chunks as ANSI and writes them to a sink;
//!   [`emit_and_write`] does both steps.
//!
//! # Example
//! ```
//! use segline_render::{DividerGlyphs, RenderConfig, Segment, Side, emit_and_write, render_segments};
//! use segline_style::{Palette, StyleEntry, StyleSheet};
//!
//! let sheet = StyleSheet::new().with("time", StyleEntry::new("white", "blue"));
//! let palette = Palette::new()
//!     .with_index("white", 15)
//!     .with_index("blue", 4)
//!     .with_index("background", 0);
//! let cfg = RenderConfig::new(sheet, palette).with_glyphs(DividerGlyphs::ascii());
//!
//! let units = render_segments(&cfg, Side::Left, &[Segment::new("time", "12:00")]).unwrap();
//! assert_eq!(units.len(), 2);
//!
//! let mut out = Vec::new();
//! emit_and_write(&mut out, &cfg, &units).unwrap();
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "\x1b[38;5;15;48;5;4m 12:00 \x1b[0m\x1b[38;5;4;48;5;0m>\x1b[0m"
//! );
//! ```

pub mod config;
pub mod divider;
pub mod emit;
pub mod error;
pub mod glyphs;
pub mod layout;
pub mod present;
pub mod side;
pub mod unit;

pub use config::RenderConfig;
pub use divider::{DIVIDER_GROUP_SUFFIX, background_of, make_divider};
pub use emit::{StyledChunk, emit, emit_all, line_width};
pub use error::RenderError;
pub use glyphs::{DividerGlyphs, DividerKind};
pub use layout::render_segments;
pub use present::{Presenter, PromptEscape, emit_and_write};
pub use side::Side;
pub use unit::{Divider, RenderUnit, Segment};

/// Lay out, style, and write one side of a prompt.
pub fn render_to<W: std::io::Write + ?Sized>(
    sink: &mut W,
    cfg: &RenderConfig,
    side: Side,
    segments: &[Segment],
) -> Result<(), RenderError> {
    let units = render_segments(cfg, side, segments)?;
    emit_and_write(sink, cfg, &units)
}
