#![forbid(unsafe_code)]

//! segline: render labeled segments into a powerline-style prompt line.
//!
//! Re-exports the style and render crates under one roof. Most callers only
//! need the [`prelude`].
//!
//! # Example
//! ```
//! use segline::prelude::*;
//!
//! let sheet = StyleSheet::new()
//!     .with("user", StyleEntry::new("white", "blue").attr("bold"))
//!     .with("cwd", StyleEntry::new("black", "green"));
//! let palette = Palette::new()
//!     .with_index("white", 15)
//!     .with_index("black", 0)
//!     .with_index("blue", 4)
//!     .with_index("green", 2)
//!     .with_index("background", 236);
//! let cfg = RenderConfig::new(sheet, palette);
//!
//! let segments = [Segment::new("user", "me"), Segment::new("cwd", "~/src")];
//! let units = render_segments(&cfg, Side::Left, &segments).unwrap();
//! assert_eq!(units.len(), 4);
//!
//! let mut out = Vec::new();
//! emit_and_write(&mut out, &cfg, &units).unwrap();
//! assert!(!out.is_empty());
//! ```

pub use segline_render as render;
pub use segline_style as style;

pub use segline_render::{
    Divider, DividerGlyphs, DividerKind, Presenter, PromptEscape, RenderConfig, RenderError,
    RenderUnit, Segment, Side, StyledChunk, emit, emit_all, emit_and_write, line_width,
    make_divider, render_segments, render_to,
};
pub use segline_style::{
    Attrs, ColorProfile, ColorValue, Palette, ResolvedStyle, Rgb, StyleEntry, StyleError,
    StyleSheet, resolve, resolve_or_background,
};

/// Everything needed to configure and render a prompt line.
pub mod prelude {
    pub use segline_render::{
        DividerGlyphs, PromptEscape, RenderConfig, RenderError, RenderUnit, Segment, Side,
        emit_and_write, render_segments, render_to,
    };
    pub use segline_style::{ColorProfile, ColorValue, Palette, StyleEntry, StyleSheet};
}
