#![forbid(unsafe_code)]

//! Converting units into styled chunks.

use segline_style::{Attrs, ColorValue, ResolvedStyle, StyleError, resolve};
use unicode_width::UnicodeWidthStr;

use crate::config::RenderConfig;
use crate::unit::RenderUnit;

/// Text plus the colors and attributes to paint it with.
///
/// Colors are still concrete palette values here; the presenter maps them
/// through the active [`ColorProfile`](segline_style::ColorProfile).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyledChunk {
    pub text: String,
    pub fg: Option<ColorValue>,
    pub bg: Option<ColorValue>,
    pub attrs: Attrs,
}

impl StyledChunk {
    /// Unstyled text.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fg: None,
            bg: None,
            attrs: Attrs::empty(),
        }
    }

    /// Text painted with a resolved style.
    pub fn styled(text: impl Into<String>, style: ResolvedStyle) -> Self {
        Self {
            text: text.into(),
            fg: Some(style.fg),
            bg: Some(style.bg),
            attrs: style.attrs,
        }
    }

    #[inline]
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_empty()
    }

    /// Display width in terminal cells.
    pub fn width(&self) -> usize {
        UnicodeWidthStr::width(self.text.as_str())
    }
}

/// Total display width of a line of chunks.
pub fn line_width(chunks: &[StyledChunk]) -> usize {
    chunks.iter().map(StyledChunk::width).sum()
}

/// Style one unit.
///
/// Segments resolve their group strictly: a group missing from the sheet is
/// an error here. Dividers already carry their colors.
pub fn emit(cfg: &RenderConfig, unit: &RenderUnit) -> Result<StyledChunk, StyleError> {
    match unit {
        RenderUnit::Segment(seg) => Ok(match resolve(&cfg.sheet, &cfg.palette, &seg.group)? {
            Some(style) => StyledChunk::styled(seg.text.as_str(), style),
            None => StyledChunk::plain(seg.text.as_str()),
        }),
        RenderUnit::Divider(div) => Ok(StyledChunk {
            text: div.text.clone(),
            fg: Some(div.fg),
            bg: Some(div.bg),
            attrs: Attrs::empty(),
        }),
    }
}

/// Style every unit, or fail before producing any chunk.
pub fn emit_all(cfg: &RenderConfig, units: &[RenderUnit]) -> Result<Vec<StyledChunk>, StyleError> {
    units.iter().map(|unit| emit(cfg, unit)).collect()
}
