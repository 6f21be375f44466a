#![forbid(unsafe_code)]

//! Renderable units: segments from content providers and synthesized dividers.

use segline_style::ColorValue;

use crate::glyphs::DividerKind;

/// A labeled piece of prompt text.
///
/// `group` is the style sheet key; an empty group renders unstyled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Segment {
    pub group: String,
    pub text: String,
}

impl Segment {
    pub fn new(group: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            group: group.into(),
            text: text.into(),
        }
    }

    /// A segment with no style group.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new("", text)
    }

    #[inline]
    pub fn is_styled(&self) -> bool {
        !self.group.is_empty()
    }
}

/// A separator between two segments, with its colors already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Divider {
    pub fg: ColorValue,
    pub bg: ColorValue,
    pub text: String,
    pub kind: DividerKind,
}

/// One element of a rendered line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RenderUnit {
    Segment(Segment),
    Divider(Divider),
}

impl RenderUnit {
    /// Literal text of the unit (segment text or divider glyph).
    pub fn text(&self) -> &str {
        match self {
            Self::Segment(seg) => &seg.text,
            Self::Divider(div) => &div.text,
        }
    }

    pub fn as_segment(&self) -> Option<&Segment> {
        match self {
            Self::Segment(seg) => Some(seg),
            Self::Divider(_) => None,
        }
    }

    pub fn as_divider(&self) -> Option<&Divider> {
        match self {
            Self::Divider(div) => Some(div),
            Self::Segment(_) => None,
        }
    }

    #[inline]
    pub fn is_divider(&self) -> bool {
        matches!(self, Self::Divider(_))
    }
}

impl From<Segment> for RenderUnit {
    fn from(seg: Segment) -> Self {
        Self::Segment(seg)
    }
}

impl From<Divider> for RenderUnit {
    fn from(div: Divider) -> Self {
        Self::Divider(div)
    }
}
