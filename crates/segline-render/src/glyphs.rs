#![forbid(unsafe_code)]

//! Divider glyph table.

use crate::side::Side;

/// Hard dividers bridge two different backgrounds; soft ones sit inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DividerKind {
    Hard,
    Soft,
}

/// One glyph per (side, kind) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DividerGlyphs {
    pub left_hard: String,
    pub left_soft: String,
    pub right_hard: String,
    pub right_soft: String,
}

impl DividerGlyphs {
    pub fn new(
        left_hard: impl Into<String>,
        left_soft: impl Into<String>,
        right_hard: impl Into<String>,
        right_soft: impl Into<String>,
    ) -> Self {
        Self {
            left_hard: left_hard.into(),
            left_soft: left_soft.into(),
            right_hard: right_hard.into(),
            right_soft: right_soft.into(),
        }
    }

    /// Powerline private-use glyphs (needs a patched font).
    pub fn powerline() -> Self {
        Self::new("\u{e0b0}", "\u{e0b1}", "\u{e0b2}", "\u{e0b3}")
    }

    /// Plain ASCII stand-ins.
    pub fn ascii() -> Self {
        Self::new(">", "|", "<", "|")
    }

    /// Glyph for a divider of `kind` on `side`.
    pub fn get(&self, side: Side, kind: DividerKind) -> &str {
        let (hard, soft) = side.select(
            (self.left_hard.as_str(), self.left_soft.as_str()),
            (self.right_hard.as_str(), self.right_soft.as_str()),
        );
        match kind {
            DividerKind::Hard => hard,
            DividerKind::Soft => soft,
        }
    }
}

impl Default for DividerGlyphs {
    fn default() -> Self {
        Self::powerline()
    }
}
