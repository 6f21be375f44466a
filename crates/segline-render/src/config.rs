#![forbid(unsafe_code)]

//! Render configuration.
//!
//! Everything a render pass reads: the style sheet, palette, divider glyphs,
//! padding width, and output options. The configuration is never mutated by
//! a render, so one instance can serve the left and right halves of a prompt.

use segline_style::{ColorProfile, Palette, StyleSheet};

use crate::glyphs::DividerGlyphs;
use crate::present::PromptEscape;

/// Inputs shared by every stage of the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderConfig {
    pub sheet: StyleSheet,
    pub palette: Palette,
    pub glyphs: DividerGlyphs,
    /// Spaces added to each segment on the side facing away from the margin.
    pub num_spaces: usize,
    pub profile: ColorProfile,
    pub escape: PromptEscape,
}

impl RenderConfig {
    /// Default padding width.
    pub const DEFAULT_NUM_SPACES: usize = 1;

    /// Configuration with powerline glyphs and 256-color output.
    pub fn new(sheet: StyleSheet, palette: Palette) -> Self {
        Self {
            sheet,
            palette,
            glyphs: DividerGlyphs::default(),
            num_spaces: Self::DEFAULT_NUM_SPACES,
            profile: ColorProfile::default(),
            escape: PromptEscape::default(),
        }
    }

    #[must_use]
    pub fn with_glyphs(mut self, glyphs: DividerGlyphs) -> Self {
        self.glyphs = glyphs;
        self
    }

    #[must_use]
    pub fn with_num_spaces(mut self, num_spaces: usize) -> Self {
        self.num_spaces = num_spaces;
        self
    }

    #[must_use]
    pub fn with_profile(mut self, profile: ColorProfile) -> Self {
        self.profile = profile;
        self
    }

    #[must_use]
    pub fn with_escape(mut self, escape: PromptEscape) -> Self {
        self.escape = escape;
        self
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self::new(StyleSheet::default(), Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = RenderConfig::default();
        assert_eq!(cfg.num_spaces, 1);
        assert_eq!(cfg.glyphs, DividerGlyphs::powerline());
        assert_eq!(cfg.profile, ColorProfile::Ansi256);
        assert_eq!(cfg.escape, PromptEscape::None);
    }

    #[test]
    fn builder_overrides() {
        let cfg = RenderConfig::default()
            .with_num_spaces(3)
            .with_glyphs(DividerGlyphs::ascii())
            .with_profile(ColorProfile::Mono)
            .with_escape(PromptEscape::Zsh);
        assert_eq!(cfg.num_spaces, 3);
        assert_eq!(cfg.glyphs, DividerGlyphs::ascii());
        assert_eq!(cfg.profile, ColorProfile::Mono);
        assert_eq!(cfg.escape, PromptEscape::Zsh);
    }
}
