#![forbid(unsafe_code)]

//! Concrete colors, the named palette, and color profiles.
//!
//! Palette entries are either an 8-bit index or a true-color value carrying
//! an 8-bit fallback. Emission only ever uses the 8-bit index.

use std::collections::HashMap;

use crate::error::StyleError;

/// Palette name used when a referenced color is missing.
pub const BACKGROUND: &str = "background";

/// 24-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    #[inline]
    fn distance_sq(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

/// A concrete palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum ColorValue {
    /// Index into the 256-color table.
    Indexed(u8),
    /// True color with the index used on terminals limited to 256 colors.
    TrueColor { rgb: Rgb, fallback: u8 },
}

impl ColorValue {
    /// The 8-bit index the emitter uses for this color.
    #[inline]
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::Indexed(idx) => idx,
            Self::TrueColor { fallback, .. } => fallback,
        }
    }
}

impl From<u8> for ColorValue {
    fn from(idx: u8) -> Self {
        Self::Indexed(idx)
    }
}

/// Color name to concrete color mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Palette {
    colors: HashMap<String, ColorValue>,
}

impl Palette {
    /// Create an empty palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a color, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, color: ColorValue) -> Self {
        self.insert(name, color);
        self
    }

    /// Add an 8-bit indexed color, builder style.
    #[must_use]
    pub fn with_index(self, name: impl Into<String>, idx: u8) -> Self {
        self.with(name, ColorValue::Indexed(idx))
    }

    /// Add or replace a color.
    pub fn insert(&mut self, name: impl Into<String>, color: ColorValue) {
        self.colors.insert(name.into(), color);
    }

    /// Look a color up without any fallback.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<ColorValue> {
        self.colors.get(name).copied()
    }

    /// Look a color up, failing when it is absent.
    pub fn require(&self, name: &str) -> Result<ColorValue, StyleError> {
        self.get(name)
            .ok_or_else(|| StyleError::UnknownColorName(name.to_owned()))
    }

    /// Look a color up, substituting the `background` entry when it is absent.
    ///
    /// Fails only when both `name` and `background` are missing. The error
    /// names the color that was originally requested.
    pub fn resolve_or_background(&self, name: &str) -> Result<ColorValue, StyleError> {
        if let Some(color) = self.get(name) {
            return Ok(color);
        }
        tracing::debug!(color = name, "color missing from palette, using background");
        self.get(BACKGROUND).ok_or_else(|| {
            tracing::debug!(color = name, "palette has no background color");
            StyleError::UnknownColorName(name.to_owned())
        })
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl<N: Into<String>, C: Into<ColorValue>> FromIterator<(N, C)> for Palette {
    fn from_iter<I: IntoIterator<Item = (N, C)>>(iter: I) -> Self {
        Self {
            colors: iter
                .into_iter()
                .map(|(name, color)| (name.into(), color.into()))
                .collect(),
        }
    }
}

/// How resolved colors are represented in the emitted escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ColorProfile {
    /// `38;5;n` / `48;5;n` with the 8-bit index.
    #[default]
    Ansi256,
    /// The 16 base colors; higher indices reduced to the nearest base color.
    Ansi16,
    /// No colors at all. Attributes are still emitted.
    Mono,
}

/// xterm defaults for the 16 base colors.
const ANSI16_RGB: [Rgb; 16] = [
    Rgb::new(0, 0, 0),
    Rgb::new(205, 0, 0),
    Rgb::new(0, 205, 0),
    Rgb::new(205, 205, 0),
    Rgb::new(0, 0, 238),
    Rgb::new(205, 0, 205),
    Rgb::new(0, 205, 205),
    Rgb::new(229, 229, 229),
    Rgb::new(127, 127, 127),
    Rgb::new(255, 0, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(92, 92, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(0, 255, 255),
    Rgb::new(255, 255, 255),
];

const CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// RGB value of an entry in the xterm 256-color table.
#[must_use]
pub fn xterm_rgb(idx: u8) -> Rgb {
    match idx {
        0..=15 => ANSI16_RGB[idx as usize],
        16..=231 => {
            let i = idx - 16;
            Rgb::new(
                CUBE_LEVELS[(i / 36) as usize],
                CUBE_LEVELS[((i / 6) % 6) as usize],
                CUBE_LEVELS[(i % 6) as usize],
            )
        }
        232..=255 => {
            let level = 8 + 10 * (idx - 232);
            Rgb::new(level, level, level)
        }
    }
}

/// Reduce a 256-color index to the nearest of the 16 base colors.
///
/// Indices below 16 map to themselves. Ties go to the lower index.
#[must_use]
pub fn ansi16_index(idx: u8) -> u8 {
    if idx < 16 {
        return idx;
    }
    let target = xterm_rgb(idx);
    let mut best = 0u8;
    let mut best_dist = u32::MAX;
    for (i, rgb) in ANSI16_RGB.iter().enumerate() {
        let dist = rgb.distance_sq(target);
        if dist < best_dist {
            best = i as u8;
            best_dist = dist;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette() -> Palette {
        Palette::new()
            .with_index("white", 15)
            .with_index("blue", 4)
            .with_index("background", 0)
    }

    #[test]
    fn indexed_color_uses_its_index() {
        assert_eq!(ColorValue::Indexed(42).index(), 42);
    }

    #[test]
    fn true_color_uses_fallback_index() {
        let color = ColorValue::TrueColor {
            rgb: Rgb::new(10, 20, 30),
            fallback: 234,
        };
        assert_eq!(color.index(), 234);
    }

    #[test]
    fn require_known_color() {
        assert_eq!(palette().require("blue"), Ok(ColorValue::Indexed(4)));
    }

    #[test]
    fn require_unknown_color_fails() {
        assert_eq!(
            palette().require("mauve"),
            Err(StyleError::UnknownColorName("mauve".into()))
        );
    }

    #[test]
    fn unknown_color_falls_back_to_background() {
        assert_eq!(
            palette().resolve_or_background("mauve"),
            Ok(ColorValue::Indexed(0))
        );
    }

    #[tracing_test::traced_test]
    #[test]
    fn background_fallback_is_logged() {
        let _ = palette().resolve_or_background("mauve");
        assert!(logs_contain("using background"));
    }

    #[test]
    fn unknown_color_without_background_fails() {
        let palette = Palette::new().with_index("white", 15);
        assert_eq!(
            palette.resolve_or_background("mauve"),
            Err(StyleError::UnknownColorName("mauve".into()))
        );
    }

    #[test]
    fn palette_from_iter() {
        let palette: Palette = [("a", 1u8), ("b", 2u8)].into_iter().collect();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get("b"), Some(ColorValue::Indexed(2)));
    }

    #[test]
    fn xterm_table_corners() {
        assert_eq!(xterm_rgb(16), Rgb::new(0, 0, 0));
        assert_eq!(xterm_rgb(196), Rgb::new(255, 0, 0));
        assert_eq!(xterm_rgb(231), Rgb::new(255, 255, 255));
        assert_eq!(xterm_rgb(232), Rgb::new(8, 8, 8));
        assert_eq!(xterm_rgb(255), Rgb::new(238, 238, 238));
    }

    #[test]
    fn ansi16_reduction() {
        assert_eq!(ansi16_index(3), 3);
        assert_eq!(ansi16_index(196), 9);
        assert_eq!(ansi16_index(16), 0);
        assert_eq!(ansi16_index(231), 15);
        assert_eq!(ansi16_index(21), 4);
    }

    #[test]
    fn default_profile_is_256() {
        assert_eq!(ColorProfile::default(), ColorProfile::Ansi256);
    }
}
