#![forbid(unsafe_code)]

//! Which half of the display is being composed.

use std::fmt;

/// Screen side a segment list is rendered for.
///
/// The two sides mirror each other: the left side starts at the left margin
/// and flows rightwards, the right side starts at the right margin and flows
/// leftwards. Every mirrored decision goes through [`Side::select`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Pick `left` when rendering the left side, `right` otherwise.
    #[inline]
    pub fn select<T>(self, left: T, right: T) -> T {
        match self {
            Self::Left => left,
            Self::Right => right,
        }
    }

    /// The mirrored side.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.select("left", "right"))
    }
}
