#![forbid(unsafe_code)]

//! Turning a group name into concrete colors and attributes.
//!
//! There are two lookups:
//!
//! - [`resolve`] fails with [`StyleError::UnknownStyleGroup`] when the group
//!   has no entry.
//! - [`resolve_or_background`] substitutes the `background` group instead.
//!
//! Both resolve color names with [`Palette::resolve_or_background`], so an
//! unknown *color* falls back to the palette's `background` color even where
//! an unknown *group* is an error.

use crate::attr::Attrs;
use crate::color::{ColorValue, Palette};
use crate::error::StyleError;
use crate::sheet::{StyleEntry, StyleSheet};

/// A fully resolved (fg, bg, attributes) triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResolvedStyle {
    pub fg: ColorValue,
    pub bg: ColorValue,
    pub attrs: Attrs,
}

/// Resolve a style entry's color and attribute names.
pub fn resolve_entry(palette: &Palette, entry: &StyleEntry) -> Result<ResolvedStyle, StyleError> {
    Ok(ResolvedStyle {
        fg: palette.resolve_or_background(&entry.fg)?,
        bg: palette.resolve_or_background(&entry.bg)?,
        attrs: Attrs::from_names(entry.attrs.as_slice())?,
    })
}

/// Resolve a group, failing if the sheet has no entry for it.
///
/// An empty key means "no styling" and resolves to `None`.
pub fn resolve(
    sheet: &StyleSheet,
    palette: &Palette,
    key: &str,
) -> Result<Option<ResolvedStyle>, StyleError> {
    if key.is_empty() {
        return Ok(None);
    }
    let entry = sheet.require(key)?;
    resolve_entry(palette, entry).map(Some)
}

/// Resolve a group, using the `background` group when it has no entry.
pub fn resolve_or_background(
    sheet: &StyleSheet,
    palette: &Palette,
    key: &str,
) -> Result<ResolvedStyle, StyleError> {
    let entry = sheet.get_or_background(key);
    resolve_entry(palette, &entry)
}
