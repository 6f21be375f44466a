#![forbid(unsafe_code)]

//! Configuration errors raised while resolving styles.

use thiserror::Error;

/// A broken style sheet or palette.
///
/// None of these are recoverable at render time: they mean whoever authored
/// the configuration referenced something that does not exist, and the render
/// pass that hit them must abort.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// A group name with no style sheet entry, where no fallback applies.
    #[error("unknown style group `{0}`")]
    UnknownStyleGroup(String),

    /// A color name missing from the palette, and `background` missing too.
    #[error("unknown color name `{0}` (and no `background` color to fall back to)")]
    UnknownColorName(String),

    /// An attribute name outside the recognized set.
    #[error("unknown text attribute `{0}` (expected bold, italic or underline)")]
    UnknownAttribute(String),
}
