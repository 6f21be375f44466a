#![forbid(unsafe_code)]

//! Render pass errors.

use segline_style::StyleError;
use thiserror::Error;

use crate::side::Side;

/// Anything that aborts a render pass.
///
/// Configuration errors surface before any output is written.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The style sheet or palette is broken.
    #[error(transparent)]
    Style(#[from] StyleError),

    /// Layout was asked to render nothing.
    #[error("cannot render an empty segment list on the {side} side")]
    EmptySegmentList { side: Side },

    /// The output sink refused the write.
    #[error("failed to write rendered segments: {0}")]
    Io(#[from] std::io::Error),
}

impl RenderError {
    /// The underlying configuration error, if that is what this is.
    pub fn as_style(&self) -> Option<&StyleError> {
        match self {
            Self::Style(err) => Some(err),
            _ => None,
        }
    }
}
