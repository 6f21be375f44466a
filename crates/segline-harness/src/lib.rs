#![forbid(unsafe_code)]

//! Test harness for segline.
//!
//! - [`LineModel`] decodes presenter output into styled cells.
//! - [`unwrap_prompt`] strips bash/zsh zero-width markers first, for
//!   prompts rendered with shell escaping.

pub mod line_model;
pub mod prompt;

pub use line_model::{LineModel, ModelCell, ModelStyle};
pub use prompt::{Shell, markers_balanced, unwrap_prompt};
