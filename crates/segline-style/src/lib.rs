#![forbid(unsafe_code)]

//! Style primitives for segline.
//!
//! A [`StyleSheet`] maps segment group names to [`StyleEntry`] values that
//! name their colors; a [`Palette`] maps those names to concrete
//! [`ColorValue`]s. [`resolve`] and [`resolve_or_background`] combine the two
//! into a [`ResolvedStyle`].
//!
//! # Example
//! ```
//! use segline_style::{Attrs, ColorValue, Palette, StyleEntry, StyleSheet, resolve};
//!
//! let sheet = StyleSheet::new().with("time", StyleEntry::new("white", "blue").attr("bold"));
//! let palette = Palette::new()
//!     .with_index("white", 15)
//!     .with_index("blue", 4)
//!     .with_index("background", 0);
//!
//! let style = resolve(&sheet, &palette, "time").unwrap().unwrap();
//! assert_eq!(style.bg, ColorValue::Indexed(4));
//! assert_eq!(style.attrs, Attrs::BOLD);
//! ```

pub mod attr;
pub mod color;
pub mod error;
pub mod resolve;
pub mod sheet;

pub use attr::Attrs;
pub use color::{BACKGROUND, ColorProfile, ColorValue, Palette, Rgb, ansi16_index, xterm_rgb};
pub use error::StyleError;
pub use resolve::{ResolvedStyle, resolve, resolve_entry, resolve_or_background};
pub use sheet::{StyleEntry, StyleSheet};
