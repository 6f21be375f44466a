#![forbid(unsafe_code)]

//! Text attributes.

use bitflags::bitflags;

use crate::error::StyleError;

bitflags! {
    /// Terminal text attributes a style entry may name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Attrs: u8 {
        const BOLD = 1 << 0;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
    }
}

impl Attrs {
    /// Map a single attribute name. Names are matched exactly.
    pub fn parse_name(name: &str) -> Result<Self, StyleError> {
        match name {
            "bold" => Ok(Self::BOLD),
            "italic" => Ok(Self::ITALIC),
            "underline" => Ok(Self::UNDERLINE),
            other => Err(StyleError::UnknownAttribute(other.to_owned())),
        }
    }

    /// Map a list of attribute names, failing on the first unknown one.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Result<Self, StyleError> {
        names.iter().try_fold(Self::empty(), |acc, name| {
            Ok(acc | Self::parse_name(name.as_ref())?)
        })
    }

    /// SGR parameters for the set attributes.
    ///
    /// Always bold, italic, underline, whatever order the names were given in.
    pub fn sgr_codes(self) -> impl Iterator<Item = u8> {
        [(Self::BOLD, 1), (Self::ITALIC, 3), (Self::UNDERLINE, 4)]
            .into_iter()
            .filter(move |(flag, _)| self.contains(*flag))
            .map(|(_, code)| code)
    }
}
