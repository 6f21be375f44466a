#![forbid(unsafe_code)]

//! Named style entries.

use std::borrow::Cow;
use std::collections::HashMap;

use crate::color::BACKGROUND;
use crate::error::StyleError;

/// How to paint one segment group: color names plus attribute names.
///
/// Colors are palette names, not concrete values; they are resolved at
/// render time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleEntry {
    pub fg: String,
    pub bg: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub attrs: Vec<String>,
}

impl StyleEntry {
    pub fn new(fg: impl Into<String>, bg: impl Into<String>) -> Self {
        Self {
            fg: fg.into(),
            bg: bg.into(),
            attrs: Vec::new(),
        }
    }

    /// Append an attribute name (`bold`, `italic`, `underline`).
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>) -> Self {
        self.attrs.push(name.into());
        self
    }

    /// Entry painting both fg and bg with the `background` color.
    ///
    /// Stands in for the `background` group when a sheet does not define it.
    pub fn background() -> Self {
        Self::new(BACKGROUND, BACKGROUND)
    }
}

/// Group name to [`StyleEntry`] mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct StyleSheet {
    entries: HashMap<String, StyleEntry>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry, builder style.
    #[must_use]
    pub fn with(mut self, group: impl Into<String>, entry: StyleEntry) -> Self {
        self.insert(group, entry);
        self
    }

    pub fn insert(&mut self, group: impl Into<String>, entry: StyleEntry) {
        self.entries.insert(group.into(), entry);
    }

    #[must_use]
    pub fn get(&self, group: &str) -> Option<&StyleEntry> {
        self.entries.get(group)
    }

    /// Look a group up, failing when it has no entry.
    pub fn require(&self, group: &str) -> Result<&StyleEntry, StyleError> {
        self.get(group).ok_or_else(|| {
            tracing::debug!(group, "style group missing from style sheet");
            StyleError::UnknownStyleGroup(group.to_owned())
        })
    }

    /// Look a group up, substituting the `background` group when it is absent.
    ///
    /// An empty group name always takes the substitute. A sheet without a
    /// `background` entry yields [`StyleEntry::background`], so the colors
    /// still resolve through the palette's own `background` color.
    #[must_use]
    pub fn get_or_background(&self, group: &str) -> Cow<'_, StyleEntry> {
        let found = if group.is_empty() {
            None
        } else {
            self.get(group)
        };
        match found.or_else(|| self.get(BACKGROUND)) {
            Some(entry) => Cow::Borrowed(entry),
            None => Cow::Owned(StyleEntry::background()),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
