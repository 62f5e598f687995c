//! Locale identifiers and their separator-insensitive lookup keys.

use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

/// Separator used by the canonical lookup form.
const CANONICAL_SEPARATOR: &str = "_";

/// Separators treated as equivalent when looking a locale up.
const SEPARATORS: [char; 2] = ['_', '-'];

/// Joins identifiers inside a batch's locale list.
const LIST_SEPARATOR: char = ',';

/// An opaque locale identifier such as `pt_BR` or `zh-Hans`.
///
/// The identifier is kept exactly as written. Use [`LocaleId::lookup_key`] when the
/// identifier has to be matched against data that may spell the separator differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocaleId(String);

impl LocaleId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn lookup_key(&self) -> LookupKey {
        LookupKey::from_raw(&self.0)
    }

    /// Why this identifier cannot survive a round trip through a comma-joined list.
    ///
    /// `None` for usable identifiers.
    #[must_use]
    pub fn defect(&self) -> Option<&'static str> {
        if self.0.is_empty() {
            Some("is empty")
        } else if self.0.contains(LIST_SEPARATOR) {
            Some("contains ','")
        } else if self.0.trim() != self.0 {
            Some("has leading or trailing whitespace")
        } else {
            None
        }
    }
}

impl fmt::Display for LocaleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LocaleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for LocaleId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for LocaleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonical, separator-insensitive form of a locale identifier.
///
/// Only ever used as an index key, never displayed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LookupKey(String);

impl LookupKey {
    #[must_use]
    pub fn from_raw(id: &str) -> Self {
        Self(id.replace(SEPARATORS, CANONICAL_SEPARATOR))
    }
}

/// Joins identifiers with `,` without touching their internal separators.
#[must_use]
pub fn join_locales(locales: &[LocaleId]) -> String {
    locales.iter().map(LocaleId::as_str).collect::<Vec<_>>().join(",")
}

/// Splits a comma-joined locale list back into identifiers, segment by segment.
///
/// Segments are returned verbatim. Only the empty list yields nothing.
pub fn split_locales(joined: &str) -> impl Iterator<Item = &str> {
    (!joined.is_empty()).then(|| joined.split(LIST_SEPARATOR)).into_iter().flatten()
}
