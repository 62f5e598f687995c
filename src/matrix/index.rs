//! Separator-insensitive lookup over a resource mapping.

use std::collections::{
    HashMap,
    HashSet,
};

use super::{
    MatrixError,
    ResourceMapping,
};
use crate::locale::{
    LocaleId,
    LookupKey,
};

/// Entry stored per canonical key.
#[derive(Debug, Clone)]
struct IndexEntry {
    /// Key as spelled in the mapping, kept for error messages.
    original: LocaleId,
    resources: Vec<String>,
}

/// Resource mapping indexed by [`LookupKey`], built once per run.
///
/// `pt_BR`, `pt-BR` and friends all resolve to the same entry.
#[derive(Debug, Clone, Default)]
pub struct ResourceIndex {
    entries: HashMap<LookupKey, IndexEntry>,
}

impl ResourceIndex {
    /// Keys that collapse to the same lookup key (`pt_BR` and `pt-BR`) are merged when
    /// they name the same set of resources; the entry keeps the order of the first one.
    ///
    /// # Errors
    /// Returns [`MatrixError::AmbiguousLocaleKey`] when such keys name different resources.
    pub fn new(mapping: &ResourceMapping) -> Result<Self, MatrixError> {
        let mut entries: HashMap<LookupKey, IndexEntry> = HashMap::with_capacity(mapping.len());

        for (locale, names) in mapping {
            let key = locale.lookup_key();
            if let Some(existing) = entries.get(&key) {
                let known: HashSet<&str> = existing.resources.iter().map(String::as_str).collect();
                let incoming: HashSet<&str> = names.iter().collect();
                if known != incoming {
                    return Err(MatrixError::AmbiguousLocaleKey {
                        first: existing.original.to_string(),
                        second: locale.to_string(),
                    });
                }
                tracing::debug!(
                    first = %existing.original,
                    second = %locale,
                    "Merged identical mapping keys"
                );
                continue;
            }
            entries.insert(
                key,
                IndexEntry {
                    original: locale.clone(),
                    resources: names.iter().map(str::to_string).collect(),
                },
            );
        }

        tracing::debug!(locales = entries.len(), "Built resource index");
        Ok(Self { entries })
    }

    /// Resources for `locale`, whatever separator it is spelled with.
    #[must_use]
    pub fn lookup(&self, locale: &str) -> Option<&[String]> {
        self.entries.get(&LookupKey::from_raw(locale)).map(|entry| entry.resources.as_slice())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
