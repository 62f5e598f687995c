//! Priority tiers controlling the order in which locales are batched.

use std::collections::HashMap;
use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

use crate::locale::LocaleId;

/// Named priority group. Declaration order is processing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Critical,
    Important,
    Standard,
}

impl Tier {
    /// All tiers, highest priority first.
    pub const ALL: [Self; 3] = [Self::Critical, Self::Important, Self::Standard];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::Important => "important",
            Self::Standard => "standard",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A locale listed in two tiers (or twice in the same tier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TierConflict {
    pub locale: LocaleId,
    pub first: Tier,
    pub second: Tier,
}

/// Locale sets per priority tier.
///
/// Built once at startup (from settings or [`PriorityTiers::default`]) and passed by
/// reference to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityTiers {
    #[serde(default)]
    pub critical: Vec<LocaleId>,
    #[serde(default)]
    pub important: Vec<LocaleId>,
    #[serde(default)]
    pub standard: Vec<LocaleId>,
}

impl PriorityTiers {
    /// Tiers with no locales at all.
    #[must_use]
    pub const fn empty() -> Self {
        Self { critical: Vec::new(), important: Vec::new(), standard: Vec::new() }
    }

    #[must_use]
    pub fn locales(&self, tier: Tier) -> &[LocaleId] {
        match tier {
            Tier::Critical => &self.critical,
            Tier::Important => &self.important,
            Tier::Standard => &self.standard,
        }
    }

    /// Iterates `(tier, locale)` pairs in processing order.
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &LocaleId)> {
        Tier::ALL
            .into_iter()
            .flat_map(move |tier| self.locales(tier).iter().map(move |locale| (tier, locale)))
    }

    /// Locales in processing order: critical, then important, then standard.
    #[must_use]
    pub fn ordered(&self) -> Vec<LocaleId> {
        self.iter().map(|(_, locale)| locale.clone()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        Tier::ALL.into_iter().map(|tier| self.locales(tier).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every locale that shows up more than once across the tiers.
    #[must_use]
    pub fn conflicts(&self) -> Vec<TierConflict> {
        let mut seen: HashMap<&LocaleId, Tier> = HashMap::with_capacity(self.len());
        let mut conflicts = Vec::new();

        for (tier, locale) in self.iter() {
            if let Some(&first) = seen.get(locale) {
                conflicts.push(TierConflict { locale: locale.clone(), first, second: tier });
            } else {
                seen.insert(locale, tier);
            }
        }

        conflicts
    }

    /// # Errors
    /// Returns every conflict when the tiers are not pairwise disjoint.
    pub fn validate(&self) -> Result<(), Vec<TierConflict>> {
        let conflicts = self.conflicts();
        if conflicts.is_empty() { Ok(()) } else { Err(conflicts) }
    }
}

impl Default for PriorityTiers {
    fn default() -> Self {
        let to_locales =
            |ids: &[&str]| -> Vec<LocaleId> { ids.iter().copied().map(LocaleId::from).collect() };
        Self {
            critical: to_locales(&["de", "es", "pt_BR", "ru"]),
            important: to_locales(&["fr", "it", "cs", "zh-Hans"]),
            standard: to_locales(&["af_ZA", "pcm", "tr", "zh-Hant"]),
        }
    }
}
