use thiserror::Error;

use crate::tiers::Tier;

/// Errors rejected before any batch is produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BatchError {
    #[error("Batch size must be a positive integer, got {0}")]
    InvalidBatchSize(usize),

    #[error("Max parallel must be a positive integer, got {0}")]
    InvalidMaxParallel(usize),

    /// Identifier that would not survive the comma-joined batch list unchanged.
    #[error("Locale '{locale}' {reason}")]
    InvalidLocale { locale: String, reason: &'static str },

    /// Same identifier twice in a flat locale list.
    #[error("Locale '{locale}' is listed more than once")]
    DuplicateLocale { locale: String },

    /// Same identifier in two priority tiers.
    #[error("Locale '{locale}' appears in both the '{first}' and '{second}' tiers")]
    TierConflict { locale: String, first: Tier, second: Tier },
}
