use serde::{
    Deserialize,
    Serialize,
};

use crate::locale::{
    LocaleId,
    join_locales,
    split_locales,
};

/// One group of locales handled by a single CI job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Batch {
    /// 1-based, sequential.
    pub id: usize,
    /// Comma-joined identifiers in their original spelling.
    pub locales: String,
    pub name: String,
}

impl Batch {
    #[must_use]
    pub fn new(id: usize, locales: &[LocaleId]) -> Self {
        Self { id, locales: join_locales(locales), name: format!("batch-{id}") }
    }

    /// Number of locales in this batch.
    #[must_use]
    pub fn len(&self) -> usize {
        split_locales(&self.locales).count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Batches plus the parallelism bound handed to the CI layer.
///
/// `max_parallel` is metadata only. Nothing here runs batches concurrently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchPlan {
    pub max_parallel: usize,
    pub batches: Vec<Batch>,
}
