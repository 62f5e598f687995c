//! Partitioning of locales into batches.

use std::collections::HashSet;

use super::{
    Batch,
    BatchError,
    BatchPlan,
};
use crate::locale::LocaleId;
use crate::tiers::PriorityTiers;

/// Splits `locales` into consecutive batches of at most `batch_size` entries.
///
/// Input order is kept within and across batches, the last batch may be short, and
/// ids start at 1. `max_parallel` is only checked, never used to schedule anything.
///
/// # Errors
/// - `batch_size` or `max_parallel` is zero
/// - a locale is empty, contains `,` or is padded with whitespace
/// - a locale is listed twice
pub fn generate_batches(
    batch_size: usize,
    max_parallel: usize,
    locales: &[LocaleId],
) -> Result<Vec<Batch>, BatchError> {
    check_bounds(batch_size, max_parallel)?;

    for locale in locales {
        if let Some(reason) = locale.defect() {
            return Err(BatchError::InvalidLocale { locale: locale.to_string(), reason });
        }
    }

    let mut seen = HashSet::with_capacity(locales.len());
    if let Some(duplicate) = locales.iter().find(|locale| !seen.insert(*locale)) {
        return Err(BatchError::DuplicateLocale { locale: duplicate.to_string() });
    }

    let batches: Vec<Batch> = locales
        .chunks(batch_size)
        .enumerate()
        .map(|(index, chunk)| Batch::new(index + 1, chunk))
        .collect();

    for batch in &batches {
        tracing::debug!(id = batch.id, locales = %batch.locales, "Generated batch");
    }
    tracing::debug!(
        count = batches.len(),
        locale_count = locales.len(),
        batch_size,
        max_parallel,
        "Batch generation finished"
    );

    Ok(batches)
}

/// Batches the tiers in priority order: critical, important, standard.
///
/// # Errors
/// - `batch_size` or `max_parallel` is zero
/// - a locale appears in more than one tier
pub fn generate_tiered_batches(
    batch_size: usize,
    max_parallel: usize,
    tiers: &PriorityTiers,
) -> Result<Vec<Batch>, BatchError> {
    check_bounds(batch_size, max_parallel)?;

    if let Some(conflict) = tiers.conflicts().into_iter().next() {
        return Err(BatchError::TierConflict {
            locale: conflict.locale.to_string(),
            first: conflict.first,
            second: conflict.second,
        });
    }

    generate_batches(batch_size, max_parallel, &tiers.ordered())
}

/// Builds a [`BatchPlan`] from either a flat locale list or the priority tiers.
///
/// A flat list, when given, takes precedence over the tiers.
///
/// # Errors
/// Same as [`generate_batches`] and [`generate_tiered_batches`].
pub fn plan_batches(
    batch_size: usize,
    max_parallel: usize,
    locales: Option<&[LocaleId]>,
    tiers: &PriorityTiers,
) -> Result<BatchPlan, BatchError> {
    let batches = match locales {
        Some(locales) => generate_batches(batch_size, max_parallel, locales)?,
        None => generate_tiered_batches(batch_size, max_parallel, tiers)?,
    };

    Ok(BatchPlan { max_parallel, batches })
}

/// Rejects non-positive bounds.
const fn check_bounds(batch_size: usize, max_parallel: usize) -> Result<(), BatchError> {
    if batch_size == 0 {
        return Err(BatchError::InvalidBatchSize(batch_size));
    }
    if max_parallel == 0 {
        return Err(BatchError::InvalidMaxParallel(max_parallel));
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use proptest::prelude::*;
    use rstest::*;

    use super::*;
    use crate::test_utils::{
        locales,
        tiers,
    };
    use crate::tiers::Tier;

    #[rstest]
    fn preserves_separators_in_locale_string() {
        let batches = generate_batches(4, 2, &locales(&["pt_BR", "zh-Hans", "af_ZA"])).unwrap();

        assert_that!(batches, len(eq(1)));
        assert_that!(batches[0].locales, eq("pt_BR,zh-Hans,af_ZA"));
        assert_that!(batches[0].id, eq(1));
        assert_that!(batches[0].name, eq("batch-1"));
    }

    #[rstest]
    fn splits_into_consecutive_chunks() {
        let batches =
            generate_batches(2, 3, &locales(&["de", "es", "pt_BR", "ru", "fr"])).unwrap();

        assert_that!(
            batches,
            elements_are![
                field!(Batch.locales, eq("de,es")),
                field!(Batch.locales, eq("pt_BR,ru")),
                all![field!(Batch.locales, eq("fr")), field!(Batch.name, eq("batch-3"))],
            ]
        );
        assert_eq!(batches.iter().map(|batch| batch.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[rstest]
    fn exact_multiple_has_no_short_batch() {
        let batches = generate_batches(2, 1, &locales(&["de", "es", "fr", "it"])).unwrap();

        assert_that!(batches, len(eq(2)));
        assert_that!(batches[1].len(), eq(2));
    }

    #[rstest]
    fn empty_input_yields_no_batches() {
        let batches = generate_batches(4, 2, &[]).unwrap();

        assert_that!(batches, is_empty());
    }

    #[rstest]
    #[case(3)]
    #[case(4)]
    #[case(100)]
    fn large_batch_size_yields_single_batch(#[case] batch_size: usize) {
        let batches = generate_batches(batch_size, 2, &locales(&["de", "es", "fr"])).unwrap();

        assert_that!(batches, len(eq(1)));
        assert_that!(batches[0].locales, eq("de,es,fr"));
    }

    #[rstest]
    fn zero_batch_size_is_rejected() {
        let result = generate_batches(0, 2, &locales(&["de"]));

        assert_eq!(result, Err(BatchError::InvalidBatchSize(0)));
    }

    #[rstest]
    fn zero_max_parallel_is_rejected() {
        let result = generate_batches(4, 0, &locales(&["de"]));

        assert_eq!(result, Err(BatchError::InvalidMaxParallel(0)));
    }

    #[rstest]
    fn duplicate_in_flat_list_is_rejected() {
        let result = generate_batches(4, 2, &locales(&["de", "fr", "de"]));

        assert_eq!(result, Err(BatchError::DuplicateLocale { locale: "de".to_string() }));
    }

    #[rstest]
    #[case(vec!["", "de"], "", "is empty")]
    #[case(vec!["a,b"], "a,b", "contains ','")]
    #[case(vec!["fr", " de"], " de", "has leading or trailing whitespace")]
    fn unjoinable_locale_is_rejected(
        #[case] input: Vec<&str>,
        #[case] locale: &str,
        #[case] reason: &'static str,
    ) {
        let result = generate_batches(4, 2, &locales(&input));

        assert_eq!(result, Err(BatchError::InvalidLocale { locale: locale.to_string(), reason }));
    }

    #[rstest]
    fn unjoinable_tier_locale_is_rejected() {
        let tiers = tiers(&["de"], &[""], &[]);

        let result = generate_tiered_batches(2, 2, &tiers);

        assert!(matches!(result, Err(BatchError::InvalidLocale { .. })));
    }

    #[rstest]
    fn tiered_batches_put_critical_first() {
        let tiers = tiers(&["pt_BR", "de"], &["zh-Hans"], &["af_ZA", "cs", "tr"]);

        let batches = generate_tiered_batches(2, 2, &tiers).unwrap();

        assert_that!(
            batches,
            elements_are![
                field!(Batch.locales, eq("pt_BR,de")),
                field!(Batch.locales, eq("zh-Hans,af_ZA")),
                field!(Batch.locales, eq("cs,tr")),
            ]
        );
    }

    #[rstest]
    fn tier_conflict_is_rejected_before_batching() {
        let tiers = tiers(&["pt_BR"], &["de"], &["pt_BR"]);

        let result = generate_tiered_batches(2, 2, &tiers);

        assert_eq!(
            result,
            Err(BatchError::TierConflict {
                locale: "pt_BR".to_string(),
                first: Tier::Critical,
                second: Tier::Standard,
            })
        );
    }

    #[rstest]
    fn tiered_batches_check_bounds_first() {
        let tiers = tiers(&["pt_BR"], &[], &["pt_BR"]);

        let result = generate_tiered_batches(0, 2, &tiers);

        assert_eq!(result, Err(BatchError::InvalidBatchSize(0)));
    }

    #[rstest]
    fn plan_prefers_flat_list_over_tiers() {
        let tiers = tiers(&["de"], &[], &[]);
        let flat = locales(&["fr", "it"]);

        let plan = plan_batches(4, 3, Some(flat.as_slice()), &tiers).unwrap();

        assert_that!(plan.max_parallel, eq(3));
        assert_that!(plan.batches, elements_are![field!(Batch.locales, eq("fr,it"))]);
    }

    #[rstest]
    fn plan_falls_back_to_tiers() {
        let tiers = tiers(&["de"], &["fr"], &[]);

        let plan = plan_batches(4, 1, None, &tiers).unwrap();

        assert_that!(plan.batches, elements_are![field!(Batch.locales, eq("de,fr"))]);
    }

    /// Distinct locale-like identifiers mixing both separator styles.
    fn distinct_locales() -> impl Strategy<Value = Vec<LocaleId>> {
        prop::collection::hash_set("[a-z]{2}([_-][A-Z][a-z]{0,3})?", 0..40).prop_map(|set| {
            let mut ids: Vec<String> = set.into_iter().collect();
            ids.sort();
            ids.into_iter().map(LocaleId::from).collect()
        })
    }

    proptest! {
        #[test]
        fn every_locale_lands_in_exactly_one_batch(
            input in distinct_locales(),
            batch_size in 1usize..10,
        ) {
            let batches = generate_batches(batch_size, 2, &input).unwrap();

            let flattened: Vec<String> = batches
                .iter()
                .flat_map(|batch| batch.locales.split(',').map(str::to_string).collect::<Vec<_>>())
                .filter(|locale| !locale.is_empty())
                .collect();
            let expected: Vec<String> = input.iter().map(ToString::to_string).collect();
            prop_assert_eq!(flattened, expected);
        }

        #[test]
        fn only_the_last_batch_may_be_short(
            input in distinct_locales(),
            batch_size in 1usize..10,
        ) {
            let batches = generate_batches(batch_size, 2, &input).unwrap();

            for (index, batch) in batches.iter().enumerate() {
                prop_assert!(batch.len() <= batch_size);
                prop_assert_eq!(batch.id, index + 1);
                if index + 1 < batches.len() {
                    prop_assert_eq!(batch.len(), batch_size);
                }
            }
        }
    }
}
