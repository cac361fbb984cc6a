//! Tiered sampling planner.
//!
//! Consolidating several export categories of wildly different sizes into one
//! bounded prompt needs a per-category cap. The cap comes from fixed dataset
//! size bands; items are then taken first-N in input order, trading
//! representativeness for reproducibility. The tier thresholds (20/100/500)
//! are compatibility constants shared with stored historical manifests.

use std::collections::BTreeMap;

use crate::types::{CategorySample, SamplingManifest, StrategyTier};

/// Compute the sampling manifest for a set of category cardinalities.
///
/// Tiers:
/// - total == 0 → cap 100 (counting failed or data genuinely empty; treat
///   optimistically rather than starving the prompt)
/// - total <= 20 → cap max(10, total / categories)
/// - total <= 100 → cap 20
/// - total <= 500 → cap 50
/// - else → cap 100
///
/// Always produces a manifest; for every category `sampled <= available`.
#[must_use]
pub fn plan(category_counts: &BTreeMap<String, usize>) -> SamplingManifest {
    let total: usize = category_counts.values().sum();
    let num_categories = category_counts.len().max(1);

    let (cap, tier) = if total == 0 {
        (100, StrategyTier::Fallback)
    } else if total <= 20 {
        ((total / num_categories).max(10), StrategyTier::Small)
    } else if total <= 100 {
        (20, StrategyTier::Medium)
    } else if total <= 500 {
        (50, StrategyTier::Large)
    } else {
        (100, StrategyTier::Max)
    };

    let categories: BTreeMap<String, CategorySample> = category_counts
        .iter()
        .map(|(name, &available)| {
            (
                name.clone(),
                CategorySample {
                    available,
                    sampled: available.min(cap),
                },
            )
        })
        .collect();

    let total_sampled = categories.values().map(|c| c.sampled).sum();

    tracing::debug!(
        total_available = total,
        total_sampled,
        cap,
        tier = ?tier,
        "sampling plan computed"
    );

    SamplingManifest {
        categories,
        total_available: total,
        total_sampled,
        sample_per_category: cap,
        strategy_tier: tier,
    }
}

/// First-N slice of `items` under `cap`. Input order is preserved.
#[must_use]
pub fn take_sample<T>(items: &[T], cap: usize) -> &[T] {
    &items[..items.len().min(cap)]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(pairs: &[(&str, usize)]) -> BTreeMap<String, usize> {
        pairs.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect()
    }

    #[test]
    fn zero_total_uses_fallback_cap_100() {
        // Regression guard: a failed count must not starve the prompt.
        let manifest = plan(&counts(&[("saved_posts", 0), ("liked_posts", 0)]));
        assert_eq!(manifest.sample_per_category, 100);
        assert_eq!(manifest.strategy_tier, StrategyTier::Fallback);
        assert_eq!(manifest.total_sampled, 0);
    }

    #[test]
    fn empty_input_yields_fallback_manifest() {
        let manifest = plan(&BTreeMap::new());
        assert_eq!(manifest.sample_per_category, 100);
        assert_eq!(manifest.total_available, 0);
        assert!(manifest.categories.is_empty());
    }

    #[test]
    fn small_tier_gives_near_full_coverage() {
        let manifest = plan(&counts(&[("saved_posts", 8), ("comments", 6)]));
        assert_eq!(manifest.strategy_tier, StrategyTier::Small);
        // 14 / 2 = 7, bumped to the floor of 10.
        assert_eq!(manifest.sample_per_category, 10);
        assert_eq!(manifest.categories["saved_posts"].sampled, 8);
    }

    #[test]
    fn tier_boundary_at_20() {
        let at = plan(&counts(&[("a", 20)]));
        assert_eq!(at.strategy_tier, StrategyTier::Small);
        assert_eq!(at.sample_per_category, 20);

        let over = plan(&counts(&[("a", 21)]));
        assert_eq!(over.strategy_tier, StrategyTier::Medium);
        assert_eq!(over.sample_per_category, 20);
    }

    #[test]
    fn tier_boundary_at_100() {
        assert_eq!(plan(&counts(&[("a", 100)])).sample_per_category, 20);
        assert_eq!(plan(&counts(&[("a", 101)])).sample_per_category, 50);
    }

    #[test]
    fn tier_boundary_at_500() {
        let at = plan(&counts(&[("a", 500)]));
        assert_eq!(at.sample_per_category, 50);
        assert_eq!(at.strategy_tier, StrategyTier::Large);

        let over = plan(&counts(&[("a", 501)]));
        assert_eq!(over.sample_per_category, 100);
        assert_eq!(over.strategy_tier, StrategyTier::Max);
    }

    #[test]
    fn sampled_never_exceeds_available() {
        let manifest = plan(&counts(&[("a", 3), ("b", 77), ("c", 1000)]));
        for sample in manifest.categories.values() {
            assert!(sample.sampled <= sample.available);
            assert!(sample.sampled <= manifest.sample_per_category);
        }
        assert_eq!(
            manifest.total_sampled,
            manifest.categories.values().map(|c| c.sampled).sum::<usize>()
        );
    }

    #[test]
    fn large_multi_category_export() {
        // saved 150 + liked 200 + comments 180 = 530 total → cap 100 each.
        let manifest = plan(&counts(&[
            ("saved_posts", 150),
            ("liked_posts", 200),
            ("comments", 180),
        ]));
        assert_eq!(manifest.sample_per_category, 100);
        assert_eq!(manifest.total_available, 530);
        assert_eq!(manifest.total_sampled, 300);
        assert_eq!(manifest.categories["saved_posts"].sampled, 100);
        assert_eq!(manifest.categories["liked_posts"].sampled, 100);
        assert_eq!(manifest.categories["comments"].sampled, 100);
    }

    #[test]
    fn take_sample_caps_and_preserves_order() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(take_sample(&items, 3), &[1, 2, 3]);
        assert_eq!(take_sample(&items, 10), &items);
        assert!(take_sample(&items, 0).is_empty());
    }
}
