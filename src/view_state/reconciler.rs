//! Self-sizing reconciliation of content-driven item widths
//!
//! Items report the width their content prefers. The reconciler decides whether the
//! cached geometry must change and how, then edits the cache in place.

use super::geometry_cache::GeometryCache;
use super::layout_config::LayoutConfig;
use super::types::ItemIndex;
use super::width_policy::compute_item_width;
use crate::model::LayoutError;
use tracing::debug;

/// Outcome of reconciling one self-sizing proposal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Decision {
    /// Nothing changed; no invalidation needed.
    Unchanged,
    /// The entry exceeded the max item width and was clamped to it.
    Clamped(f64),
    /// The proposal (or a row-wide grow to the policy width) was applied.
    /// Carries the resulting width of the queried entry.
    Accepted(f64),
    /// The proposal fit within the policy width; the entry went back to it.
    RevertedToPolicy(f64),
}

impl Decision {
    /// True if any cached width changed and the host should re-query geometry.
    pub fn invalidates(&self) -> bool {
        !matches!(self, Decision::Unchanged)
    }

    /// Width of the queried entry after reconciliation, if it changed.
    pub fn width(&self) -> Option<f64> {
        match self {
            Decision::Unchanged => None,
            Decision::Clamped(w) | Decision::Accepted(w) | Decision::RevertedToPolicy(w) => {
                Some(*w)
            }
        }
    }
}

/// Reconcile a proposed content width for the item at `index`.
///
/// The proposal is rounded up before comparison. Rules, first match wins:
///
/// 1. Proposal above the max width while the entry already sits at the max → `Unchanged`.
/// 2. Entry above the max width → clamp it → `Clamped`.
/// 3. Row narrower than the container → grow every entry to at least the policy width →
///    `Accepted`. The max width is not enforced here; rule 2 corrects any overshoot on the
///    next pass.
/// 4. Proposal equal to the cached width, or to the proposal already reconciled for
///    this entry since its width last changed → `Unchanged`.
/// 5. Proposal within the policy width → entry goes back to the policy width →
///    `RevertedToPolicy`.
/// 6. Otherwise the proposal is applied to that entry alone → `Accepted`.
///
/// # Errors
/// - `LayoutError::DegenerateConfig` if the cache is empty
/// - `LayoutError::InvalidIndex` if `index` is outside the cache
/// - `LayoutError::NonFiniteProposal` if `proposed_width` is NaN or infinite
///
/// The cache is untouched on error.
pub fn reconcile(
    cache: &mut GeometryCache,
    config: &LayoutConfig,
    index: ItemIndex,
    proposed_width: f64,
) -> Result<Decision, LayoutError> {
    if cache.is_empty() {
        config.validate()?;
    }
    let Some(frame) = cache.frame_at(index) else {
        return Err(LayoutError::InvalidIndex {
            index,
            item_count: cache.len(),
        });
    };
    if !proposed_width.is_finite() {
        return Err(LayoutError::NonFiniteProposal {
            index,
            width: proposed_width,
        });
    }

    let proposed = proposed_width.ceil();
    let current = frame.width;
    let policy_width = compute_item_width(config);

    let decision = if let Some(max_width) = config
        .effective_max_item_width()
        .filter(|&max| proposed > max && current == max)
    {
        debug!(?index, proposed, max_width, "proposal above max, entry already clamped");
        Decision::Unchanged
    } else if let Some(max_width) = config
        .effective_max_item_width()
        .filter(|&max| current > max)
    {
        cache.set_width(index, max_width);
        Decision::Clamped(max_width)
    } else if cache.total_width() < config.container_size.width {
        cache.set_widths_with(|w| w.ceil().max(policy_width));
        Decision::Accepted(cache.width_at(index))
    } else if proposed == current || cache.reported_width(index) == Some(proposed) {
        Decision::Unchanged
    } else if proposed <= policy_width {
        cache.set_width(index, policy_width);
        cache.record_reported_width(index, proposed);
        Decision::RevertedToPolicy(policy_width)
    } else {
        cache.set_width(index, proposed);
        cache.record_reported_width(index, proposed);
        Decision::Accepted(proposed)
    };

    debug!(
        ?index,
        proposed,
        current,
        policy_width,
        ?decision,
        total_width = cache.total_width(),
        "reconciled self-sizing proposal"
    );

    Ok(decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::view_state::types::Size;
    use proptest::prelude::*;

    fn built(config: &LayoutConfig) -> GeometryCache {
        let mut cache = GeometryCache::new();
        cache.rebuild(config, compute_item_width(config));
        cache
    }

    fn four_in_400() -> LayoutConfig {
        LayoutConfig::new(4, Size::new(400.0, 60.0))
    }

    fn assert_contiguous(cache: &GeometryCache) {
        let mut expected = 0.0;
        for frame in cache.frames() {
            assert_eq!(frame.origin_x, expected);
            expected += frame.width;
        }
        assert_eq!(cache.total_width(), expected);
    }

    #[test]
    fn empty_cache_reports_degenerate_config() {
        let config = LayoutConfig::default();
        let mut cache = GeometryCache::new();
        let err = reconcile(&mut cache, &config, ItemIndex::new(0), 50.0).unwrap_err();
        assert!(matches!(err, LayoutError::DegenerateConfig { .. }));
    }

    #[test]
    fn out_of_range_index_reports_invalid_index() {
        let config = four_in_400();
        let mut cache = built(&config);
        let err = reconcile(&mut cache, &config, ItemIndex::new(4), 50.0).unwrap_err();
        assert_eq!(
            err,
            LayoutError::InvalidIndex {
                index: ItemIndex::new(4),
                item_count: 4
            }
        );
        assert_eq!(cache.total_width(), 400.0);
    }

    #[test]
    fn non_finite_proposal_leaves_cache_untouched() {
        let config = four_in_400();
        let mut cache = built(&config);
        let before = cache.frames().to_vec();

        for width in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = reconcile(&mut cache, &config, ItemIndex::new(1), width).unwrap_err();
            assert!(matches!(err, LayoutError::NonFiniteProposal { .. }), "{err:?}");
        }

        assert_eq!(cache.frames(), before.as_slice());
        assert_eq!(cache.total_width(), 400.0);
        assert_eq!(cache.reported_width(ItemIndex::new(1)), None);
    }

    #[test]
    fn proposal_within_policy_reverts_to_policy() {
        // Scenario D: policy 100, proposal 50, row full
        let config = four_in_400();
        let mut cache = built(&config);
        let decision = reconcile(&mut cache, &config, ItemIndex::new(2), 50.0).unwrap();
        assert_eq!(decision, Decision::RevertedToPolicy(100.0));
        assert_eq!(cache.width_at(ItemIndex::new(2)), 100.0);
        assert_eq!(cache.total_width(), 400.0);
    }

    #[test]
    fn repeated_proposal_within_policy_is_unchanged() {
        let config = four_in_400();
        let mut cache = built(&config);
        reconcile(&mut cache, &config, ItemIndex::new(2), 50.0).unwrap();
        let decision = reconcile(&mut cache, &config, ItemIndex::new(2), 50.0).unwrap();
        assert_eq!(decision, Decision::Unchanged);
    }

    #[test]
    fn proposal_within_policy_reverts_grown_entry() {
        let config = four_in_400();
        let mut cache = built(&config);
        reconcile(&mut cache, &config, ItemIndex::new(2), 180.0).unwrap();

        let decision = reconcile(&mut cache, &config, ItemIndex::new(2), 50.0).unwrap();

        assert_eq!(decision, Decision::RevertedToPolicy(100.0));
        assert_eq!(cache.width_at(ItemIndex::new(2)), 100.0);
        assert_eq!(cache.total_width(), 400.0);
        assert_contiguous(&cache);
    }

    #[test]
    fn proposal_above_policy_is_accepted_for_that_entry_only() {
        let config = four_in_400();
        let mut cache = built(&config);

        let decision = reconcile(&mut cache, &config, ItemIndex::new(1), 149.2).unwrap();

        assert_eq!(decision, Decision::Accepted(150.0));
        let widths: Vec<f64> = cache.frames().iter().map(|f| f.width).collect();
        assert_eq!(widths, vec![100.0, 150.0, 100.0, 100.0]);
        assert_contiguous(&cache);
    }

    #[test]
    fn same_proposal_twice_is_unchanged() {
        let config = four_in_400();
        let mut cache = built(&config);
        reconcile(&mut cache, &config, ItemIndex::new(1), 150.0).unwrap();
        let decision = reconcile(&mut cache, &config, ItemIndex::new(1), 150.0).unwrap();
        assert_eq!(decision, Decision::Unchanged);
    }

    #[test]
    fn proposal_rounding_up_to_cached_width_is_unchanged() {
        let config = four_in_400();
        let mut cache = built(&config);
        reconcile(&mut cache, &config, ItemIndex::new(1), 150.0).unwrap();
        let decision = reconcile(&mut cache, &config, ItemIndex::new(1), 149.01).unwrap();
        assert_eq!(decision, Decision::Unchanged);
    }

    #[test]
    fn over_max_proposal_is_accepted_then_clamped_then_stable() {
        // Scenario E
        let config = four_in_400().with_max_item_width(150.0);
        let mut cache = built(&config);
        let index = ItemIndex::new(2);

        let first = reconcile(&mut cache, &config, index, 180.0).unwrap();
        assert_eq!(first, Decision::Accepted(180.0));

        let second = reconcile(&mut cache, &config, index, 180.0).unwrap();
        assert_eq!(second, Decision::Clamped(150.0));
        assert_eq!(cache.width_at(index), 150.0);

        let third = reconcile(&mut cache, &config, index, 180.0).unwrap();
        assert_eq!(third, Decision::Unchanged);
        assert_contiguous(&cache);
    }

    #[test]
    fn clamp_applies_regardless_of_proposal() {
        let config = four_in_400().with_max_item_width(150.0);
        let mut cache = built(&config);
        cache.set_width(ItemIndex::new(0), 220.0);

        let decision = reconcile(&mut cache, &config, ItemIndex::new(0), 90.0).unwrap();

        assert_eq!(decision, Decision::Clamped(150.0));
        assert_eq!(cache.total_width(), 450.0);
    }

    #[test]
    fn underfilled_row_grows_every_entry_to_policy() {
        let config = four_in_400();
        let mut cache = built(&config);
        cache.set_widths_with(|_| 40.0);
        cache.set_width(ItemIndex::new(3), 120.0);

        let decision = reconcile(&mut cache, &config, ItemIndex::new(0), 60.0).unwrap();

        assert_eq!(decision, Decision::Accepted(100.0));
        let widths: Vec<f64> = cache.frames().iter().map(|f| f.width).collect();
        assert_eq!(widths, vec![100.0, 100.0, 100.0, 120.0]);
        assert_contiguous(&cache);
    }

    #[test]
    fn underfilled_row_grow_ignores_max_width_until_next_pass() {
        let config = four_in_400().with_max_item_width(80.0);
        let mut cache = built(&config);
        cache.set_widths_with(|_| 40.0);

        let grow = reconcile(&mut cache, &config, ItemIndex::new(1), 60.0).unwrap();
        assert_eq!(grow, Decision::Accepted(100.0));
        assert_eq!(cache.width_at(ItemIndex::new(1)), 100.0);

        let clamp = reconcile(&mut cache, &config, ItemIndex::new(1), 60.0).unwrap();
        assert_eq!(clamp, Decision::Clamped(80.0));
    }

    #[test]
    fn decision_helpers() {
        assert!(!Decision::Unchanged.invalidates());
        assert_eq!(Decision::Unchanged.width(), None);
        assert!(Decision::Clamped(150.0).invalidates());
        assert_eq!(Decision::RevertedToPolicy(100.0).width(), Some(100.0));
    }

    proptest! {
        /// Reconciling the same proposal twice is a no-op the second time (no max width set).
        #[test]
        fn prop_reconcile_is_idempotent(
            item_count in 1usize..=20,
            container_width in 50.0f64..=1000.0,
            scroll in any::<bool>(),
            items_per_page in 1.0f64..=6.0,
            index in 0usize..20,
            proposed in 0.0f64..=600.0,
        ) {
            let mut config = LayoutConfig::new(item_count, Size::new(container_width, 60.0));
            if scroll {
                config = config.scrollable(false, Some(items_per_page));
            }
            let mut cache = built(&config);
            prop_assume!(index < item_count);
            let index = ItemIndex::new(index);

            reconcile(&mut cache, &config, index, proposed).unwrap();
            let second = reconcile(&mut cache, &config, index, proposed).unwrap();
            prop_assert_eq!(second, Decision::Unchanged);
        }

        /// Every reconciliation leaves a contiguous frame sequence behind.
        #[test]
        fn prop_reconcile_keeps_frames_contiguous(
            item_count in 1usize..=20,
            max_width in prop::option::of(60.0f64..=300.0),
            proposals in prop::collection::vec((0usize..20, 0.0f64..=600.0), 1..30),
        ) {
            let mut config = LayoutConfig::new(item_count, Size::new(375.0, 60.0))
                .scrollable(true, Some(3.0));
            config.max_item_width = max_width;
            let mut cache = built(&config);

            for (idx, proposed) in proposals {
                let _ = reconcile(&mut cache, &config, ItemIndex::new(idx), proposed);
                let mut expected = 0.0;
                for frame in cache.frames() {
                    prop_assert_eq!(frame.origin_x, expected);
                    expected += frame.width;
                }
                prop_assert_eq!(cache.total_width(), expected);
                prop_assert_eq!(cache.len(), item_count);
            }
        }
    }
}
