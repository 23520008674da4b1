//! Layout engine: the inbound API the host container talks to.
//!
//! The engine exclusively owns the geometry cache. Hosts push configuration and
//! content-size reports in, and pull frames, content size and visible ranges out.
//! It never calls back into the host.

use super::frame::{ContentBounds, ItemFrame};
use super::geometry_cache::GeometryCache;
use super::layout_config::LayoutConfig;
use super::range_query::visible_frames;
use super::reconciler::{reconcile, Decision};
use super::types::{Generation, ItemIndex, Rect, Size};
use super::width_policy::compute_item_width;
use crate::model::LayoutError;
use tracing::debug;

/// Content-size report for one item, stamped with the generation it was measured against.
///
/// Created by [`LayoutEngine::size_proposal`]. If the cache is rebuilt before the proposal
/// is applied, it is rejected as stale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeProposal {
    /// Item the size was measured for.
    pub index: ItemIndex,
    /// Generation of the frame sequence at measurement time.
    pub generation: Generation,
    /// Preferred size reported by the item's content.
    pub size: Size,
}

/// Item layout engine for a single-row tab bar.
///
/// # Layout Computation
/// A config change rebuilds every frame at the policy width. Identical configs are
/// ignored, so self-sizing state survives repeated layout passes.
///
/// # Visible Range
/// `query_visible()` binary-searches the cached frames, O(log n + k).
///
/// # Self-Sizing
/// `notify_content_size_changed()` runs the reconciler against one entry and
/// shifts the frames after it.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    /// Cached frames and content bounds.
    cache: GeometryCache,
    /// Config used for the last rebuild. `None` until the first layout.
    last_config: Option<LayoutConfig>,
}

impl LayoutEngine {
    /// Create an engine with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `config` differs from the one the cache was built with.
    pub fn needs_rebuild(&self, config: &LayoutConfig) -> bool {
        self.last_config.as_ref() != Some(config)
    }

    /// Supply the config for the next layout pass.
    ///
    /// Rebuilds the cache (discarding self-sizing) if anything changed.
    /// Returns `true` if a rebuild happened.
    pub fn set_layout_config(&mut self, config: LayoutConfig) -> bool {
        if !self.needs_rebuild(&config) {
            return false;
        }

        let base_width = compute_item_width(&config);
        self.cache.rebuild(&config, base_width);
        self.last_config = Some(config);

        match config.validate() {
            Ok(()) => debug!(
                item_count = config.item_count,
                base_width,
                content_width = self.cache.total_width(),
                generation = self.cache.generation().get(),
                "rebuilt geometry cache"
            ),
            Err(err) => debug!(%err, "rebuilt empty geometry cache"),
        }
        true
    }

    /// Whether a bounds change to `new_size` requires a rebuild.
    ///
    /// Only a change in container size counts; scrolling moves the origin, not the size.
    pub fn should_invalidate_for_bounds(&self, new_size: Size) -> bool {
        match &self.last_config {
            Some(config) => config.container_size != new_size,
            None => !new_size.is_degenerate(),
        }
    }

    /// Report the preferred size of an item's content.
    ///
    /// Only the width participates. Out-of-range indices are rejected without touching
    /// the cache.
    ///
    /// # Errors
    /// - `LayoutError::InvalidIndex` for an index outside the current row
    /// - `LayoutError::DegenerateConfig` before the first non-empty layout
    pub fn notify_content_size_changed(
        &mut self,
        index: ItemIndex,
        proposed: Size,
    ) -> Result<Decision, LayoutError> {
        let config = self.last_config.unwrap_or_default();
        reconcile(&mut self.cache, &config, index, proposed.width).inspect_err(|err| {
            debug!(%err, "dropped content size report");
        })
    }

    /// Stamp a content-size report with the current generation.
    pub fn size_proposal(&self, index: ItemIndex, size: Size) -> SizeProposal {
        SizeProposal {
            index,
            generation: self.cache.generation(),
            size,
        }
    }

    /// Apply a previously stamped content-size report.
    ///
    /// # Errors
    /// - `LayoutError::StaleSelfSizing` if the cache was rebuilt since the proposal was made
    /// - anything `notify_content_size_changed` returns
    pub fn apply_size_proposal(&mut self, proposal: SizeProposal) -> Result<Decision, LayoutError> {
        let current = self.cache.generation();
        if proposal.generation != current {
            let err = LayoutError::StaleSelfSizing {
                index: proposal.index,
                proposal: proposal.generation,
                current,
            };
            debug!(%err, "dropped content size report");
            return Err(err);
        }
        self.notify_content_size_changed(proposal.index, proposal.size)
    }

    /// Frames overlapping `rect` horizontally, ascending by index.
    pub fn query_visible(&self, rect: &Rect) -> Vec<ItemFrame> {
        visible_frames(self.cache.frames(), rect)
    }

    /// Frame of the item at `index`, if it exists.
    pub fn frame_for_index(&self, index: ItemIndex) -> Option<ItemFrame> {
        self.cache.frame_at(index)
    }

    /// Width of the item at `index`, `0.0` if it does not exist.
    pub fn width_for_index(&self, index: ItemIndex) -> f64 {
        self.cache.width_at(index)
    }

    /// Total scrollable content size.
    pub fn total_content_size(&self) -> ContentBounds {
        self.cache.content_bounds()
    }

    /// Sum of widths of all items before `index`.
    ///
    /// Used to position the selection indicator.
    pub fn offset_before_index(&self, index: ItemIndex) -> f64 {
        self.cache.left_offset_before_index(index)
    }

    /// Uniform width the current config assigns before self-sizing.
    pub fn policy_width(&self) -> f64 {
        self.last_config.as_ref().map_or(0.0, compute_item_width)
    }

    /// All cached frames.
    pub fn frames(&self) -> &[ItemFrame] {
        self.cache.frames()
    }

    /// Generation of the current frame sequence.
    pub fn generation(&self) -> Generation {
        self.cache.generation()
    }

    /// Config of the last rebuild, if any.
    pub fn config(&self) -> Option<&LayoutConfig> {
        self.last_config.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine_with(config: LayoutConfig) -> LayoutEngine {
        let mut engine = LayoutEngine::new();
        engine.set_layout_config(config);
        engine
    }

    fn scrolling(item_count: usize) -> LayoutConfig {
        LayoutConfig::new(item_count, Size::new(375.0, 60.0)).scrollable(true, Some(3.0))
    }

    #[test]
    fn new_engine_is_empty() {
        let engine = LayoutEngine::new();
        assert!(engine.frames().is_empty());
        assert_eq!(engine.total_content_size(), ContentBounds::ZERO);
        assert_eq!(engine.policy_width(), 0.0);
        assert_eq!(engine.config(), None);
    }

    #[test]
    fn set_layout_config_rebuilds_on_first_call() {
        let mut engine = LayoutEngine::new();
        assert!(engine.set_layout_config(scrolling(9)));
        assert_eq!(engine.frames().len(), 9);
        assert_eq!(engine.total_content_size().width, 1125.0);
    }

    #[test]
    fn identical_config_keeps_self_sizing() {
        let mut engine = engine_with(scrolling(9));
        engine
            .notify_content_size_changed(ItemIndex::new(0), Size::new(200.0, 60.0))
            .unwrap();

        assert!(!engine.set_layout_config(scrolling(9)));
        assert_eq!(engine.width_for_index(ItemIndex::new(0)), 200.0);
    }

    #[test]
    fn changed_item_count_discards_self_sizing() {
        let mut engine = engine_with(scrolling(9));
        engine
            .notify_content_size_changed(ItemIndex::new(0), Size::new(200.0, 60.0))
            .unwrap();

        assert!(engine.set_layout_config(scrolling(10)));
        assert_eq!(engine.width_for_index(ItemIndex::new(0)), 125.0);
    }

    #[test]
    fn paging_change_rebuilds() {
        let mut engine = engine_with(scrolling(9));
        let generation = engine.generation();
        let mut paged = scrolling(9);
        paged.paging_enabled = false;

        assert!(engine.set_layout_config(paged));
        assert!(engine.generation() > generation);
    }

    #[test]
    fn bounds_change_requires_invalidation_only_for_new_size() {
        let engine = engine_with(scrolling(9));
        assert!(!engine.should_invalidate_for_bounds(Size::new(375.0, 60.0)));
        assert!(engine.should_invalidate_for_bounds(Size::new(414.0, 60.0)));
    }

    #[test]
    fn bounds_change_before_layout_ignores_zero_size() {
        let engine = LayoutEngine::new();
        assert!(!engine.should_invalidate_for_bounds(Size::ZERO));
        assert!(engine.should_invalidate_for_bounds(Size::new(375.0, 60.0)));
    }

    #[test]
    fn content_size_report_before_layout_is_degenerate() {
        let mut engine = LayoutEngine::new();
        let err = engine
            .notify_content_size_changed(ItemIndex::new(0), Size::new(80.0, 60.0))
            .unwrap_err();
        assert!(err.is_transient());
    }

    #[test]
    fn stale_proposal_is_dropped() {
        let mut engine = engine_with(scrolling(9));
        let proposal = engine.size_proposal(ItemIndex::new(8), Size::new(300.0, 60.0));

        engine.set_layout_config(scrolling(4));

        let err = engine.apply_size_proposal(proposal).unwrap_err();
        assert!(matches!(err, LayoutError::StaleSelfSizing { .. }));
        assert_eq!(engine.frames().len(), 4);
    }

    #[test]
    fn current_proposal_is_applied() {
        let mut engine = engine_with(scrolling(9));
        let proposal = engine.size_proposal(ItemIndex::new(1), Size::new(300.0, 60.0));

        let decision = engine.apply_size_proposal(proposal).unwrap();

        assert_eq!(decision, Decision::Accepted(300.0));
        assert_eq!(engine.offset_before_index(ItemIndex::new(2)), 425.0);
        assert_eq!(engine.total_content_size().width, 1300.0);
    }

    #[test]
    fn self_sizing_does_not_bump_generation() {
        let mut engine = engine_with(scrolling(9));
        let generation = engine.generation();
        engine
            .notify_content_size_changed(ItemIndex::new(1), Size::new(300.0, 60.0))
            .unwrap();
        assert_eq!(engine.generation(), generation);
    }

    #[test]
    fn query_visible_uses_current_geometry() {
        let mut engine = engine_with(scrolling(9));
        engine
            .notify_content_size_changed(ItemIndex::new(0), Size::new(400.0, 60.0))
            .unwrap();

        let visible = engine.query_visible(&Rect::horizontal(0.0, 375.0, 60.0));

        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].index, ItemIndex::new(0));
    }

    #[test]
    fn frame_for_invalid_index_is_none() {
        let engine = engine_with(scrolling(3));
        assert_eq!(engine.frame_for_index(ItemIndex::new(3)), None);
        assert_eq!(engine.width_for_index(ItemIndex::new(3)), 0.0);
    }
}
