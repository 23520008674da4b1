//! GeometryCache - cached item frames and content bounds
//!
//! Holds the ordered frame sequence of the tab row. Rebuilt wholesale on structural
//! invalidation, mutated in place by self-sizing.
//!
//! # Complexity
//!
//! - `rebuild`: O(n)
//! - `frame_at` / `width_at` / `left_offset_before_index`: O(1)
//! - `set_width`: O(n - index) (re-accumulates origins after the changed entry)
//! - `set_widths_with`: O(n)

use super::frame::{ContentBounds, ItemFrame};
use super::layout_config::LayoutConfig;
use super::types::{Generation, ItemIndex};

/// Ordered, contiguous frame sequence plus derived content bounds.
///
/// # Invariants
/// - `frames[i].index == i`
/// - `frames[0].origin_x == 0`
/// - `frames[i].origin_x == frames[i - 1].origin_x + frames[i - 1].width`
/// - `content_bounds.width` is the left-to-right sum of all widths
#[derive(Debug, Clone, Default)]
pub struct GeometryCache {
    /// Frames sorted ascending by origin_x.
    frames: Vec<ItemFrame>,
    /// Total extent of the row.
    content_bounds: ContentBounds,
    /// Last self-sizing proposal reconciled per entry, cleared whenever the entry's
    /// width changes for any other reason.
    reported: Vec<Option<f64>>,
    /// Bumped on every rebuild.
    generation: Generation,
}

impl GeometryCache {
    /// Creates an empty cache.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tabstrip::view_state::geometry_cache::GeometryCache;
    /// let cache = GeometryCache::new();
    /// assert!(cache.is_empty());
    /// assert_eq!(cache.total_width(), 0.0);
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every frame with `item_count` uniform frames of `base_width`.
    ///
    /// All self-sizing adjustments are discarded. A degenerate config or a
    /// non-positive base width rebuilds to an empty sequence.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tabstrip::view_state::geometry_cache::GeometryCache;
    /// # use tabstrip::view_state::layout_config::LayoutConfig;
    /// # use tabstrip::view_state::types::Size;
    /// let mut cache = GeometryCache::new();
    /// let config = LayoutConfig::new(4, Size::new(400.0, 60.0));
    /// let frames = cache.rebuild(&config, 100.0);
    /// let origins: Vec<f64> = frames.iter().map(|f| f.origin_x).collect();
    /// assert_eq!(origins, vec![0.0, 100.0, 200.0, 300.0]);
    /// ```
    pub fn rebuild(&mut self, config: &LayoutConfig, base_width: f64) -> &[ItemFrame] {
        self.generation = self.generation.next();
        self.frames.clear();
        self.reported.clear();

        if config.validate().is_err() || base_width.is_nan() || base_width <= 0.0 {
            self.content_bounds = ContentBounds::ZERO;
            return &self.frames;
        }

        let height = config.container_size.height;
        self.frames.reserve(config.item_count);
        let mut origin_x = 0.0;
        for idx in 0..config.item_count {
            self.frames
                .push(ItemFrame::new(ItemIndex::new(idx), origin_x, base_width, height));
            origin_x += base_width;
        }
        self.content_bounds = ContentBounds {
            width: origin_x,
            height,
        };
        self.reported.resize(config.item_count, None);

        &self.frames
    }

    /// Frame at `index`, or `None` if out of range.
    pub fn frame_at(&self, index: ItemIndex) -> Option<ItemFrame> {
        self.frames.get(index.get()).copied()
    }

    /// Width at `index`, or `0.0` if out of range.
    pub fn width_at(&self, index: ItemIndex) -> f64 {
        self.frames.get(index.get()).map_or(0.0, |f| f.width)
    }

    /// Sum of the widths of all frames strictly before `index`.
    ///
    /// `0.0` for index 0; the full content width for any index past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// # use tabstrip::view_state::geometry_cache::GeometryCache;
    /// # use tabstrip::view_state::layout_config::LayoutConfig;
    /// # use tabstrip::view_state::types::{ItemIndex, Size};
    /// let mut cache = GeometryCache::new();
    /// cache.rebuild(&LayoutConfig::new(3, Size::new(300.0, 60.0)), 100.0);
    /// assert_eq!(cache.left_offset_before_index(ItemIndex::new(0)), 0.0);
    /// assert_eq!(cache.left_offset_before_index(ItemIndex::new(2)), 200.0);
    /// assert_eq!(cache.left_offset_before_index(ItemIndex::new(7)), 300.0);
    /// ```
    pub fn left_offset_before_index(&self, index: ItemIndex) -> f64 {
        match self.frames.get(index.get()) {
            Some(frame) => frame.origin_x,
            None => self.content_bounds.width,
        }
    }

    /// Sets the width of one entry and shifts every frame after it.
    ///
    /// Returns `false` (and changes nothing) if `index` is out of range.
    pub fn set_width(&mut self, index: ItemIndex, width: f64) -> bool {
        let idx = index.get();
        let Some(frame) = self.frames.get_mut(idx) else {
            return false;
        };
        frame.width = width;
        self.reported[idx] = None;
        self.reaccumulate_from(idx);
        true
    }

    /// Last proposal recorded for `index` since its width last changed.
    pub fn reported_width(&self, index: ItemIndex) -> Option<f64> {
        self.reported.get(index.get()).copied().flatten()
    }

    /// Remember that `proposed` was reconciled for `index`.
    ///
    /// Ignored if `index` is out of range.
    pub fn record_reported_width(&mut self, index: ItemIndex, proposed: f64) {
        if let Some(slot) = self.reported.get_mut(index.get()) {
            *slot = Some(proposed);
        }
    }

    /// Rewrites every width with `f(current_width)` and re-accumulates all origins.
    pub fn set_widths_with<F>(&mut self, mut f: F)
    where
        F: FnMut(f64) -> f64,
    {
        for frame in &mut self.frames {
            frame.width = f(frame.width);
        }
        self.reported.iter_mut().for_each(|slot| *slot = None);
        self.reaccumulate_from(0);
    }

    /// Recomputes origin_x from `from_index` onward, left to right, and refreshes bounds.
    fn reaccumulate_from(&mut self, from_index: usize) {
        if from_index >= self.frames.len() {
            return;
        }

        let mut origin_x = if from_index == 0 {
            0.0
        } else {
            self.frames[from_index - 1].max_x()
        };
        for frame in &mut self.frames[from_index..] {
            frame.origin_x = origin_x;
            origin_x += frame.width;
        }
        self.content_bounds.width = origin_x;
    }

    /// All frames, ascending by index.
    pub fn frames(&self) -> &[ItemFrame] {
        &self.frames
    }

    /// Total content bounds.
    pub fn content_bounds(&self) -> ContentBounds {
        self.content_bounds
    }

    /// Sum of all widths.
    pub fn total_width(&self) -> f64 {
        self.content_bounds.width
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if the cache holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Generation of the current frame sequence.
    pub fn generation(&self) -> Generation {
        self.generation
    }
}
