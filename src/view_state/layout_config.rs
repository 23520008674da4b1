//! Layout parameters for invalidation tracking.

use super::types::Size;
use crate::model::LayoutError;

/// Parameters that determine the geometry of the tab row.
///
/// Supplied by the host on each invalidation. If the current config differs from the
/// one the cache was last built with, the cache is rebuilt from scratch.
///
/// # Equality Semantics
/// Two configs are equal if they would produce identical uniform layouts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Number of items in the row.
    pub item_count: usize,
    /// Size of the scrolling container.
    pub container_size: Size,
    /// Whether the row scrolls horizontally.
    pub scroll_enabled: bool,
    /// Whether scrolling snaps to page boundaries. Only meaningful when scrolling.
    pub paging_enabled: bool,
    /// Number of items visible at once when scrolling. `None` shows all items.
    pub items_per_page: Option<f64>,
    /// Upper bound on any single item's width, enforced during self-sizing.
    pub max_item_width: Option<f64>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            item_count: 0,
            container_size: Size::ZERO,
            scroll_enabled: false,
            paging_enabled: false,
            items_per_page: None,
            max_item_width: None,
        }
    }
}

impl LayoutConfig {
    /// Create a non-scrolling config for `item_count` items in `container_size`.
    pub fn new(item_count: usize, container_size: Size) -> Self {
        Self {
            item_count,
            container_size,
            ..Self::default()
        }
    }

    /// Enable scrolling with the given paging mode and items per page.
    pub fn scrollable(mut self, paging_enabled: bool, items_per_page: Option<f64>) -> Self {
        self.scroll_enabled = true;
        self.paging_enabled = paging_enabled;
        self.items_per_page = items_per_page;
        self
    }

    /// Bound every item's self-sized width.
    pub fn with_max_item_width(mut self, max_item_width: f64) -> Self {
        self.max_item_width = Some(max_item_width);
        self
    }

    /// Items per page actually used by the width policy.
    ///
    /// Only honored while scrolling. Non-positive and non-finite values are ignored.
    pub fn effective_items_per_page(&self) -> Option<f64> {
        if !self.scroll_enabled {
            return None;
        }
        self.items_per_page.filter(|p| p.is_finite() && *p > 0.0)
    }

    /// Max item width actually enforced. Non-positive and non-finite values mean unbounded.
    pub fn effective_max_item_width(&self) -> Option<f64> {
        self.max_item_width.filter(|w| w.is_finite() && *w > 0.0)
    }

    /// Paging only applies to a scrolling row.
    pub fn effective_paging(&self) -> bool {
        self.scroll_enabled && self.paging_enabled
    }

    /// Check that the config can produce any geometry at all.
    ///
    /// # Errors
    /// Returns `LayoutError::DegenerateConfig` for zero items or a degenerate container.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.item_count == 0 || self.container_size.is_degenerate() {
            return Err(LayoutError::DegenerateConfig {
                item_count: self.item_count,
                width: self.container_size.width,
                height: self.container_size.height,
            });
        }
        Ok(())
    }
}
