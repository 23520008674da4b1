//! View-state for the tab bar around the layout engine.
//!
//! Owns the items, the current selection, and the horizontal scroll offset, and derives
//! the selection indicator geometry from the engine's cached frames.

use super::engine::LayoutEngine;
use super::frame::ItemFrame;
use super::item_sizing::preferred_width;
use super::layout_config::LayoutConfig;
use super::types::{ItemIndex, Rect, Size};
use crate::config::TabBarConfig;
use crate::model::TabItem;
use serde::Serialize;
use tracing::debug;

/// Upper bound on self-sizing rounds per layout pass.
///
/// A row settles in at most three rounds: grow, accept, clamp.
const MAX_SELF_SIZING_ROUNDS: usize = 4;

/// Selection change reported to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSelection {
    /// Previously selected tab (`None` on the first selection).
    pub from: Option<ItemIndex>,
    /// Newly selected tab.
    pub to: ItemIndex,
}

/// Position of the selection indicator in container coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorGeometry {
    /// Left edge, already adjusted for the scroll offset.
    pub left: f64,
    /// Width of the selected item.
    pub width: f64,
    /// Line thickness.
    pub height: f64,
}

/// Scroll mode of the bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollStyle {
    /// Whether the row scrolls.
    pub scrollable: bool,
    /// Whether scrolling snaps to pages.
    pub paging: bool,
    /// Items visible per page while scrolling.
    pub items_in_page: f64,
    /// Upper bound on self-sized item widths.
    pub max_width: Option<f64>,
}

impl Default for ScrollStyle {
    fn default() -> Self {
        Self {
            scrollable: false,
            paging: false,
            items_in_page: 3.0,
            max_width: None,
        }
    }
}

/// Tab bar state: items, selection, scroll offset and item geometry.
///
/// # Layout
/// `resize()` and `set_items()` push a fresh `LayoutConfig` into the engine, which
/// rebuilds its cache when the config changed. `self_size_visible()` then lets the
/// visible items grow to fit their content.
///
/// # Indicator
/// `indicator()` is derived on demand from the selected item's frame and the
/// scroll offset, so it always tracks the current geometry.
#[derive(Debug, Clone)]
pub struct TabBar {
    /// Items in display order.
    items: Vec<TabItem>,
    /// Geometry metrics.
    config: TabBarConfig,
    /// Item geometry.
    engine: LayoutEngine,
    /// Selected tab. `None` until the first selection.
    current_tab: Option<ItemIndex>,
    /// Whether taps may change the selection.
    clickable: bool,
    /// Scroll mode.
    scroll_style: ScrollStyle,
    /// Size of the visible container.
    container_size: Size,
    /// Horizontal scroll offset in content coordinates.
    content_offset_x: f64,
}

impl TabBar {
    /// Create a non-scrolling bar. Nothing is laid out until `resize()`.
    pub fn new(items: Vec<TabItem>, config: TabBarConfig) -> Self {
        Self {
            items,
            config,
            engine: LayoutEngine::new(),
            current_tab: None,
            clickable: true,
            scroll_style: ScrollStyle::default(),
            container_size: Size::ZERO,
            content_offset_x: 0.0,
        }
    }

    // === Configuration ===

    /// Items in display order.
    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    /// Replace all items. Drops the selection if it no longer exists.
    pub fn set_items(&mut self, items: Vec<TabItem>) {
        self.items = items;
        if self.current_tab.is_some_and(|tab| tab.get() >= self.items.len()) {
            self.current_tab = None;
        }
        self.layout();
        self.clamp_offset();
    }

    /// Geometry metrics.
    pub fn config(&self) -> &TabBarConfig {
        &self.config
    }

    /// Replace the geometry metrics.
    ///
    /// Item widths depend on them, so the next `self_size_visible()` re-measures.
    pub fn set_config(&mut self, config: TabBarConfig) {
        self.config = config;
    }

    /// Current scroll mode.
    pub fn scroll_style(&self) -> ScrollStyle {
        self.scroll_style
    }

    /// Switch scroll mode. Rebuilds the layout wholesale.
    pub fn set_scroll_style(&mut self, style: ScrollStyle) {
        self.scroll_style = style;
        if !style.scrollable {
            self.content_offset_x = 0.0;
        }
        self.layout();
        self.clamp_offset();
    }

    /// Items per page, only reported while the bar scrolls.
    pub fn items_in_page(&self) -> Option<f64> {
        self.scroll_style
            .scrollable
            .then_some(self.scroll_style.items_in_page)
    }

    /// Set items per page. Ignored unless the bar scrolls.
    pub fn set_items_in_page(&mut self, items_in_page: Option<f64>) {
        let Some(value) = items_in_page.filter(|_| self.scroll_style.scrollable) else {
            return;
        };
        self.scroll_style.items_in_page = value;
        self.layout();
        self.clamp_offset();
    }

    /// Whether selection by tapping is currently allowed.
    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    /// Allow or block selection by tapping (`tap_tab`).
    pub fn set_clickable(&mut self, clickable: bool) {
        self.clickable = clickable;
    }

    // === Layout ===

    /// Config the engine should lay out with right now.
    pub fn layout_config(&self) -> LayoutConfig {
        let style = self.scroll_style;
        let mut config = LayoutConfig::new(self.items.len(), self.container_size);
        if style.scrollable {
            config = config.scrollable(style.paging, Some(style.items_in_page));
        }
        config.max_item_width = style.max_width;
        config
    }

    /// Push the current config into the engine. Returns `true` if it rebuilt.
    pub fn layout(&mut self) -> bool {
        self.engine.set_layout_config(self.layout_config())
    }

    /// Handle a container size change.
    ///
    /// Returns `true` if the size actually changed and the geometry was rebuilt.
    /// The selection survives.
    pub fn resize(&mut self, size: Size) -> bool {
        if !self.engine.should_invalidate_for_bounds(size) {
            return false;
        }
        self.container_size = size;
        let rebuilt = self.layout();
        self.clamp_offset();
        debug!(
            width = size.width,
            height = size.height,
            selected = ?self.current_tab,
            "tab bar resized"
        );
        rebuilt
    }

    /// Let visible items grow (or shrink back) to fit their content.
    ///
    /// Runs rounds of measure + reconcile over the visible items until a round changes
    /// nothing. Returns the number of width changes applied.
    pub fn self_size_visible(&mut self) -> usize {
        let mut changes = 0;

        for round in 0..MAX_SELF_SIZING_ROUNDS {
            let mut round_changes = 0;
            for frame in self.visible_items() {
                let Some(item) = self.items.get(frame.index.get()) else {
                    continue;
                };
                let width = preferred_width(
                    item,
                    &self.config.metrics,
                    self.config.arranged_direction,
                    self.engine.policy_width(),
                    self.layout_config().effective_max_item_width(),
                );
                let proposal = self
                    .engine
                    .size_proposal(frame.index, Size::new(width, frame.height));
                if let Ok(decision) = self.engine.apply_size_proposal(proposal) {
                    if decision.invalidates() {
                        round_changes += 1;
                    }
                }
            }

            changes += round_changes;
            if round_changes == 0 {
                debug!(round, changes, "self-sizing settled");
                break;
            }
        }

        self.clamp_offset();
        changes
    }

    /// Item geometry engine.
    pub fn engine(&self) -> &LayoutEngine {
        &self.engine
    }

    /// Size of the visible container.
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Frames currently inside the container.
    pub fn visible_items(&self) -> Vec<ItemFrame> {
        self.engine.query_visible(&self.visible_rect())
    }

    /// Container rectangle in content coordinates.
    pub fn visible_rect(&self) -> Rect {
        Rect::horizontal(
            self.content_offset_x,
            self.container_size.width,
            self.container_size.height,
        )
    }

    // === Selection ===

    /// Selected tab, if any.
    pub fn current_tab(&self) -> Option<ItemIndex> {
        self.current_tab
    }

    /// Select the tab at `item` programmatically, whether or not the bar is clickable.
    ///
    /// Returns the selection change for the host to act on, or `None` if `item` does
    /// not exist.
    pub fn select_tab(&mut self, item: usize) -> Option<TabSelection> {
        if item >= self.items.len() {
            debug!(item, item_count = self.items.len(), "selection out of range");
            return None;
        }

        let selection = TabSelection {
            from: self.current_tab,
            to: ItemIndex::new(item),
        };
        self.current_tab = Some(selection.to);
        Some(selection)
    }

    /// Select the tab at `item` in response to a tap. Ignored when not clickable.
    pub fn tap_tab(&mut self, item: usize) -> Option<TabSelection> {
        if !self.clickable {
            debug!(item, "tab bar not clickable, tap ignored");
            return None;
        }
        self.select_tab(item)
    }

    /// Geometry of the selection indicator, if a laid-out tab is selected.
    pub fn indicator(&self) -> Option<IndicatorGeometry> {
        let index = self.current_tab?;
        let frame = self.engine.frame_for_index(index)?;
        Some(IndicatorGeometry {
            left: self.engine.offset_before_index(index) - self.content_offset_x,
            width: frame.width,
            height: self.config.line_height,
        })
    }

    // === Scrolling ===

    /// Horizontal scroll offset.
    pub fn content_offset_x(&self) -> f64 {
        self.content_offset_x
    }

    /// Largest valid scroll offset.
    pub fn max_content_offset(&self) -> f64 {
        (self.engine.total_content_size().width - self.container_size.width).max(0.0)
    }

    /// Move the scroll offset to `x`, clamped to the content. No-op unless scrollable
    /// or when `x` is NaN or infinite.
    pub fn set_content_offset(&mut self, x: f64) -> f64 {
        if !x.is_finite() {
            debug!(x, "non-finite scroll offset ignored");
            return self.content_offset_x;
        }
        if self.scroll_style.scrollable {
            self.content_offset_x = x;
            self.clamp_offset();
        }
        self.content_offset_x
    }

    /// Scroll by `dx`, clamped to the content. Returns the new offset.
    pub fn scroll_by(&mut self, dx: f64) -> f64 {
        self.set_content_offset(self.content_offset_x + dx)
    }

    /// End of a scroll gesture: snap to the nearest page when paging.
    pub fn settle_scroll(&mut self) -> f64 {
        if !self.layout_config().effective_paging() {
            return self.content_offset_x;
        }
        let page = self.container_size.width;
        if page > 0.0 {
            self.content_offset_x = (self.content_offset_x / page).round() * page;
            self.clamp_offset();
        }
        self.content_offset_x
    }

    fn clamp_offset(&mut self) {
        self.content_offset_x = self.content_offset_x.clamp(0.0, self.max_content_offset());
    }
}

#[cfg(test)]
#[path = "tab_bar_tests.rs"]
mod tests;
