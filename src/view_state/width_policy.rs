//! Uniform item width before any self-sizing.

use super::layout_config::LayoutConfig;

/// Calculate the policy width shared by every item before self-sizing.
///
/// The geometry cache, the reconciler and item sizing all call this.
///
/// - Not scrolling: `ceil(container_width / item_count)`; the row never scrolls.
/// - Scrolling: `ceil(container_width / items_per_page)`, unless that many items
///   would not fill the container, in which case the non-scrolling width is used.
///
/// Rounds up, leaving no sub-point gap at the trailing edge.
/// `max_item_width` is not applied here.
///
/// Returns `0.0` for zero items or a degenerate container.
pub fn compute_item_width(config: &LayoutConfig) -> f64 {
    if config.validate().is_err() {
        return 0.0;
    }

    let container_width = config.container_size.width;
    let item_count = config.item_count as f64;
    let fill_width = (container_width / item_count).ceil();

    if !config.scroll_enabled {
        return fill_width;
    }

    let divisor = config.effective_items_per_page().unwrap_or(item_count);
    let candidate = container_width / divisor;

    // Few items: fill the container instead of leaving a gap.
    if candidate * item_count < container_width {
        fill_width
    } else {
        candidate.ceil()
    }
}
