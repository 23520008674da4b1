//! Content-driven preferred item widths

use crate::config::ArrangedDirection;
use crate::model::TabItem;
use unicode_width::UnicodeWidthStr;

/// Parameters for measuring an item's content.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemMetrics {
    /// Horizontal padding around the content (half on each side).
    pub spacing: f64,
    /// Side length of the square icon slot.
    pub icon_side: f64,
    /// Width of one display column of label text.
    pub glyph_width: f64,
}

impl Default for ItemMetrics {
    fn default() -> Self {
        Self {
            spacing: 16.0,
            icon_side: 32.0,
            glyph_width: 10.0,
        }
    }
}

impl ItemMetrics {
    /// Width of `title` in layout points.
    ///
    /// Wide (CJK) characters count as two columns.
    pub fn label_width(&self, title: &str) -> f64 {
        title.width() as f64 * self.glyph_width
    }
}

/// Calculate the width an item's content asks for.
///
/// - Horizontal: `label + icon + spacing`
/// - Vertical: `max(label, icon) + spacing`
///
/// The content width is capped at `max_width` when set, and never reported below
/// `expected_width` (the policy width). An empty label has no intrinsic width and
/// reports `expected_width`.
///
/// # Examples
///
/// ```
/// # use tabstrip::config::ArrangedDirection;
/// # use tabstrip::model::TabItem;
/// # use tabstrip::view_state::item_sizing::{preferred_width, ItemMetrics};
/// let metrics = ItemMetrics::default();
/// let item = TabItem::new("Item2WithLongTitle");
/// // 18 columns * 10 + 16 spacing
/// let width = preferred_width(&item, &metrics, ArrangedDirection::Horizontal, 125.0, None);
/// assert_eq!(width, 196.0);
/// ```
pub fn preferred_width(
    item: &TabItem,
    metrics: &ItemMetrics,
    direction: ArrangedDirection,
    expected_width: f64,
    max_width: Option<f64>,
) -> f64 {
    let label = metrics.label_width(&item.title);
    if label == 0.0 {
        return expected_width;
    }

    let icon = if item.has_icon() {
        metrics.icon_side
    } else {
        0.0
    };
    let content = match direction {
        ArrangedDirection::Horizontal => label + icon + metrics.spacing,
        ArrangedDirection::Vertical => label.max(icon) + metrics.spacing,
    };
    let capped = max_width.map_or(content, |max| content.min(max));

    expected_width.max(capped)
}
