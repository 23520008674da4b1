//! Per-item geometry

use super::types::{ItemIndex, Rect};
use serde::Serialize;

/// Geometry of a single item in the tab row.
///
/// Owned by the geometry cache; hosts receive copies.
///
/// # Invariants
/// - `index` equals the frame's position in the sequence
/// - `origin_x[i] = origin_x[i - 1] + width[i - 1]` (maintained by GeometryCache)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ItemFrame {
    /// Position of the item in the row.
    pub index: ItemIndex,
    /// Left edge in content coordinates.
    pub origin_x: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent (the container height).
    pub height: f64,
}

impl ItemFrame {
    /// Create a new frame.
    pub fn new(index: ItemIndex, origin_x: f64, width: f64, height: f64) -> Self {
        Self {
            index,
            origin_x,
            width,
            height,
        }
    }

    /// Right edge. Equal to the next frame's `origin_x`.
    pub fn max_x(&self) -> f64 {
        self.origin_x + self.width
    }

    /// Strict horizontal overlap with `rect`. Touching edges do not intersect.
    pub fn intersects_horizontally(&self, rect: &Rect) -> bool {
        self.origin_x < rect.max_x() && self.max_x() > rect.min_x()
    }
}

/// Total scrollable extent of the row.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ContentBounds {
    /// Sum of all frame widths, accumulated left to right.
    pub width: f64,
    /// Container height.
    pub height: f64,
}

impl ContentBounds {
    /// Bounds of an empty row.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };
}
