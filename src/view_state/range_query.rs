//! Visible range calculation over the cached frame sequence
//!
//! Frames are sorted and contiguous, so one binary search finds any frame that
//! overlaps the query; the rest of the visible run is adjacent to it.
//! Total cost is O(log n + k) for k visible frames.

use super::frame::ItemFrame;
use super::types::Rect;
use tracing::trace;

/// Binary search for any frame that overlaps `rect` horizontally.
///
/// # Returns
///
/// - `Some(position)` of one intersecting frame
/// - `None` if the slice is empty or `rect` lies entirely outside the content
pub fn find_intersecting(frames: &[ItemFrame], rect: &Rect) -> Option<usize> {
    let mut left = 0;
    let mut right = frames.len();

    while left < right {
        let mid = left + (right - left) / 2;
        let frame = &frames[mid];

        if frame.intersects_horizontally(rect) {
            return Some(mid);
        }

        if frame.max_x() <= rect.min_x() {
            left = mid + 1;
        } else {
            right = mid;
        }
    }

    None
}

/// Frames overlapping `rect` horizontally, ascending by index.
///
/// Contains every frame with `origin_x < rect.max_x && max_x > rect.min_x` and
/// nothing else. An empty slice or an out-of-content rect yields an empty vector.
///
/// # Examples
///
/// ```
/// # use tabstrip::view_state::frame::ItemFrame;
/// # use tabstrip::view_state::range_query::visible_frames;
/// # use tabstrip::view_state::types::{ItemIndex, Rect};
/// let frames: Vec<ItemFrame> = (0..5)
///     .map(|i| ItemFrame::new(ItemIndex::new(i), i as f64 * 100.0, 100.0, 60.0))
///     .collect();
/// let visible = visible_frames(&frames, &Rect::horizontal(150.0, 100.0, 60.0));
/// let indices: Vec<usize> = visible.iter().map(|f| f.index.get()).collect();
/// assert_eq!(indices, vec![1, 2]);
/// ```
pub fn visible_frames(frames: &[ItemFrame], rect: &Rect) -> Vec<ItemFrame> {
    let Some(first_match) = find_intersecting(frames, rect) else {
        trace!(min_x = rect.min_x(), max_x = rect.max_x(), "no frame in query rect");
        return Vec::new();
    };

    let leading = frames[..first_match]
        .iter()
        .rev()
        .take_while(|frame| frame.max_x() > rect.min_x())
        .count();
    let start = first_match - leading;

    let end = first_match
        + frames[first_match..]
            .iter()
            .take_while(|frame| frame.origin_x < rect.max_x())
            .count();

    trace!(start, end, "visible frames");
    frames[start..end].to_vec()
}
