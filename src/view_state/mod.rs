//! View-state layer - Item geometry, self-sizing, and tab bar state
//!
//! This module implements the layout side of the tab bar: item width policy,
//! the cached frame sequence, visible range queries, and reconciliation of
//! content-driven item widths.
//!
//! # Module Structure
//!
//! - `types`: Core newtypes (ItemIndex, Generation, Size, Rect)
//! - `frame`: ItemFrame and ContentBounds
//! - `layout_config`: LayoutConfig - inputs to a layout pass
//! - `width_policy`: Uniform item width before self-sizing
//! - `geometry_cache`: GeometryCache - contiguous frames with a generation counter
//! - `range_query`: O(log n + k) visible frame lookup
//! - `reconciler`: Self-sizing decisions against the cache
//! - `engine`: LayoutEngine - inbound API for the host container
//! - `item_sizing`: Preferred width of an item's content
//! - `tab_bar`: TabBar - selection, indicator, and scroll offset
//! - `builder`: TabBarBuilder - fluent construction

pub mod builder;
pub mod engine;
pub mod frame;
pub mod geometry_cache;
pub mod item_sizing;
pub mod layout_config;
pub mod range_query;
pub mod reconciler;
pub mod tab_bar;
pub mod types;
pub mod width_policy;

pub use builder::TabBarBuilder;
pub use engine::{LayoutEngine, SizeProposal};
pub use frame::{ContentBounds, ItemFrame};
pub use layout_config::LayoutConfig;
pub use reconciler::Decision;
pub use tab_bar::{IndicatorGeometry, ScrollStyle, TabBar, TabSelection};
pub use types::{Generation, ItemIndex, Rect, Size};
