//! tabstrip
//!
//! Layout engine and state model for a horizontally scrollable tab bar.
//!
//! The library computes item widths (fixed division or paged scrolling), caches
//! item frames, reconciles content-driven self-sizing, answers visible-range
//! queries, and tracks selection and the indicator under it. Drawing is left to
//! the host.

pub mod config;
pub mod logging;
pub mod model;
pub mod report;
pub mod view_state;

#[cfg(test)]
mod tests;
