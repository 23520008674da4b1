//! Error types for tabstrip.
//!
//! This module defines the error taxonomy using `thiserror` for structured error handling.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error of the command-line front end
//!   - [`ConfigError`](crate::config::ConfigError) - Config file read/parse failures
//!   - [`LoggingError`](crate::logging::LoggingError) - Tracing subscriber setup failures
//!   - `serde_json::Error` - Report serialization failures
//! - [`LayoutError`] - Recoverable layout engine conditions
//!
//! # Error Recovery Strategy
//!
//! Layout errors are **never fatal**. The engine reports them to the host so it can log or
//! ignore them, and always leaves a valid (possibly empty) geometry behind. Only the binary's
//! setup failures (config, logging) abort the process.

use crate::view_state::types::{Generation, ItemIndex};
use thiserror::Error;

/// Top-level application error encompassing all failure modes of the binary.
///
/// Domain-specific error types convert via `From`, so `main` propagates with `?`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration file exists but could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Tracing subscriber could not be installed.
    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Layout report could not be serialized to JSON.
    #[error("Failed to serialize layout report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Recoverable conditions reported by the layout engine.
///
/// None of these abort the host. Each variant leaves the geometry cache untouched.
///
/// # Recovery Patterns
///
/// - **InvalidIndex**: the host asked about an item that does not exist; treat as "no frame"
/// - **DegenerateConfig**: zero items or a zero-sized container; valid transient state before
///   the first real layout, geometry is empty
/// - **StaleSelfSizing**: a content-size proposal outlived a structural rebuild; drop it
/// - **NonFiniteProposal**: the host measured NaN or infinity; drop it and keep the old width
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum LayoutError {
    /// Index outside `[0, item_count)`.
    #[error("item index {index:?} out of range (item count: {item_count})")]
    InvalidIndex {
        /// The requested index.
        index: ItemIndex,
        /// Number of items in the current frame sequence.
        item_count: usize,
    },

    /// Zero items or a container with zero width or height.
    #[error("degenerate layout config ({item_count} items in {width}x{height})")]
    DegenerateConfig {
        /// Configured item count.
        item_count: usize,
        /// Configured container width.
        width: f64,
        /// Configured container height.
        height: f64,
    },

    /// Self-sizing proposal computed against an older frame sequence.
    #[error("stale self-sizing proposal for {index:?} (generation {proposal:?}, current {current:?})")]
    StaleSelfSizing {
        /// Item the proposal was computed for.
        index: ItemIndex,
        /// Generation stamped on the proposal.
        proposal: Generation,
        /// Generation of the current frame sequence.
        current: Generation,
    },

    /// Content-size proposal with a NaN or infinite width.
    #[error("non-finite width {width} proposed for {index:?}")]
    NonFiniteProposal {
        /// Item the proposal was made for.
        index: ItemIndex,
        /// The rejected width.
        width: f64,
    },
}

impl LayoutError {
    /// True for conditions that only mean "nothing to do yet".
    ///
    /// Degenerate configs are expected before the first layout pass; hosts usually
    /// do not log them.
    pub fn is_transient(&self) -> bool {
        matches!(self, LayoutError::DegenerateConfig { .. })
    }
}
