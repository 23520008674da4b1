//! Domain model types (pure).
//!
//! All types in this module are pure data.

pub mod error;
pub mod item;

// Re-export for convenience
pub use error::{AppError, LayoutError};
pub use item::{TabIcon, TabItem};
