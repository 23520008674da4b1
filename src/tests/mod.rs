//! Internal test modules - whitebox tests with crate access
//!
//! Tests here drive the engine and tab bar end to end and may inspect the
//! geometry cache directly.
