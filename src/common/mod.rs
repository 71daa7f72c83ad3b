//! Common utilities and traits
//!
//! Shared interfaces used by the collection and filter layers.

pub mod traits;

// Re-export common traits for easier imports
pub use traits::*;
