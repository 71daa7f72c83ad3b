//! Common traits used across the codebase

pub mod collection;

// Re-export collection traits
pub use collection::ModelCollection;
