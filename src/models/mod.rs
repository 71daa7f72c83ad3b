//! Domain models for the acquisitions dataset

pub mod artwork;
pub mod types;

pub use artwork::{ArtworkRecord, RawArtworkRow};
pub use types::{Gender, Technique};
