//! Error handling for dataset loading.
//!
//! Aggregations are total over any record set and never fail; every error in
//! this crate is a load-time fault.

pub mod util;

use std::io;
use std::path::PathBuf;

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use thiserror::Error;

/// Specialized error type for the dashboard core
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Error opening or reading a file
    #[error("IO error for {}: {source}", .path.display())]
    Io {
        /// File the operation was performed on
        path: PathBuf,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
    /// Error decoding CSV or converting Arrow arrays
    #[error("Arrow error: {0}")]
    Arrow(#[from] ArrowError),
    /// Error processing Parquet data
    #[error("Parquet error: {0}")]
    Parquet(#[from] ParquetError),
    /// Error mapping a record batch onto dataset rows
    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_arrow::Error),
    /// The source does not provide the expected columns
    #[error("Schema error: {0}")]
    Schema(String),
    /// A row violates a dataset invariant
    #[error("Invalid record at row {row}: {reason}")]
    InvalidRecord {
        /// Zero-based row index across the whole source
        row: usize,
        /// What was wrong with the row
        reason: String,
    },
    /// The file extension does not name a supported format
    #[error("Unsupported dataset format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    /// A background loading task failed to complete
    #[error("Loading task failed: {0}")]
    Task(String),
}

impl DashboardError {
    /// Create an IO error bound to a path
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a missing column error
    #[must_use]
    pub fn missing_column(column: &str) -> Self {
        Self::Schema(format!("Column '{column}' not found"))
    }
}

/// Result type for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
