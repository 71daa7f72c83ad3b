//! Load-time log messages
//!
//! One line when a source is opened and one summary line when it has been
//! decoded. Rows dropped for lacking an acquisition year are reported as a
//! warning so a lenient load never goes unnoticed.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::loader::DatasetFormat;

/// Outcome of decoding one dataset file
#[derive(Debug, Clone, Copy)]
pub struct LoadSummary<'a> {
    /// Source file
    pub path: &'a Path,
    /// Format the file was read as
    pub format: DatasetFormat,
    /// Number of record batches decoded
    pub batches: usize,
    /// Records kept
    pub records: usize,
    /// Rows skipped for lacking a usable `DateAcquired`
    pub skipped: usize,
    /// Wall time spent reading and decoding
    pub elapsed: Duration,
}

impl LoadSummary<'_> {
    /// The summary line
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Loaded {} acquisitions from {} ({}, {} batches) in {:?}",
            self.records,
            self.path.display(),
            self.format,
            self.batches,
            self.elapsed
        )
    }
}

/// Log that a dataset file is about to be read
pub fn log_load_start(path: &Path, format: DatasetFormat) {
    log::info!("Loading acquisitions from {} as {format}", path.display());
}

/// Log the outcome of reading a dataset file
pub fn log_load_summary(summary: &LoadSummary<'_>) {
    if summary.skipped > 0 {
        log::warn!(
            "Skipped {} rows without a usable DateAcquired in {}",
            summary.skipped,
            summary.path.display()
        );
    }
    log::info!("{}", summary.message());
}

/// Describe the dataset files found in a directory
#[must_use]
pub fn discovery_message(dir: &Path, files: &[PathBuf]) -> String {
    let (mut csv, mut parquet) = (0, 0);
    for file in files {
        match DatasetFormat::from_path(file) {
            Ok(DatasetFormat::Csv) => csv += 1,
            Ok(DatasetFormat::Parquet) => parquet += 1,
            Err(_) => {}
        }
    }
    format!(
        "Found {} dataset files in {} ({csv} CSV, {parquet} Parquet)",
        files.len(),
        dir.display()
    )
}

/// Log the result of scanning a directory for dataset files
pub fn log_discovery(dir: &Path, files: &[PathBuf]) {
    if files.is_empty() {
        log::warn!("No dataset files found in directory {}", dir.display());
    } else {
        log::info!("{}", discovery_message(dir, files));
    }
}
