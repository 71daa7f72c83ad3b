//! Terminal progress for dataset loading, using the indicatif crate.

use std::path::{Path, PathBuf};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Bar shown while several dataset files decode in parallel
pub const FILE_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {pos}/{len} files {msg}";

/// Spinner shown while a single source loads
pub const SPINNER_TEMPLATE: &str = "{spinner:.green} {elapsed_precise} {msg}";

/// A bar ticking once per decoded file
#[must_use]
pub fn create_file_progress(files: &[PathBuf]) -> ProgressBar {
    let pb = ProgressBar::new(files.len() as u64);
    let style = ProgressStyle::default_bar()
        .template(FILE_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message("decoding acquisitions");
    pb
}

/// A spinner naming the file or directory being loaded
#[must_use]
pub fn create_load_spinner(source: &Path) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::default_spinner()
        .template(SPINNER_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_spinner());
    pb.set_style(style);
    pb.set_message(format!("Loading {}", source.display()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Finish a progress bar with an optional completion message
pub fn finish_progress_bar(pb: &ProgressBar, message: Option<&str>) {
    if let Some(msg) = message {
        pb.finish_with_message(msg.to_string());
    } else {
        pb.finish();
    }
}
