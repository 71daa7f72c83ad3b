//! Logging utilities for load messages and progress tracking

pub mod load;
pub mod progress;

pub use load::{LoadSummary, discovery_message, log_discovery, log_load_start, log_load_summary};
pub use progress::{create_file_progress, create_load_spinner, finish_progress_bar};
