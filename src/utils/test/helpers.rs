//! Test helper functions

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::config::LoaderConfig;
use crate::error::{DashboardError, Result};

/// Loader configuration used by tests: small batches to exercise batching
#[must_use]
pub fn test_config() -> LoaderConfig {
    LoaderConfig {
        batch_size: 2,
        ..Default::default()
    }
}

/// Timed execution of a fallible function
pub fn timed_execution<F, T>(func: F) -> (Duration, Result<T>)
where
    F: FnOnce() -> Result<T>,
{
    let start = Instant::now();
    let result = func();
    (start.elapsed(), result)
}

/// Write `lines` as a CSV file named `name` inside `dir`
pub fn write_csv(dir: &Path, name: &str, lines: &[&str]) -> Result<PathBuf> {
    let path = dir.join(name);
    let mut file =
        std::fs::File::create(&path).map_err(|e| DashboardError::io(path.clone(), e))?;
    for line in lines {
        writeln!(file, "{line}").map_err(|e| DashboardError::io(path.clone(), e))?;
    }
    Ok(path)
}
