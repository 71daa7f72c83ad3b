//! Async dataset loading
//!
//! Decoding is CPU-bound, so every file is read on tokio's blocking pool;
//! the async layer only discovers files and joins the results.

use std::path::{Path, PathBuf};

use futures::stream::{self, StreamExt, TryStreamExt};
use tokio::fs;

use crate::collections::ArtworkCollection;
use crate::config::LoaderConfig;
use crate::error::{DashboardError, Result};
use crate::loader::{DatasetFormat, load_records};
use crate::models::ArtworkRecord;
use crate::utils::logging::log_discovery;

/// Find every CSV or Parquet file directly inside a directory, sorted by path
pub async fn find_dataset_files_async(dir: &Path) -> Result<Vec<PathBuf>> {
    log::debug!("Searching for dataset files in {}", dir.display());

    let mut files = Vec::new();
    let mut entries = fs::read_dir(dir)
        .await
        .map_err(|e| DashboardError::io(dir, e))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| DashboardError::io(dir, e))?
    {
        let path = entry.path();
        let metadata = fs::metadata(&path)
            .await
            .map_err(|e| DashboardError::io(&path, e))?;

        if metadata.is_file() && DatasetFormat::from_path(&path).is_ok() {
            files.push(path);
        }
    }

    files.sort();

    log_discovery(dir, &files);

    Ok(files)
}

/// Load the records of one file on the blocking pool
pub async fn load_records_async(path: PathBuf, config: LoaderConfig) -> Result<Vec<ArtworkRecord>> {
    tokio::task::spawn_blocking(move || load_records(&path, &config))
        .await
        .map_err(|e| DashboardError::Task(e.to_string()))?
}

/// Load a dataset from a single file
pub async fn load_dataset_async(path: &Path, config: &LoaderConfig) -> Result<ArtworkCollection> {
    load_records_async(path.to_path_buf(), config.clone())
        .await
        .map(ArtworkCollection::from_records)
}

/// Load a dataset split across several files, a few files at a time
///
/// Records keep the order of `paths`.
pub async fn load_dataset_files_async(
    paths: &[PathBuf],
    config: &LoaderConfig,
) -> Result<ArtworkCollection> {
    let concurrency = std::thread::available_parallelism().map_or(4, usize::from);

    let parts: Vec<Vec<ArtworkRecord>> = stream::iter(paths.iter().cloned())
        .map(|path| load_records_async(path, config.clone()))
        .buffered(concurrency)
        .try_collect()
        .await?;

    Ok(ArtworkCollection::from_records(
        parts.into_iter().flatten().collect(),
    ))
}

/// Load every dataset file found in a directory
pub async fn load_dataset_dir_async(dir: &Path, config: &LoaderConfig) -> Result<ArtworkCollection> {
    let files = find_dataset_files_async(dir).await?;
    load_dataset_files_async(&files, config).await
}
