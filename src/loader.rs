//! Dataset loading
//!
//! Reads CSV or Parquet sources into Arrow record batches, narrows them to the
//! dataset schema and deserialises rows with `serde_arrow`. Every failure here
//! is a load-time fault; nothing downstream re-validates records.

use std::ffi::OsStr;
use std::fmt;
use std::io::Seek;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use arrow::csv::ReaderBuilder;
use arrow::csv::reader::Format;
use arrow::record_batch::RecordBatch;
use arrow_schema::{DataType, Field, Schema};
use parquet::arrow::ProjectionMask;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use rayon::prelude::*;

use crate::collections::ArtworkCollection;
use crate::config::LoaderConfig;
use crate::error::util::safe_open_file;
use crate::error::{DashboardError, Result};
use crate::models::{ArtworkRecord, RawArtworkRow};
use crate::schema::date_utils::parse_year;
use crate::schema::{column_indices, normalize_batch};
use crate::utils::logging::{
    LoadSummary, create_file_progress, finish_progress_bar, log_load_start, log_load_summary,
};

/// Supported on-disk formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// Comma (or otherwise) separated text with a header row
    Csv,
    /// Apache Parquet
    Parquet,
}

impl DatasetFormat {
    /// Detect the format from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("csv" | "txt") => Ok(Self::Csv),
            Some("parquet" | "pq") => Ok(Self::Parquet),
            _ => Err(DashboardError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "CSV"),
            Self::Parquet => write!(f, "Parquet"),
        }
    }
}

/// Read a CSV file into record batches holding only the dataset columns
pub fn read_csv(path: &Path, config: &LoaderConfig) -> Result<Vec<RecordBatch>> {
    let mut file = safe_open_file(path, "reading CSV dataset")?;

    let format = Format::default()
        .with_header(config.has_header)
        .with_delimiter(config.delimiter);

    // Only the header is needed; every column is read as text
    let (inferred, _) = format.infer_schema(&mut file, Some(0))?;
    file.rewind().map_err(|e| DashboardError::io(path, e))?;

    let text_schema = Schema::new(
        inferred
            .fields()
            .iter()
            .map(|field| Field::new(field.name(), DataType::Utf8, true))
            .collect::<Vec<_>>(),
    );
    let projection = column_indices(&text_schema)?;

    let reader = ReaderBuilder::new(Arc::new(text_schema))
        .with_header(config.has_header)
        .with_delimiter(config.delimiter)
        .with_batch_size(config.batch_size)
        .with_projection(projection)
        .build(file)?;

    reader
        .map(|batch| batch.map_err(DashboardError::from))
        .collect()
}

/// Read a Parquet file into record batches holding only the dataset columns
pub fn read_parquet(path: &Path, config: &LoaderConfig) -> Result<Vec<RecordBatch>> {
    let file = safe_open_file(path, "reading parquet dataset")?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let projection = column_indices(builder.schema().as_ref())?;
    let mask = ProjectionMask::roots(builder.parquet_schema(), projection);

    let reader = builder
        .with_projection(mask)
        .with_batch_size(config.batch_size)
        .build()?;

    reader
        .map(|batch| batch.map_err(DashboardError::from))
        .collect()
}

/// Read record batches from a file, choosing the reader by extension
pub fn read_batches(path: &Path, config: &LoaderConfig) -> Result<Vec<RecordBatch>> {
    read_batches_as(path, DatasetFormat::from_path(path)?, config)
}

fn read_batches_as(
    path: &Path,
    format: DatasetFormat,
    config: &LoaderConfig,
) -> Result<Vec<RecordBatch>> {
    match format {
        DatasetFormat::Csv => read_csv(path, config),
        DatasetFormat::Parquet => read_parquet(path, config),
    }
}

/// Convert a record batch into dataset records
///
/// `row_offset` is the index of the batch's first row within its source and
/// only serves error reporting. Returns the records and the number of rows
/// skipped for lacking an acquisition year.
pub fn records_from_batch(
    batch: &RecordBatch,
    row_offset: usize,
    config: &LoaderConfig,
) -> Result<(Vec<ArtworkRecord>, usize)> {
    let normalized = normalize_batch(batch)?;
    let rows: Vec<RawArtworkRow> = serde_arrow::from_record_batch(&normalized)?;

    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = 0;

    for (idx, row) in rows.into_iter().enumerate() {
        let year = row.date_acquired.as_deref().and_then(parse_year);
        match year {
            Some(year) => records.push(row.into_record(year)),
            None if config.skip_invalid_rows => {
                log::debug!(
                    "Skipping row {} without a usable DateAcquired ({:?})",
                    row_offset + idx,
                    row.date_acquired
                );
                skipped += 1;
            }
            None => {
                return Err(DashboardError::InvalidRecord {
                    row: row_offset + idx,
                    reason: format!(
                        "DateAcquired {:?} is not a year",
                        row.date_acquired.unwrap_or_default()
                    ),
                });
            }
        }
    }

    Ok((records, skipped))
}

/// Load every record from a single file
pub fn load_records(path: &Path, config: &LoaderConfig) -> Result<Vec<ArtworkRecord>> {
    let format = DatasetFormat::from_path(path)?;
    log_load_start(path, format);
    let start = Instant::now();

    let batches = read_batches_as(path, format, config)?;

    let mut records = Vec::with_capacity(batches.iter().map(RecordBatch::num_rows).sum());
    let mut offset = 0;
    let mut skipped = 0;
    for batch in &batches {
        let (batch_records, batch_skipped) = records_from_batch(batch, offset, config)?;
        offset += batch.num_rows();
        skipped += batch_skipped;
        records.extend(batch_records);
    }

    log_load_summary(&LoadSummary {
        path,
        format,
        batches: batches.len(),
        records: records.len(),
        skipped,
        elapsed: start.elapsed(),
    });

    Ok(records)
}

/// Load a dataset from a single file
pub fn load_dataset(path: &Path, config: &LoaderConfig) -> Result<ArtworkCollection> {
    load_records(path, config).map(ArtworkCollection::from_records)
}

/// Load a dataset split across several files, reading them in parallel
///
/// Records keep the order of `paths`.
pub fn load_dataset_files_parallel(
    paths: &[PathBuf],
    config: &LoaderConfig,
) -> Result<ArtworkCollection> {
    let pb = create_file_progress(paths);
    let parts = paths
        .par_iter()
        .map(|path| {
            let records = load_records(path, config);
            pb.inc(1);
            records
        })
        .collect::<Result<Vec<_>>>()?;
    finish_progress_bar(&pb, Some("Dataset files loaded"));

    Ok(ArtworkCollection::from_records(
        parts.into_iter().flatten().collect(),
    ))
}
