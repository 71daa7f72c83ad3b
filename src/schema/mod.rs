//! Schema of the acquisitions dataset and batch normalisation.
//!
//! Sources may carry extra columns and may store values with any type Arrow
//! can cast to a string. Every batch is narrowed to the eight dataset columns
//! and cast to nullable `Utf8` before rows are deserialised.

pub mod date_utils;

use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::compute::cast;
use arrow::record_batch::RecordBatch;
use arrow_schema::{DataType, Field, Schema, SchemaRef};

use crate::error::{DashboardError, Result};

/// Title column
pub const TITLE: &str = "Title";
/// Artist column
pub const ARTIST: &str = "Artist";
/// Gender column
pub const GENDER: &str = "Gender";
/// Country column
pub const COUNTRY: &str = "Country";
/// DateAcquired column
pub const DATE_ACQUIRED: &str = "DateAcquired";
/// Classification column
pub const CLASSIFICATION: &str = "Classification";
/// Department column
pub const DEPARTMENT: &str = "Department";
/// Medium column
pub const MEDIUM: &str = "Medium";

/// Dataset columns in canonical order
pub const COLUMNS: [&str; 8] = [
    TITLE,
    ARTIST,
    GENDER,
    COUNTRY,
    DATE_ACQUIRED,
    CLASSIFICATION,
    DEPARTMENT,
    MEDIUM,
];

/// The normalised dataset schema: every column is nullable `Utf8`
#[must_use]
pub fn dataset_schema() -> SchemaRef {
    Arc::new(Schema::new(
        COLUMNS
            .iter()
            .map(|name| Field::new(*name, DataType::Utf8, true))
            .collect::<Vec<_>>(),
    ))
}

/// Indices of the dataset columns within `schema`
///
/// # Errors
/// Returns a schema error naming the first missing column
pub fn column_indices(schema: &Schema) -> Result<Vec<usize>> {
    COLUMNS
        .iter()
        .map(|name| {
            schema
                .index_of(name)
                .map_err(|_| DashboardError::missing_column(name))
        })
        .collect()
}

/// Narrow a batch to the dataset columns and cast them to `Utf8`
pub fn normalize_batch(batch: &RecordBatch) -> Result<RecordBatch> {
    let indices = column_indices(batch.schema().as_ref())?;

    let columns = indices
        .into_iter()
        .map(|idx| {
            let column = batch.column(idx);
            if column.data_type() == &DataType::Utf8 {
                Ok(Arc::clone(column))
            } else {
                cast(column, &DataType::Utf8)
            }
        })
        .collect::<std::result::Result<Vec<ArrayRef>, _>>()?;

    Ok(RecordBatch::try_new(dataset_schema(), columns)?)
}
