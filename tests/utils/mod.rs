use std::path::PathBuf;
use std::sync::Arc;

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use tempfile::TempDir;

use moma_tour::Result;
use moma_tour::error::DashboardError;

pub use moma_tour::utils::test::{
    end_to_end_records, generate_sample_collection, generate_sample_records, painting,
    sample_record, test_config, timed_execution, write_csv,
};

/// Header of a dataset CSV with two columns the loader must ignore
pub const CSV_HEADER: &str =
    "ObjectID,Title,Artist,Gender,Country,DateAcquired,Classification,Department,Medium,URL";

/// A temporary directory that lives as long as the returned handle
pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Write a small dataset CSV into `dir`
pub fn write_sample_csv(dir: &TempDir, name: &str) -> Result<PathBuf> {
    write_csv(
        dir.path(),
        name,
        &[
            CSV_HEADER,
            "1,A,X,Male,France,2000-01-15,Painting,Painting & Sculpture,Oil on canvas,http://a",
            "2,B,Y,female,Japan,2001.0,Drawing,Drawings & Prints,Ink on paper,http://b",
            "3,C,,,,2001,Photograph,Photography,,",
        ],
    )
}

/// Write a small dataset Parquet file into `dir`, with the year stored as an integer
pub fn write_sample_parquet(dir: &TempDir, name: &str) -> Result<PathBuf> {
    let path = dir.path().join(name);
    let text = |values: [Option<&str>; 2]| Arc::new(StringArray::from(values.to_vec())) as ArrayRef;

    let batch = RecordBatch::try_from_iter(vec![
        ("Title", text([Some("A"), Some("B")])),
        ("Artist", text([Some("X"), Some("Y")])),
        ("Gender", text([Some("Male"), None])),
        ("Country", text([Some("France"), Some("Japan")])),
        (
            "DateAcquired",
            Arc::new(Int64Array::from(vec![1999, 2003])) as ArrayRef,
        ),
        ("Classification", text([Some("Painting"), Some("Print")])),
        ("Department", text([Some("Painting & Sculpture"), Some("Drawings & Prints")])),
        ("Medium", text([Some("Tempera on panel"), None])),
        ("Notes", text([None, Some("ignored")])),
    ])?;

    let file = std::fs::File::create(&path).map_err(|e| DashboardError::io(path.clone(), e))?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(&batch)?;
    writer.close()?;
    Ok(path)
}
