use moma_tour::async_io::{find_dataset_files_async, load_records_async};
use moma_tour::common::traits::ModelCollection;
use moma_tour::{LoaderConfig, Result, load_dataset_async, load_dataset_dir_async};

use crate::utils::{temp_dir, test_config, write_csv, write_sample_csv, write_sample_parquet};

#[tokio::test]
async fn test_async_load_single_file() -> Result<()> {
    let dir = temp_dir();
    let path = write_sample_csv(&dir, "artworks.csv")?;

    let dataset = load_dataset_async(&path, &test_config()).await?;
    assert_eq!(dataset.count(), 3);

    let records = load_records_async(path, LoaderConfig::default()).await?;
    assert_eq!(records.len(), 3);
    Ok(())
}

#[tokio::test]
async fn test_async_load_directory() -> Result<()> {
    let dir = temp_dir();
    write_sample_parquet(&dir, "b.parquet")?;
    write_sample_csv(&dir, "a.csv")?;
    write_csv(dir.path(), "README.md", &["not a dataset"])?;

    let files = find_dataset_files_async(dir.path()).await?;
    let names: Vec<String> = files
        .iter()
        .filter_map(|f| f.file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.csv", "b.parquet"]);

    let dataset = load_dataset_dir_async(dir.path(), &test_config()).await?;
    let years: Vec<i32> = dataset.iter().map(|r| r.date_acquired).collect();
    assert_eq!(years, vec![2000, 2001, 2001, 1999, 2003]);
    Ok(())
}

#[tokio::test]
async fn test_async_empty_directory() -> Result<()> {
    let dir = temp_dir();
    let dataset = load_dataset_dir_async(dir.path(), &LoaderConfig::default()).await?;
    assert!(dataset.is_empty());
    Ok(())
}
