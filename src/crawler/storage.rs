use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, TimeZone};
use tokio::fs;
use tracing::info;

use super::Dataset;

/// Error type for storage operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, StorageError>;

/// File name for a dataset written at `timestamp`
///
/// `<dataset-name>_output_<YYYYMMDD_HHMMSS>.json`
pub fn output_file_name<Tz>(dataset_name: &str, timestamp: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    format!(
        "{}_output_{}.json",
        dataset_name,
        timestamp.format("%Y%m%d_%H%M%S")
    )
}

/// Serialize a dataset as 2-space indented JSON
///
/// Non-ASCII characters are written as-is.
pub fn to_json(dataset: &Dataset) -> Result<String> {
    Ok(serde_json::to_string_pretty(dataset)?)
}

/// Writes a dataset into `dir`, named after the dataset and the current time
///
/// Creates `dir` if it does not exist and returns the path written.
pub async fn write_dataset(dir: &Path, dataset: &Dataset) -> Result<PathBuf> {
    let json = to_json(dataset)?;
    fs::create_dir_all(dir).await?;

    let path = dir.join(output_file_name(&dataset.metadata.name, &Local::now()));
    fs::write(&path, json).await?;

    info!("Saved {} records to {}", dataset.data.len(), path.display());
    Ok(path)
}
