//! CSV export of the cleaned sales table.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;
use tracing::info;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to serialize CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Serialize a table as UTF-8 CSV with a header row. Missing cells are empty.
pub fn to_csv_bytes(df: &DataFrame) -> Result<Vec<u8>, ExportError> {
    let mut bytes = Vec::new();
    let mut out = df.clone();
    CsvWriter::new(&mut bytes)
        .include_header(true)
        .finish(&mut out)?;
    Ok(bytes)
}

/// Write a table to `path` as CSV.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<(), ExportError> {
    let bytes = to_csv_bytes(df)?;
    std::fs::write(path, &bytes).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), rows = df.height(), "Cleaned table exported");
    Ok(())
}
