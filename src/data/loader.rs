//! CSV Data Loader Module
//! Reads the funding CSV into a Polars DataFrame with every column as text.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

/// Cell values read as null in every column, matching the usual CSV NA markers.
/// Empty cells are null without being listed.
const NA_VALUES: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("'{}' not found. Please upload the file or check the path.", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to load CSV: {0}")]
    CsvError(#[from] PolarsError),
}

/// Loads the funding dataset.
pub struct DataLoader;

impl DataLoader {
    /// Load a CSV file with a header row.
    ///
    /// Schema inference is disabled so dates and amounts reach the cleaning
    /// stages exactly as written in the file. NA markers become nulls.
    pub fn load_csv(file_path: impl AsRef<Path>) -> Result<DataFrame, LoaderError> {
        let file_path = file_path.as_ref();
        if !file_path.is_file() {
            return Err(LoaderError::FileNotFound(file_path.to_path_buf()));
        }

        let df = LazyCsvReader::new(file_path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .with_null_values(Some(NullValues::AllColumns(
                NA_VALUES.iter().map(|v| (*v).into()).collect(),
            )))
            .finish()?
            .collect()?;

        info!(
            path = %file_path.display(),
            rows = df.height(),
            columns = df.width(),
            "loaded csv"
        );
        Ok(df)
    }
}
