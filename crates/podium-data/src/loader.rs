//! Olympic athlete CSV loading.
//!
//! The dataset is fetched once at startup (or read from a local file)
//! and projected down to the six columns the dashboard works with. The
//! resulting `DataFrame` is never mutated afterwards; every aggregate
//! is derived from it per request.

use crate::error::{DataError, Result};
use polars::prelude::*;
use std::io::Cursor;
use std::path::PathBuf;

/// Published CSV export of the Tidy Tuesday Olympic athlete dataset.
pub const DEFAULT_DATA_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRuzokuPJke3HyE-ooCbVKlkyOikFxi3CDQzvosz7KJGf4otbxgH-HWXDpF5iIXTMLGC37rx6mI0VUV/pub?output=csv";

/// Columns the dashboard depends on; everything else is dropped at load.
pub const WORKING_COLUMNS: [&str; 6] = ["year", "season", "sport", "team", "sex", "medal"];

/// Where to load the athlete CSV from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Fetch over HTTP from the given URL.
    Url(String),
    /// Read from a file on disk.
    Path(PathBuf),
}

impl Default for DataSource {
    fn default() -> Self {
        Self::Url(DEFAULT_DATA_URL.to_string())
    }
}

/// Load the athlete table from the given source.
///
/// A failed fetch or an unreadable file is fatal: the error propagates
/// out and the process does not start serving.
pub async fn load(source: &DataSource) -> Result<DataFrame> {
    let bytes = match source {
        DataSource::Url(url) => reqwest::get(url)
            .await?
            .error_for_status()?
            .bytes()
            .await?
            .to_vec(),
        DataSource::Path(path) => std::fs::read(path)?,
    };
    read_csv(bytes)
}

/// Parse raw CSV bytes into the working athlete table.
///
/// Empty fields and `NA` are parsed as nulls, so athletes without a
/// medal carry a null `medal` value (matching the source dataset's
/// convention).
pub fn read_csv(bytes: Vec<u8>) -> Result<DataFrame> {
    let df = csv_options()
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()?;
    project_columns(df)
}

fn csv_options() -> CsvReadOptions {
    CsvReadOptions::default()
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_null_values(Some(
            NullValues::AllColumns(vec!["".into(), "NA".into()]),
        )))
}

/// Keep only the working columns, with the dtypes the aggregators expect.
fn project_columns(df: DataFrame) -> Result<DataFrame> {
    for name in WORKING_COLUMNS {
        if !df.get_column_names().iter().any(|c| c.as_str() == name) {
            return Err(DataError::MissingColumn(name.to_string()));
        }
    }

    let df = df
        .lazy()
        .select([
            col("year").cast(DataType::Int32),
            col("season").cast(DataType::String),
            col("sport").cast(DataType::String),
            col("team").cast(DataType::String),
            col("sex").cast(DataType::String),
            col("medal").cast(DataType::String),
        ])
        .collect()?;

    Ok(df)
}
