//! Dataset sources: the built-in customer sample and local CSV files.

use crate::error::{QualityError, Result, ResultExt};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::path::Path;
use tracing::{debug, info};

/// The six-row customer table used when no input file is given.
///
/// `CustomerID` and `Email` each hold one null and `Name` has one duplicate.
pub fn sample_customers() -> Result<DataFrame> {
    let df = df![
        "CustomerID" => [Some(1i64), Some(2), Some(3), Some(4), Some(5), None],
        "Name" => ["Alice", "Bob", "Charlie", "David", "Eve", "Alice"],
        "Email" => [
            Some("alice@example.com"),
            Some("bob@example.com"),
            None,
            Some("david@example.com"),
            Some("eve@example.com"),
            Some("alice@example.com"),
        ],
        "SignupDate" => [
            "2020-01-01",
            "2020-01-02",
            "2020-01-03",
            "2021-01-04",
            "2021-01-05",
            "2021-01-06",
        ],
    ]?;
    Ok(df)
}

/// Load a CSV file with a header row.
///
/// Empty fields become nulls. Date-like columns are kept as text so the
/// consistency metric sees the raw values.
pub fn load_csv(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(QualityError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            format!("Input file not found: {}", path.display()),
        )));
    }

    info!("Loading dataset from: {}", path.display());

    // Standard loading with quote handling, then a plain retry
    let quoted = CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish();

    let df = match quoted {
        Ok(df) => df,
        Err(e) => {
            debug!("Standard loading failed: {}", e);
            CsvReadOptions::default()
                .with_infer_schema_length(Some(100))
                .with_has_header(true)
                .try_into_reader_with_file_path(Some(path.to_path_buf()))?
                .finish()
                .context(format!("Reading {}", path.display()))?
        }
    };

    info!("Dataset loaded successfully: {:?}", df.shape());
    Ok(df)
}
