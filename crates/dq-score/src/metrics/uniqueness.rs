use crate::error::Result;
use crate::utils::{column_series, distinct_count};
use polars::prelude::*;

/// Fraction of distinct values in `column` relative to the row count.
///
/// Null counts as one distinct value when present. An empty table has no
/// duplicates and scores 1.0.
pub fn uniqueness(df: &DataFrame, column: &str) -> Result<f64> {
    let series = column_series(df, column)?;
    let rows = df.height();
    if rows == 0 {
        return Ok(1.0);
    }

    let distinct = distinct_count(series)?;
    Ok(distinct as f64 / rows as f64)
}
