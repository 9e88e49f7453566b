//! Shared helpers for reading columns out of a `DataFrame`.

use crate::error::{QualityError, Result};
use polars::prelude::*;

/// Look up a column, mapping a missing column to [`QualityError::ColumnNotFound`].
pub fn column_series<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Series> {
    df.column(name)
        .map(|col| col.as_materialized_series())
        .map_err(|_| QualityError::ColumnNotFound(name.to_string()))
}

/// Render every cell of a series as text, keeping nulls as `None`.
///
/// Temporal columns render in ISO form (`2020-01-01`), so an already parsed
/// date column still checks against `%Y-%m-%d`.
pub fn string_values(series: &Series) -> Result<Vec<Option<String>>> {
    let as_text = if series.dtype() == &DataType::String {
        series.clone()
    } else {
        series.cast(&DataType::String)?
    };

    Ok(as_text
        .str()?
        .into_iter()
        .map(|opt| opt.map(str::to_string))
        .collect())
}

/// Number of distinct values, counting null as one value when present.
pub fn distinct_count(series: &Series) -> Result<usize> {
    let non_null = series.drop_nulls();
    let distinct = if non_null.is_empty() {
        0
    } else {
        non_null.n_unique()?
    };
    Ok(distinct + usize::from(series.null_count() > 0))
}
