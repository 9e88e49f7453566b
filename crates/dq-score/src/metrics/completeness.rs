use polars::prelude::*;

/// Fraction of non-null cells across the whole table.
///
/// A table without cells is trivially complete and scores 1.0.
pub fn completeness(df: &DataFrame) -> f64 {
    let total_cells = df.height() * df.width();
    if total_cells == 0 {
        return 1.0;
    }

    let missing_cells: usize = df
        .get_columns()
        .iter()
        .map(|col| col.as_materialized_series().null_count())
        .sum();

    (total_cells - missing_cells) as f64 / total_cells as f64
}

/// Fraction of non-null cells in a single series.
pub fn column_completeness(series: &Series) -> f64 {
    if series.is_empty() {
        return 1.0;
    }
    (series.len() - series.null_count()) as f64 / series.len() as f64
}
