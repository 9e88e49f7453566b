use super::dates::{DateCheck, classify_all};
use crate::error::Result;
use crate::utils::{column_series, string_values};
use polars::prelude::*;
use serde::Serialize;
use tracing::warn;

/// Per-row format check of a column.
#[derive(Debug, Clone, Serialize)]
pub struct ConsistencyOutcome {
    pub column: String,
    pub format: String,
    pub total_rows: usize,
    pub valid_rows: usize,
    /// Rows that hold a value not matching the format, by row index.
    pub invalid: Vec<(usize, String)>,
    /// Null rows, by row index. Nulls count as inconsistent.
    pub missing: Vec<usize>,
}

impl ConsistencyOutcome {
    fn from_checks(column: &str, format: &str, checks: &[DateCheck]) -> Self {
        let mut invalid = Vec::new();
        let mut missing = Vec::new();
        let valid_rows = checks.iter().filter(|c| c.is_valid()).count();

        for (idx, check) in checks.iter().enumerate() {
            match check {
                DateCheck::Valid(_) => {}
                DateCheck::Invalid(raw) => invalid.push((idx, raw.clone())),
                DateCheck::Missing => missing.push(idx),
            }
        }

        Self {
            column: column.to_string(),
            format: format.to_string(),
            total_rows: checks.len(),
            valid_rows,
            invalid,
            missing,
        }
    }

    /// Fraction of rows whose value parses under the format.
    pub fn score(&self) -> f64 {
        if self.total_rows == 0 {
            return 1.0;
        }
        self.valid_rows as f64 / self.total_rows as f64
    }

    pub fn inconsistent_rows(&self) -> usize {
        self.total_rows - self.valid_rows
    }
}

/// Check every value of `column` against a strftime `format`.
pub fn consistency(df: &DataFrame, column: &str, format: &str) -> Result<ConsistencyOutcome> {
    let series = column_series(df, column)?;
    let values = string_values(series)?;
    let checks = classify_all(&values, format);
    let outcome = ConsistencyOutcome::from_checks(column, format, &checks);

    if outcome.inconsistent_rows() > 0 {
        warn!(
            "{} of {} values in '{}' do not match '{}'",
            outcome.inconsistent_rows(),
            outcome.total_rows,
            column,
            format
        );
    }

    Ok(outcome)
}
