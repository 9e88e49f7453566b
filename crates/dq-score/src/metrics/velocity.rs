use super::dates::{DateCheck, classify_all, days_before};
use crate::error::Result;
use crate::utils::{column_series, string_values};
use chrono::NaiveDateTime;
use polars::prelude::*;
use serde::Serialize;
use tracing::warn;

/// Rows of a date column that fall in a recent window.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VelocityOutcome {
    pub total_rows: usize,
    pub recent_rows: usize,
    /// Rows whose value did not parse; they never count as recent.
    pub unparseable_rows: usize,
    pub missing_rows: usize,
    pub window_start: NaiveDateTime,
    pub window_end: NaiveDateTime,
}

impl VelocityOutcome {
    pub fn score(&self) -> f64 {
        if self.total_rows == 0 {
            return 0.0;
        }
        self.recent_rows as f64 / self.total_rows as f64
    }
}

/// Fraction of rows whose date lies in `[now - period_days, now]`.
///
/// Parsed dates are derived into a local sequence; the table is not touched.
pub fn velocity(
    df: &DataFrame,
    column: &str,
    format: &str,
    period_days: u32,
    now: NaiveDateTime,
) -> Result<VelocityOutcome> {
    let series = column_series(df, column)?;
    let values = string_values(series)?;
    let checks = classify_all(&values, format);

    let window_start = days_before(now, period_days, "velocity_period_days")?;
    let window_end = now;
    let window = window_start..=window_end;

    let mut outcome = VelocityOutcome {
        total_rows: checks.len(),
        recent_rows: checks
            .iter()
            .filter_map(DateCheck::as_datetime)
            .filter(|dt| window.contains(dt))
            .count(),
        unparseable_rows: 0,
        missing_rows: 0,
        window_start,
        window_end,
    };

    for check in &checks {
        match check {
            DateCheck::Valid(_) => {}
            DateCheck::Invalid(_) => outcome.unparseable_rows += 1,
            DateCheck::Missing => outcome.missing_rows += 1,
        }
    }

    if outcome.unparseable_rows > 0 {
        warn!(
            "{} values in '{}' could not be parsed and were left out of the velocity window",
            outcome.unparseable_rows, column
        );
    }

    Ok(outcome)
}
