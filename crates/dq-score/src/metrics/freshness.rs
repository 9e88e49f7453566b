use super::dates::{days_before, parse_date};
use crate::config::FreshnessDenominator;
use crate::error::Result;
use crate::utils::{column_series, string_values};
use chrono::NaiveDateTime;
use polars::prelude::*;
use serde::Serialize;
use tracing::warn;

/// Parameters of a freshness check.
#[derive(Debug, Clone, Copy)]
pub struct FreshnessParams<'a> {
    pub format: &'a str,
    pub threshold_days: u32,
    pub sample_size: usize,
    pub denominator: FreshnessDenominator,
    pub now: NaiveDateTime,
}

/// Result of inspecting the most recent values of a date column.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FreshnessOutcome {
    /// Every sampled value parsed.
    Scored {
        sampled: usize,
        stale: usize,
        denominator: usize,
        cutoff: NaiveDateTime,
    },
    /// A sampled value could not be parsed; the metric degrades to 0.
    Unparseable { value: String },
}

impl FreshnessOutcome {
    pub fn score(&self) -> f64 {
        match self {
            FreshnessOutcome::Scored {
                stale, denominator, ..
            } => {
                if *denominator == 0 {
                    0.0
                } else {
                    denominator.saturating_sub(*stale) as f64 / *denominator as f64
                }
            }
            FreshnessOutcome::Unparseable { .. } => 0.0,
        }
    }
}

/// Share of the last `sample_size` non-null values that are not stale.
///
/// A value is stale when it is strictly older than `now - threshold_days`.
/// With [`FreshnessDenominator::Fixed`] the score is always taken over
/// `sample_size`, so a column with fewer values still scores as if the
/// missing ones were fresh.
pub fn freshness(
    df: &DataFrame,
    column: &str,
    params: FreshnessParams<'_>,
) -> Result<FreshnessOutcome> {
    let series = column_series(df, column)?;
    let values = string_values(series)?;

    let mut recent: Vec<&str> = values
        .iter()
        .rev()
        .flatten()
        .take(params.sample_size)
        .map(String::as_str)
        .collect();
    recent.reverse();

    let cutoff = days_before(params.now, params.threshold_days, "freshness_threshold_days")?;
    let mut stale = 0;
    for raw in &recent {
        let Some(parsed) = parse_date(raw, params.format) else {
            warn!(
                "Freshness degraded to 0: '{}' in '{}' does not match '{}'",
                raw, column, params.format
            );
            return Ok(FreshnessOutcome::Unparseable {
                value: raw.to_string(),
            });
        };
        if parsed < cutoff {
            stale += 1;
        }
    }

    let denominator = match params.denominator {
        FreshnessDenominator::Fixed => params.sample_size,
        FreshnessDenominator::Observed => recent.len(),
    };

    Ok(FreshnessOutcome::Scored {
        sampled: recent.len(),
        stale,
        denominator,
        cutoff,
    })
}
