use super::completeness::column_completeness;
use crate::error::{QualityError, Result};
use crate::utils::column_series;
use polars::prelude::*;
use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Completeness of one tracked column and its business weight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnCriticality {
    pub column: String,
    pub weight: f64,
    pub completeness: f64,
}

/// Criticality-weighted completeness across the tracked columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CriticalityOutcome {
    /// Tracked columns present in the table, in table order.
    pub columns: Vec<ColumnCriticality>,
    /// Tracked columns absent from the table, sorted by name. They score
    /// zero completeness.
    pub missing: Vec<ColumnCriticality>,
    /// Sum of every weight in the map, present or not.
    pub total_weight: f64,
}

impl CriticalityOutcome {
    pub fn score(&self) -> f64 {
        if self.total_weight <= 0.0 {
            return 0.0;
        }
        let weighted: f64 = self
            .columns
            .iter()
            .chain(&self.missing)
            .map(|c| c.completeness * c.weight)
            .sum();
        weighted / self.total_weight
    }
}

/// Weighted average of per-column completeness.
///
/// The total is taken over the whole map, so a tracked column missing from
/// the table pulls the score down as if it were entirely null.
pub fn criticality(df: &DataFrame, weights: &HashMap<String, f64>) -> Result<CriticalityOutcome> {
    let total_weight: f64 = weights.values().sum();
    if total_weight <= 0.0 {
        return Err(QualityError::InvalidConfig(
            "column criticality weights sum to zero".to_string(),
        ));
    }

    let mut columns = Vec::with_capacity(weights.len());
    for name in df.get_column_names() {
        let Some(weight) = weights.get(name.as_str()) else {
            continue;
        };
        let series = column_series(df, name.as_str())?;
        columns.push(ColumnCriticality {
            column: name.to_string(),
            weight: *weight,
            completeness: column_completeness(series),
        });
    }

    let mut missing: Vec<ColumnCriticality> = weights
        .iter()
        .filter(|(name, _)| df.column(name.as_str()).is_err())
        .map(|(name, weight)| ColumnCriticality {
            column: name.clone(),
            weight: *weight,
            completeness: 0.0,
        })
        .collect();
    missing.sort_by(|a, b| a.column.cmp(&b.column));

    if !missing.is_empty() {
        let names: Vec<&str> = missing.iter().map(|c| c.column.as_str()).collect();
        warn!(
            "Critical columns missing from the table, scored as empty: {}",
            names.join(", ")
        );
    }

    Ok(CriticalityOutcome {
        columns,
        missing,
        total_weight,
    })
}
