//! Configuration types for quality scoring.
//!
//! This module provides the metric weights, column criticality map and
//! per-metric parameters, with a builder for ergonomic setup. Every path that
//! produces a [`QualityConfig`] (builder, JSON file) validates it once.

use crate::types::Metric;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Allowed deviation of the weight sum from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Default number of trailing values inspected by the freshness metric.
pub const DEFAULT_FRESHNESS_SAMPLE_SIZE: usize = 5;

/// Longest freshness threshold or velocity window, in days (about 10,000 years).
pub const MAX_WINDOW_DAYS: u32 = 3_650_000;

/// Weight of each metric in the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub completeness: f64,
    pub uniqueness: f64,
    pub consistency: f64,
    pub freshness: f64,
    pub velocity: f64,
    pub criticality: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            completeness: 0.25,
            uniqueness: 0.20,
            consistency: 0.20,
            freshness: 0.10,
            velocity: 0.15,
            criticality: 0.10,
        }
    }
}

impl ScoreWeights {
    /// Create validated weights.
    ///
    /// Each weight must be finite and nonnegative, and the six weights must
    /// sum to 1.0 within [`WEIGHT_SUM_TOLERANCE`].
    pub fn new(
        completeness: f64,
        uniqueness: f64,
        consistency: f64,
        freshness: f64,
        velocity: f64,
        criticality: f64,
    ) -> Result<Self, ConfigValidationError> {
        let weights = Self {
            completeness,
            uniqueness,
            consistency,
            freshness,
            velocity,
            criticality,
        };
        weights.validate()?;
        Ok(weights)
    }

    /// Weight assigned to a metric.
    pub fn get(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Completeness => self.completeness,
            Metric::Uniqueness => self.uniqueness,
            Metric::Consistency => self.consistency,
            Metric::Freshness => self.freshness,
            Metric::Velocity => self.velocity,
            Metric::Criticality => self.criticality,
        }
    }

    /// Sum of all six weights.
    pub fn total(&self) -> f64 {
        Metric::ALL.iter().map(|m| self.get(*m)).sum()
    }

    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for metric in Metric::ALL {
            let value = self.get(metric);
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigValidationError::InvalidWeight {
                    metric: metric.key().to_string(),
                    value,
                });
            }
        }

        let total = self.total();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigValidationError::WeightSum(total));
        }

        Ok(())
    }
}

/// How the freshness score is normalised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FreshnessDenominator {
    /// Always divide by the configured sample size, even when fewer values exist.
    #[default]
    Fixed,
    /// Divide by the number of values actually sampled.
    Observed,
}

/// Parameters for the individual metrics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetricParams {
    /// Column checked for duplicate values.
    /// Default: "Name"
    pub uniqueness_column: String,

    /// Date column used by consistency, freshness and velocity.
    /// Default: "SignupDate"
    pub date_column: String,

    /// Expected chrono strftime format of the date column.
    /// Default: "%Y-%m-%d"
    pub date_format: String,

    /// Values older than this many days are stale.
    /// Default: 365
    pub freshness_threshold_days: u32,

    /// Number of trailing non-null values inspected for freshness.
    /// Default: 5
    pub freshness_sample_size: usize,

    /// Normalisation of the freshness score.
    /// Default: Fixed
    pub freshness_denominator: FreshnessDenominator,

    /// Width of the recent-activity window in days.
    /// Default: 30
    pub velocity_period_days: u32,
}

impl Default for MetricParams {
    fn default() -> Self {
        Self {
            uniqueness_column: "Name".to_string(),
            date_column: "SignupDate".to_string(),
            date_format: "%Y-%m-%d".to_string(),
            freshness_threshold_days: 365,
            freshness_sample_size: DEFAULT_FRESHNESS_SAMPLE_SIZE,
            freshness_denominator: FreshnessDenominator::default(),
            velocity_period_days: 30,
        }
    }
}

/// Business importance of the columns tracked by the criticality metric.
pub fn default_column_criticality() -> HashMap<String, f64> {
    [
        ("CustomerID", 0.5),
        ("Name", 0.2),
        ("Email", 0.5),
        ("SignupDate", 0.3),
    ]
    .into_iter()
    .map(|(name, weight)| (name.to_string(), weight))
    .collect()
}

/// Configuration for a scoring run.
///
/// Use [`QualityConfig::builder()`] or [`QualityConfig::from_json_file()`];
/// both validate the result.
///
/// # Example
///
/// ```rust,ignore
/// use dq_score::config::QualityConfig;
///
/// let config = QualityConfig::builder()
///     .uniqueness_column("Email")
///     .freshness_threshold_days(90)
///     .build()?;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Metric weights, must sum to 1.0.
    #[serde(default)]
    pub weights: ScoreWeights,

    /// Criticality weight per column.
    #[serde(default = "default_column_criticality")]
    pub column_criticality: HashMap<String, f64>,

    /// Per-metric parameters.
    #[serde(default)]
    pub params: MetricParams,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            column_criticality: default_column_criticality(),
            params: MetricParams::default(),
        }
    }
}

impl QualityConfig {
    /// Create a new configuration builder.
    pub fn builder() -> QualityConfigBuilder {
        QualityConfigBuilder::default()
    }

    /// Parse a JSON configuration and validate it.
    ///
    /// Missing sections fall back to their defaults.
    pub fn from_json_str(json: &str) -> crate::error::Result<Self> {
        let config: QualityConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON configuration file and validate it.
    pub fn from_json_file(path: impl AsRef<Path>) -> crate::error::Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Validate the configuration and return errors if invalid.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        self.weights.validate()?;

        if self.column_criticality.is_empty() {
            return Err(ConfigValidationError::EmptyCriticality);
        }
        for (column, value) in &self.column_criticality {
            if !value.is_finite() || *value < 0.0 {
                return Err(ConfigValidationError::InvalidCriticality {
                    column: column.clone(),
                    value: *value,
                });
            }
        }
        if self.column_criticality.values().sum::<f64>() <= 0.0 {
            return Err(ConfigValidationError::ZeroCriticality);
        }

        validate_date_format(&self.params.date_format)?;

        if self.params.freshness_sample_size == 0 {
            return Err(ConfigValidationError::InvalidSampleSize(0));
        }

        for (field, days) in [
            ("freshness_threshold_days", self.params.freshness_threshold_days),
            ("velocity_period_days", self.params.velocity_period_days),
        ] {
            if days > MAX_WINDOW_DAYS {
                return Err(ConfigValidationError::WindowOutOfRange {
                    field: field.to_string(),
                    days,
                });
            }
        }

        Ok(())
    }
}

fn validate_date_format(format: &str) -> Result<(), ConfigValidationError> {
    if format.trim().is_empty()
        || StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
    {
        return Err(ConfigValidationError::InvalidDateFormat(format.to_string()));
    }
    Ok(())
}

/// Errors that can occur during configuration validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid weight for '{metric}': {value} (must be finite and >= 0)")]
    InvalidWeight { metric: String, value: f64 },

    #[error("Metric weights sum to {0}, expected 1.0")]
    WeightSum(f64),

    #[error("Column criticality map is empty")]
    EmptyCriticality,

    #[error("Invalid criticality for column '{column}': {value} (must be finite and >= 0)")]
    InvalidCriticality { column: String, value: f64 },

    #[error("Column criticality weights sum to zero")]
    ZeroCriticality,

    #[error("Invalid date format '{0}'")]
    InvalidDateFormat(String),

    #[error("Invalid freshness sample size: {0} (must be at least 1)")]
    InvalidSampleSize(usize),

    #[error("'{field}' of {days} days is out of range (at most {MAX_WINDOW_DAYS})")]
    WindowOutOfRange { field: String, days: u32 },
}

/// Builder for [`QualityConfig`] with fluent API.
#[derive(Debug, Default)]
pub struct QualityConfigBuilder {
    weights: Option<ScoreWeights>,
    column_criticality: Option<HashMap<String, f64>>,
    uniqueness_column: Option<String>,
    date_column: Option<String>,
    date_format: Option<String>,
    freshness_threshold_days: Option<u32>,
    freshness_sample_size: Option<usize>,
    freshness_denominator: Option<FreshnessDenominator>,
    velocity_period_days: Option<u32>,
}

impl QualityConfigBuilder {
    /// Set the metric weights.
    pub fn weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = Some(weights);
        self
    }

    /// Replace the whole column criticality map.
    pub fn column_criticality(mut self, map: HashMap<String, f64>) -> Self {
        self.column_criticality = Some(map);
        self
    }

    /// Add or overwrite the criticality of a single column, starting from the
    /// default map when none was set.
    pub fn critical_column(mut self, column: impl Into<String>, weight: f64) -> Self {
        self.column_criticality
            .get_or_insert_with(default_column_criticality)
            .insert(column.into(), weight);
        self
    }

    /// Set the column checked for duplicates.
    pub fn uniqueness_column(mut self, column: impl Into<String>) -> Self {
        self.uniqueness_column = Some(column.into());
        self
    }

    /// Set the date column used by the time-based metrics.
    pub fn date_column(mut self, column: impl Into<String>) -> Self {
        self.date_column = Some(column.into());
        self
    }

    /// Set the expected strftime date format.
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = Some(format.into());
        self
    }

    /// Set the staleness threshold in days.
    pub fn freshness_threshold_days(mut self, days: u32) -> Self {
        self.freshness_threshold_days = Some(days);
        self
    }

    /// Set how many trailing values the freshness metric inspects.
    pub fn freshness_sample_size(mut self, size: usize) -> Self {
        self.freshness_sample_size = Some(size);
        self
    }

    /// Set the freshness normalisation policy.
    pub fn freshness_denominator(mut self, denominator: FreshnessDenominator) -> Self {
        self.freshness_denominator = Some(denominator);
        self
    }

    /// Set the velocity window in days.
    pub fn velocity_period_days(mut self, days: u32) -> Self {
        self.velocity_period_days = Some(days);
        self
    }

    /// Build the configuration.
    ///
    /// Returns a validated `QualityConfig` or an error if validation fails.
    pub fn build(self) -> Result<QualityConfig, ConfigValidationError> {
        let defaults = MetricParams::default();
        let config = QualityConfig {
            weights: self.weights.unwrap_or_default(),
            column_criticality: self
                .column_criticality
                .unwrap_or_else(default_column_criticality),
            params: MetricParams {
                uniqueness_column: self.uniqueness_column.unwrap_or(defaults.uniqueness_column),
                date_column: self.date_column.unwrap_or(defaults.date_column),
                date_format: self.date_format.unwrap_or(defaults.date_format),
                freshness_threshold_days: self
                    .freshness_threshold_days
                    .unwrap_or(defaults.freshness_threshold_days),
                freshness_sample_size: self
                    .freshness_sample_size
                    .unwrap_or(defaults.freshness_sample_size),
                freshness_denominator: self.freshness_denominator.unwrap_or_default(),
                velocity_period_days: self
                    .velocity_period_days
                    .unwrap_or(defaults.velocity_period_days),
            },
        };

        config.validate()?;
        Ok(config)
    }
}
