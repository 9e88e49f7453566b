//! Data Quality Scoring Library
//!
//! Computes a composite quality score for an in-memory tabular dataset,
//! built with Rust and Polars.
//!
//! # Overview
//!
//! Six independent metrics, each in [0, 1]:
//!
//! - **Completeness**: share of non-null cells
//! - **Uniqueness**: distinct values of one column over the row count
//! - **Consistency**: share of values matching the expected date format
//! - **Freshness**: share of the most recent values inside a staleness threshold
//! - **Velocity**: share of rows dated inside a recent window
//! - **Criticality**: business-weighted completeness of selected columns
//!
//! are combined with weights summing to 1.0 into an overall score.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use dq_score::{QualityConfig, QualityScorer, ReportGenerator, dataset};
//! use chrono::Local;
//!
//! let df = dataset::load_csv("customers.csv")?;
//!
//! let config = QualityConfig::builder()
//!     .uniqueness_column("Email")
//!     .freshness_threshold_days(90)
//!     .build()?;
//!
//! let assessment = QualityScorer::new(config)?.score(&df, Local::now().naive_local())?;
//! print!("{}", ReportGenerator::render_text(&assessment));
//! ```
//!
//! The reference time is always passed in explicitly, so freshness and
//! velocity are reproducible for a fixed "now".

pub mod config;
pub mod dataset;
pub mod error;
pub mod metrics;
pub mod reporting;
pub mod scoring;
pub mod types;
pub mod utils;

// Re-exports for convenient access
pub use config::{
    ConfigValidationError, FreshnessDenominator, MetricParams, QualityConfig,
    QualityConfigBuilder, ScoreWeights,
};
pub use error::{QualityError, Result as QualityResult, ResultExt};
pub use reporting::{QualityReport, ReportGenerator};
pub use scoring::{MetricDetails, QualityAssessment, QualityScorer};
pub use types::{Metric, MetricScores};
