//! Scoring module.
//!
//! [`QualityScorer`] runs the six metrics with a validated
//! [`QualityConfig`](crate::config::QualityConfig) and combines them into an
//! overall score using [`ScoreWeights::combine`](crate::config::ScoreWeights::combine).

mod aggregate;
mod scorer;

pub use scorer::{MetricDetails, QualityAssessment, QualityScorer};
