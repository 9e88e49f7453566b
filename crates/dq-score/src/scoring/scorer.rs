use crate::config::QualityConfig;
use crate::error::{QualityError, Result, ResultExt};
use crate::metrics::{
    self, ConsistencyOutcome, CriticalityOutcome, FreshnessOutcome, FreshnessParams,
    VelocityOutcome,
};
use crate::types::MetricScores;
use chrono::NaiveDateTime;
use polars::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

/// Diagnostics behind the scores that can degrade on bad input.
#[derive(Debug, Clone, Serialize)]
pub struct MetricDetails {
    pub consistency: ConsistencyOutcome,
    pub freshness: FreshnessOutcome,
    pub velocity: VelocityOutcome,
    pub criticality: CriticalityOutcome,
}

/// Result of scoring one dataset.
#[derive(Debug, Clone, Serialize)]
pub struct QualityAssessment {
    /// (rows, columns) of the scored table.
    pub shape: (usize, usize),
    /// The "now" used by freshness and velocity.
    pub reference_time: NaiveDateTime,
    pub scores: MetricScores,
    pub overall: f64,
    pub details: MetricDetails,
}

/// Runs all six metrics over a table and combines them.
///
/// # Example
///
/// ```rust,ignore
/// use dq_score::{QualityConfig, QualityScorer, dataset};
///
/// let scorer = QualityScorer::new(QualityConfig::default())?;
/// let assessment = scorer.score(&dataset::sample_customers()?, now)?;
/// println!("{:.2}", assessment.overall);
/// ```
#[derive(Debug, Clone)]
pub struct QualityScorer {
    config: QualityConfig,
}

impl QualityScorer {
    /// Create a scorer, validating the configuration once.
    pub fn new(config: QualityConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &QualityConfig {
        &self.config
    }

    /// Score a table against a fixed reference time.
    ///
    /// Empty tables are rejected up front.
    pub fn score(&self, df: &DataFrame, now: NaiveDateTime) -> Result<QualityAssessment> {
        if df.height() == 0 || df.width() == 0 {
            return Err(QualityError::EmptyDataset {
                rows: df.height(),
                columns: df.width(),
            });
        }

        let params = &self.config.params;
        debug!(
            "Scoring {} rows x {} columns as of {}",
            df.height(),
            df.width(),
            now
        );

        let completeness = metrics::completeness(df);
        debug!("completeness = {:.4}", completeness);

        let uniqueness = metrics::uniqueness(df, &params.uniqueness_column)
            .context("Computing uniqueness")?;
        debug!(
            "uniqueness({}) = {:.4}",
            params.uniqueness_column, uniqueness
        );

        let consistency = metrics::consistency(df, &params.date_column, &params.date_format)
            .context("Computing consistency")?;
        debug!(
            "consistency({}) = {:.4}",
            params.date_column,
            consistency.score()
        );

        let freshness = metrics::freshness(
            df,
            &params.date_column,
            FreshnessParams {
                format: &params.date_format,
                threshold_days: params.freshness_threshold_days,
                sample_size: params.freshness_sample_size,
                denominator: params.freshness_denominator,
                now,
            },
        )
        .context("Computing freshness")?;
        debug!("freshness = {:.4} ({:?})", freshness.score(), freshness);

        let velocity = metrics::velocity(
            df,
            &params.date_column,
            &params.date_format,
            params.velocity_period_days,
            now,
        )
        .context("Computing velocity")?;
        debug!(
            "velocity = {:.4} ({} of {} rows recent)",
            velocity.score(),
            velocity.recent_rows,
            velocity.total_rows
        );

        let criticality = metrics::criticality(df, &self.config.column_criticality)
            .context("Computing criticality")?;
        debug!("criticality = {:.4}", criticality.score());

        let scores = MetricScores {
            completeness,
            uniqueness,
            consistency: consistency.score(),
            freshness: freshness.score(),
            velocity: velocity.score(),
            criticality: criticality.score(),
        };

        let overall = self.config.weights.combine(&scores)?;
        info!("Overall weighted score: {:.4}", overall);

        Ok(QualityAssessment {
            shape: (df.height(), df.width()),
            reference_time: now,
            scores,
            overall,
            details: MetricDetails {
                consistency,
                freshness,
                velocity,
                criticality,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScoreWeights;
    use crate::dataset::sample_customers;
    use chrono::{NaiveDate, NaiveTime};

    fn at(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_score_sample_dataset() {
        let scorer = QualityScorer::new(QualityConfig::default()).unwrap();
        let df = sample_customers().unwrap();
        let assessment = scorer.score(&df, at(2021, 1, 20)).unwrap();

        let s = assessment.scores;
        assert!(close(s.completeness, 22.0 / 24.0));
        assert!(close(s.uniqueness, 5.0 / 6.0));
        assert!(close(s.consistency, 1.0));
        assert!(close(s.freshness, 0.6));
        assert!(close(s.velocity, 0.5));
        assert!(close(s.criticality, 4.0 / 4.5));
        assert!((assessment.overall - 0.819_722).abs() < 1e-6);
        assert_eq!(assessment.shape, (6, 4));
    }

    #[test]
    fn test_score_sample_dataset_far_future() {
        let scorer = QualityScorer::new(QualityConfig::default()).unwrap();
        let df = sample_customers().unwrap();
        let assessment = scorer.score(&df, at(2026, 10, 19)).unwrap();

        assert_eq!(assessment.scores.freshness, 0.0);
        assert_eq!(assessment.scores.velocity, 0.0);
        assert!(assessment.overall > 0.0 && assessment.overall < 1.0);
    }

    #[test]
    fn test_score_rejects_empty_dataset() {
        let scorer = QualityScorer::new(QualityConfig::default()).unwrap();
        let df = df![
            "Name" => Vec::<String>::new(),
            "SignupDate" => Vec::<String>::new(),
        ]
        .unwrap();
        let err = scorer.score(&df, at(2021, 1, 20)).unwrap_err();
        assert!(matches!(
            err,
            QualityError::EmptyDataset {
                rows: 0,
                columns: 2
            }
        ));
    }

    #[test]
    fn test_score_missing_uniqueness_column() {
        let config = QualityConfig::builder()
            .uniqueness_column("Phone")
            .build()
            .unwrap();
        let scorer = QualityScorer::new(config).unwrap();
        let err = scorer
            .score(&sample_customers().unwrap(), at(2021, 1, 20))
            .unwrap_err();
        assert_eq!(err.error_code(), "COLUMN_NOT_FOUND");
        assert!(err.to_string().contains("Computing uniqueness"));
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let mut config = QualityConfig::default();
        config.weights = ScoreWeights {
            completeness: 1.0,
            ..ScoreWeights::default()
        };
        let err = QualityScorer::new(config).unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_score_does_not_modify_table() {
        let scorer = QualityScorer::new(QualityConfig::default()).unwrap();
        let df = sample_customers().unwrap();
        let before = df.clone();
        let first = scorer.score(&df, at(2021, 1, 20)).unwrap();
        let second = scorer.score(&df, at(2021, 1, 20)).unwrap();
        assert!(df.equals_missing(&before));
        assert_eq!(first.scores, second.scores);
    }
}
