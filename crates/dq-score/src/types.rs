use serde::{Deserialize, Serialize};
use std::fmt;

/// The six component metrics of the overall quality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Completeness,
    Uniqueness,
    Consistency,
    Freshness,
    Velocity,
    Criticality,
}

impl Metric {
    /// All metrics in report order.
    pub const ALL: [Metric; 6] = [
        Metric::Completeness,
        Metric::Uniqueness,
        Metric::Consistency,
        Metric::Freshness,
        Metric::Velocity,
        Metric::Criticality,
    ];

    /// Key used in configuration files and JSON output.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Completeness => "completeness",
            Metric::Uniqueness => "uniqueness",
            Metric::Consistency => "consistency",
            Metric::Freshness => "freshness",
            Metric::Velocity => "velocity",
            Metric::Criticality => "criticality",
        }
    }

    /// Label used in the text report.
    pub fn display_name(&self) -> &'static str {
        match self {
            Metric::Completeness => "Completeness Score",
            Metric::Uniqueness => "Uniqueness Score",
            Metric::Consistency => "Consistency Score",
            Metric::Freshness => "Freshness Score",
            Metric::Velocity => "Velocity Score",
            Metric::Criticality => "Criticality Score",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Component scores, each in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricScores {
    pub completeness: f64,
    pub uniqueness: f64,
    pub consistency: f64,
    pub freshness: f64,
    pub velocity: f64,
    pub criticality: f64,
}

impl MetricScores {
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

    /// Scores paired with their metric, in report order.
    pub fn iter(&self) -> impl Iterator<Item = (Metric, f64)> + '_ {
        Metric::ALL.into_iter().map(|m| (m, self.get(m)))
    }
}
