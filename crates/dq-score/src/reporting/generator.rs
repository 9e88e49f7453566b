use crate::config::ScoreWeights;
use crate::error::Result;
use crate::scoring::{MetricDetails, QualityAssessment};
use crate::types::MetricScores;
use chrono::{Local, NaiveDateTime};
use serde::Serialize;

/// Label of the final line of the text report.
pub const OVERALL_LABEL: &str = "Overall Weighted Score";

// ============================================================================
// Report Types
// ============================================================================

/// Full report for JSON output (`--json`).
#[derive(Debug, Clone, Serialize)]
pub struct QualityReport {
    // Metadata
    /// Timestamp when the report was generated
    pub generated_at: String,
    /// Where the table came from (file path or "sample")
    pub input: String,
    /// Rows in the scored table
    pub rows: usize,
    /// Columns in the scored table
    pub columns: usize,
    /// Reference time used by freshness and velocity
    pub reference_time: NaiveDateTime,

    // Scores
    pub scores: MetricScores,
    pub overall: f64,
    pub weights: ScoreWeights,

    /// Per-metric diagnostics
    pub details: MetricDetails,
}

/// Renders a [`QualityAssessment`] for the console.
pub struct ReportGenerator;

impl ReportGenerator {
    /// Seven `"<Metric Name>: <value>"` lines in fixed order, two decimals each.
    pub fn render_text(assessment: &QualityAssessment) -> String {
        let mut out = String::new();
        for (metric, score) in assessment.scores.iter() {
            out.push_str(&format!("{}: {:.2}\n", metric.display_name(), score));
        }
        out.push_str(&format!("{}: {:.2}\n", OVERALL_LABEL, assessment.overall));
        out
    }

    /// Assemble the serializable report.
    pub fn build_report(
        input: &str,
        assessment: &QualityAssessment,
        weights: &ScoreWeights,
    ) -> QualityReport {
        QualityReport {
            generated_at: Local::now().to_rfc3339(),
            input: input.to_string(),
            rows: assessment.shape.0,
            columns: assessment.shape.1,
            reference_time: assessment.reference_time,
            scores: assessment.scores,
            overall: assessment.overall,
            weights: *weights,
            details: assessment.details.clone(),
        }
    }

    /// Pretty-printed JSON for a report.
    pub fn render_json(report: &QualityReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}
