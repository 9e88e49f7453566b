//! Weighted combination of the component scores.

use crate::config::{ConfigValidationError, ScoreWeights};
use crate::types::MetricScores;

impl ScoreWeights {
    /// Weighted sum of the six component scores.
    ///
    /// The weights are re-validated first; they are plain public fields and
    /// may have been edited after construction. No normalisation is applied.
    pub fn combine(&self, scores: &MetricScores) -> Result<f64, ConfigValidationError> {
        self.validate()?;
        Ok(scores
            .iter()
            .map(|(metric, score)| score * self.get(metric))
            .sum())
    }
}
