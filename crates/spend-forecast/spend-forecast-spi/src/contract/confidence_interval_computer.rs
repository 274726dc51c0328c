//! Trait for confidence interval computation

use crate::model::ConfidenceBounds;

/// Builds bands around a point forecast from historical dispersion
pub trait ConfidenceIntervalComputer: Send + Sync {
    /// Compute 80% and 95% bounds for `forecast` given the history
    fn compute(&self, history: &[f64], forecast: f64) -> ConfidenceBounds;
}
