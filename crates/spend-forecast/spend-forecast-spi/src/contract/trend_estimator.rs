//! Trait for trend estimation

use crate::model::{TrendDescriptor, TrendDirection};

/// Fits a trend to spend values indexed by month
pub trait TrendEstimator: Send + Sync {
    /// Fit a trend where index `i` of `values` is time step `i`
    fn estimate(&self, values: &[f64]) -> TrendDescriptor;

    /// Classify the direction of a fitted trend relative to `values`
    fn direction(&self, trend: &TrendDescriptor, values: &[f64]) -> TrendDirection;
}
