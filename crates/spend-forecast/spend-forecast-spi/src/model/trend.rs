//! Trend model

use serde::{Deserialize, Serialize};

/// Degree-1 least-squares fit of spend against the month index
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TrendDescriptor {
    /// Change in spend per month
    pub slope: f64,
    /// Fitted spend at index 0
    pub intercept: f64,
    /// Coefficient of determination, 0.0 to 1.0
    pub r_squared: f64,
}

impl TrendDescriptor {
    pub fn new(slope: f64, intercept: f64, r_squared: f64) -> Self {
        Self {
            slope,
            intercept,
            r_squared,
        }
    }

    /// Flat line through `level` with no explanatory power
    pub fn flat(level: f64) -> Self {
        Self::new(0.0, level, 0.0)
    }

    /// Fitted value at time index `t`
    pub fn value_at(&self, t: f64) -> f64 {
        self.intercept + self.slope * t
    }
}

/// Trend direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}
