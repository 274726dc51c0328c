//! Model accuracy report

use serde::{Deserialize, Serialize};

/// Holdout accuracy of the trend model
///
/// `None` means "not computed", which is distinct from a zero error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AccuracyReport {
    /// Mean absolute percentage error over the holdout window
    pub mape: Option<f64>,
    /// Length of the full history, not just the holdout
    pub data_points_used: usize,
    /// Goodness of fit of the full-series trend
    pub r_squared: Option<f64>,
}

impl AccuracyReport {
    /// Report for a history too short to back-test
    pub fn unavailable(data_points_used: usize) -> Self {
        Self {
            mape: None,
            data_points_used,
            r_squared: None,
        }
    }

    pub fn with_r_squared(mut self, r_squared: Option<f64>) -> Self {
        self.r_squared = r_squared;
        self
    }
}
