//! Confidence band model

use serde::{Deserialize, Serialize};

/// 80% and 95% bands around a single point forecast
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceBounds {
    pub lower_80: f64,
    pub upper_80: f64,
    pub lower_95: f64,
    pub upper_95: f64,
}

impl ConfidenceBounds {
    /// Zero-width bands collapsed onto the forecast
    pub fn degenerate(forecast: f64) -> Self {
        Self {
            lower_80: forecast,
            upper_80: forecast,
            lower_95: forecast,
            upper_95: forecast,
        }
    }
}
