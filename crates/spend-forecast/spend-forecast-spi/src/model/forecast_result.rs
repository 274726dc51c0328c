//! Forecast output contract

use serde::{Deserialize, Serialize};

use super::{AccuracyReport, ForecastPoint, TrendDirection};

/// Human-facing summary of the fitted trend and seasonality
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendSummary {
    pub direction: TrendDirection,
    /// Slope relative to mean monthly spend
    pub monthly_change_rate: f64,
    pub seasonality_detected: bool,
    /// Peak month names, strongest first
    pub peak_months: Vec<String>,
}

impl Default for TrendSummary {
    fn default() -> Self {
        Self {
            direction: TrendDirection::Stable,
            monthly_change_rate: 0.0,
            seasonality_detected: false,
            peak_months: Vec::new(),
        }
    }
}

/// Complete result of a forecast run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ForecastResult {
    pub forecast: Vec<ForecastPoint>,
    pub trend: TrendSummary,
    pub model_accuracy: AccuracyReport,
}

impl ForecastResult {
    /// Defined result for an empty history
    pub fn empty() -> Self {
        Self::default()
    }

    /// Sum of predicted spend across the horizon
    pub fn total_predicted(&self) -> f64 {
        self.forecast.iter().map(|p| p.predicted_spend).sum()
    }
}
