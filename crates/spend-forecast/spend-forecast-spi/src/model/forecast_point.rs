//! Forecast point model

use serde::{Deserialize, Serialize};

use super::{ConfidenceBounds, YearMonth};

/// Predicted spend for one future month with its bands
///
/// Ordering holds: `lower_bound_95 <= lower_bound_80 <= predicted_spend
/// <= upper_bound_80 <= upper_bound_95`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub month: YearMonth,
    pub predicted_spend: f64,
    pub lower_bound_80: f64,
    pub upper_bound_80: f64,
    pub lower_bound_95: f64,
    pub upper_bound_95: f64,
}

impl ForecastPoint {
    pub fn new(month: YearMonth, predicted_spend: f64, bounds: ConfidenceBounds) -> Self {
        Self {
            month,
            predicted_spend,
            lower_bound_80: bounds.lower_80,
            upper_bound_80: bounds.upper_80,
            lower_bound_95: bounds.lower_95,
            upper_bound_95: bounds.upper_95,
        }
    }

    /// Whether the band ordering holds
    pub fn is_well_ordered(&self) -> bool {
        self.lower_bound_95 <= self.lower_bound_80
            && self.lower_bound_80 <= self.predicted_spend
            && self.predicted_spend <= self.upper_bound_80
            && self.upper_bound_80 <= self.upper_bound_95
    }
}
