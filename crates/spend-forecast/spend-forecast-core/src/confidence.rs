//! Confidence interval implementations
//!
//! Symmetric z-score bands around a point forecast, sized by the population
//! standard deviation of the history.

use spend_forecast_spi::{ConfidenceBounds, ConfidenceIntervalComputer};

use crate::stats::population_std_dev;

/// Z-score for the 80% band
pub const Z_80: f64 = 1.28;

/// Z-score for the 95% band
pub const Z_95: f64 = 1.96;

/// Z-score based confidence interval computer
#[derive(Debug, Clone)]
pub struct ZScoreIntervalComputer {
    z_80: f64,
    z_95: f64,
}

impl ZScoreIntervalComputer {
    pub fn new() -> Self {
        Self {
            z_80: Z_80,
            z_95: Z_95,
        }
    }

    /// Custom z-scores, clamped so that `0 <= z_80 <= z_95`
    ///
    /// A negative or NaN `z_80` becomes zero, and `z_95` never drops below
    /// `z_80`, so the bands stay nested.
    pub fn with_z_scores(z_80: f64, z_95: f64) -> Self {
        let z_80 = z_80.max(0.0);
        Self {
            z_80,
            z_95: z_95.max(z_80),
        }
    }
}

impl Default for ZScoreIntervalComputer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfidenceIntervalComputer for ZScoreIntervalComputer {
    fn compute(&self, history: &[f64], forecast: f64) -> ConfidenceBounds {
        confidence_bounds(history, forecast, self.z_80, self.z_95)
    }
}

/// Bands of `forecast ± z * std`, lower bounds floored at zero
///
/// Fewer than two historical points carry no dispersion, so every bound
/// collapses onto the forecast.
pub fn confidence_bounds(
    history: &[f64],
    forecast: f64,
    z_80: f64,
    z_95: f64,
) -> ConfidenceBounds {
    if history.len() < 2 {
        return ConfidenceBounds::degenerate(forecast);
    }

    let std_dev = population_std_dev(history);
    ConfidenceBounds {
        lower_80: (forecast - z_80 * std_dev).max(0.0),
        upper_80: forecast + z_80 * std_dev,
        lower_95: (forecast - z_95 * std_dev).max(0.0),
        upper_95: forecast + z_95 * std_dev,
    }
}
