//! Linear trend estimation
//!
//! Ordinary least squares fit of spend against the month index, and the
//! direction classification used in summaries and budget projections.

use spend_forecast_spi::{TrendDescriptor, TrendDirection, TrendEstimator};

use crate::stats::mean;

/// Relative slope below which a trend is considered stable (1% of mean)
pub const DEFAULT_STABILITY_BAND: f64 = 0.01;

/// OLS trend estimator
#[derive(Debug, Clone)]
pub struct OlsTrendEstimator {
    stability_band: f64,
}

impl OlsTrendEstimator {
    pub fn new() -> Self {
        Self {
            stability_band: DEFAULT_STABILITY_BAND,
        }
    }

    pub fn with_stability_band(stability_band: f64) -> Self {
        Self { stability_band }
    }

    pub fn stability_band(&self) -> f64 {
        self.stability_band
    }
}

impl Default for OlsTrendEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl TrendEstimator for OlsTrendEstimator {
    fn estimate(&self, values: &[f64]) -> TrendDescriptor {
        fit_trend(values)
    }

    fn direction(&self, trend: &TrendDescriptor, values: &[f64]) -> TrendDirection {
        classify_direction(trend.slope, mean(values), self.stability_band)
    }
}

/// Fit `y = intercept + slope * x` with `x = 0, 1, 2, ...`
pub fn fit_trend(values: &[f64]) -> TrendDescriptor {
    if values.len() < 2 {
        return TrendDescriptor::flat(values.first().copied().unwrap_or(0.0));
    }

    let n = values.len() as f64;
    let sum_x: f64 = (0..values.len()).map(|i| i as f64).sum();
    let sum_y: f64 = values.iter().sum();
    let sum_xy: f64 = values.iter().enumerate().map(|(i, &y)| i as f64 * y).sum();
    let sum_x2: f64 = (0..values.len()).map(|i| (i as f64).powi(2)).sum();

    let denominator = n * sum_x2 - sum_x * sum_x;
    if denominator == 0.0 {
        return TrendDescriptor::flat(sum_y / n);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;

    let mean_y = sum_y / n;
    let ss_tot: f64 = values.iter().map(|&y| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = values
        .iter()
        .enumerate()
        .map(|(i, &y)| (y - (intercept + slope * i as f64)).powi(2))
        .sum();

    // a flat series has nothing to explain
    let r_squared = if ss_tot == 0.0 {
        0.0
    } else {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    };

    TrendDescriptor::new(slope, intercept, r_squared)
}

/// Classify a slope against the mean level of the series
///
/// A slope of exactly zero is always stable, including for an all-zero series.
pub fn classify_direction(slope: f64, mean: f64, stability_band: f64) -> TrendDirection {
    if slope == 0.0 || slope.abs() < stability_band * mean {
        TrendDirection::Stable
    } else if slope > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    }
}

/// Slope relative to the mean, or 0.0 when the mean is zero
pub fn monthly_change_rate(slope: f64, mean: f64) -> f64 {
    if mean == 0.0 {
        0.0
    } else {
        slope / mean
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_perfect_linear_fit() {
        let data: Vec<f64> = (0..10).map(|i| 10.0 + 2.0 * i as f64).collect();
        let trend = fit_trend(&data);

        assert_relative_eq!(trend.slope, 2.0, epsilon = 1e-10);
        assert_relative_eq!(trend.intercept, 10.0, epsilon = 1e-10);
        assert_relative_eq!(trend.r_squared, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_flat_series() {
        let trend = fit_trend(&[250.0; 8]);
        assert_abs_diff_eq!(trend.slope, 0.0, epsilon = 1e-12);
        assert_relative_eq!(trend.intercept, 250.0, epsilon = 1e-10);
        assert_eq!(trend.r_squared, 0.0);
    }

    #[test]
    fn test_short_series() {
        assert_eq!(fit_trend(&[]), TrendDescriptor::flat(0.0));
        assert_eq!(fit_trend(&[42.0]), TrendDescriptor::flat(42.0));
    }

    #[test]
    fn test_two_points() {
        let trend = fit_trend(&[100.0, 150.0]);
        assert_relative_eq!(trend.slope, 50.0);
        assert_relative_eq!(trend.intercept, 100.0);
        assert_relative_eq!(trend.r_squared, 1.0);
    }

    #[test]
    fn test_noisy_series() {
        let data = [100.0, 110.0, 120.0, 130.0, 140.0, 150.0, 160.0, 170.0, 190.0, 200.0];
        let trend = fit_trend(&data);
        // Sxy = 905, Sxx = 82.5
        assert_relative_eq!(trend.slope, 905.0 / 82.5, epsilon = 1e-9);
        assert_relative_eq!(trend.intercept, 147.0 - 4.5 * 905.0 / 82.5, epsilon = 1e-9);
        assert!(trend.r_squared > 0.98 && trend.r_squared < 1.0);
    }

    #[test]
    fn test_classify_direction() {
        assert_eq!(classify_direction(5.0, 100.0, 0.01), TrendDirection::Increasing);
        assert_eq!(classify_direction(-5.0, 100.0, 0.01), TrendDirection::Decreasing);
        assert_eq!(classify_direction(0.5, 100.0, 0.01), TrendDirection::Stable);
        assert_eq!(classify_direction(-0.99, 100.0, 0.01), TrendDirection::Stable);
        assert_eq!(classify_direction(2.0, 100.0, 0.01), TrendDirection::Increasing);
        assert_eq!(classify_direction(0.0, 0.0, 0.01), TrendDirection::Stable);
    }

    #[test]
    fn test_estimator_uses_band() {
        let data: Vec<f64> = (0..6).map(|i| 1000.0 + 5.0 * i as f64).collect();
        let trend = fit_trend(&data);

        let default = OlsTrendEstimator::new();
        assert_eq!(default.direction(&trend, &data), TrendDirection::Stable);

        let tight = OlsTrendEstimator::with_stability_band(0.001);
        assert_eq!(tight.direction(&trend, &data), TrendDirection::Increasing);
    }

    #[test]
    fn test_monthly_change_rate() {
        assert_eq!(monthly_change_rate(10.0, 200.0), 0.05);
        assert_eq!(monthly_change_rate(10.0, 0.0), 0.0);
    }
}
