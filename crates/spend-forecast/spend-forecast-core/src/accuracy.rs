//! Holdout accuracy evaluation
//!
//! Refits the trend on all but the last few points and scores the
//! extrapolation against the held-out actuals with MAPE.

use spend_forecast_spi::{AccuracyEvaluator, AccuracyReport, ForecastError, Result};
use tracing::trace;

use crate::trend::fit_trend;

/// Points required before a holdout test is run
pub const DEFAULT_MIN_POINTS: usize = 6;

/// Number of trailing points held out for testing
pub const DEFAULT_HOLDOUT: usize = 3;

/// Trend back-test over a trailing holdout window
#[derive(Debug, Clone)]
pub struct HoldoutEvaluator {
    min_points: usize,
    holdout: usize,
}

impl HoldoutEvaluator {
    pub fn new() -> Self {
        Self {
            min_points: DEFAULT_MIN_POINTS,
            holdout: DEFAULT_HOLDOUT,
        }
    }

    /// Custom thresholds; `min_points` is raised to at least `holdout + 1`
    pub fn with_window(min_points: usize, holdout: usize) -> Self {
        let holdout = holdout.max(1);
        Self {
            min_points: min_points.max(holdout + 1),
            holdout,
        }
    }
}

impl Default for HoldoutEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl AccuracyEvaluator for HoldoutEvaluator {
    fn evaluate(&self, values: &[f64]) -> AccuracyReport {
        let mape = match holdout_split(values, self.min_points, self.holdout) {
            Ok((train, test)) => holdout_mape(train, test),
            Err(err) => {
                trace!(%err, "accuracy evaluation skipped");
                None
            }
        };

        AccuracyReport {
            mape,
            data_points_used: values.len(),
            r_squared: None,
        }
    }
}

/// Split into `(train, test)` with the last `holdout` points as test
pub fn holdout_split(
    values: &[f64],
    min_points: usize,
    holdout: usize,
) -> Result<(&[f64], &[f64])> {
    if values.len() < min_points || values.len() <= holdout {
        return Err(ForecastError::InsufficientData {
            required: min_points.max(holdout + 1),
            actual: values.len(),
        });
    }
    Ok(values.split_at(values.len() - holdout))
}

/// MAPE of a train-only trend extrapolated over `test`
///
/// Only actuals above zero are scored; `None` when none qualify.
pub fn holdout_mape(train: &[f64], test: &[f64]) -> Option<f64> {
    let trend = fit_trend(train);
    let errors: Vec<f64> = test
        .iter()
        .enumerate()
        .filter(|&(_, &actual)| actual > 0.0)
        .map(|(i, &actual)| {
            let predicted = trend.value_at((train.len() + i) as f64);
            (predicted - actual).abs() / actual * 100.0
        })
        .collect();

    if errors.is_empty() {
        None
    } else {
        Some(errors.iter().sum::<f64>() / errors.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_too_few_points() {
        let report = HoldoutEvaluator::new().evaluate(&[100.0, 110.0, 120.0, 130.0, 140.0]);
        assert_eq!(report.mape, None);
        assert_eq!(report.data_points_used, 5);
    }

    #[test]
    fn test_perfect_linear_has_zero_error() {
        let data: Vec<f64> = (0..8).map(|i| 100.0 + 10.0 * i as f64).collect();
        let report = HoldoutEvaluator::new().evaluate(&data);
        assert_relative_eq!(report.mape.unwrap(), 0.0, epsilon = 1e-9);
        assert_eq!(report.data_points_used, 8);
    }

    #[test]
    fn test_known_error() {
        // train [100, 100, 100] predicts 100; test actuals 50, 100, 200
        let data = [100.0, 100.0, 100.0, 50.0, 100.0, 200.0];
        let report = HoldoutEvaluator::new().evaluate(&data);
        let expected = (100.0 + 0.0 + 50.0) / 3.0;
        assert_relative_eq!(report.mape.unwrap(), expected);
    }

    #[test]
    fn test_zero_actuals_skipped() {
        let data = [100.0, 100.0, 100.0, 0.0, 0.0, 80.0];
        let report = HoldoutEvaluator::new().evaluate(&data);
        assert_relative_eq!(report.mape.unwrap(), 25.0);
    }

    #[test]
    fn test_all_zero_actuals_absent() {
        let data = [100.0, 100.0, 100.0, 0.0, 0.0, 0.0];
        assert_eq!(HoldoutEvaluator::new().evaluate(&data).mape, None);
    }

    #[test]
    fn test_train_only_fit() {
        // full-series trend would be pulled up by the jump; train-only stays flat
        let data = [10.0, 10.0, 10.0, 10.0, 20.0, 20.0, 20.0];
        let (train, test) = holdout_split(&data, 6, 3).unwrap();
        assert_eq!(train, &[10.0, 10.0, 10.0, 10.0]);
        assert_eq!(test, &[20.0, 20.0, 20.0]);
        assert_relative_eq!(holdout_mape(train, test).unwrap(), 50.0);
    }

    #[test]
    fn test_split_error() {
        let err = holdout_split(&[1.0, 2.0], 6, 3).unwrap_err();
        assert_eq!(
            err,
            ForecastError::InsufficientData {
                required: 6,
                actual: 2
            }
        );
    }

    #[test]
    fn test_custom_window() {
        let evaluator = HoldoutEvaluator::with_window(3, 1);
        let report = evaluator.evaluate(&[100.0, 100.0, 150.0]);
        // train [100, 100] predicts 100 against actual 150
        assert_relative_eq!(report.mape.unwrap(), 50.0 / 150.0 * 100.0);
    }
}
