//! Trait for forecast accuracy evaluation

use crate::model::AccuracyReport;

/// Back-tests a forecasting model against its own history
pub trait AccuracyEvaluator: Send + Sync {
    /// Evaluate accuracy over the full history
    fn evaluate(&self, values: &[f64]) -> AccuracyReport;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Mock implementation: naive last-value forecast scored on the final point
    struct LastValueEvaluator;

    impl AccuracyEvaluator for LastValueEvaluator {
        fn evaluate(&self, values: &[f64]) -> AccuracyReport {
            match values {
                [.., prev, last] if *last > 0.0 => AccuracyReport {
                    mape: Some((prev - last).abs() / last * 100.0),
                    data_points_used: values.len(),
                    r_squared: None,
                },
                _ => AccuracyReport::unavailable(values.len()),
            }
        }
    }

    #[test]
    fn test_last_value_evaluator() {
        let report = LastValueEvaluator.evaluate(&[90.0, 100.0]);
        assert_eq!(report.mape, Some(10.0));
        assert_eq!(report.data_points_used, 2);
    }

    #[test]
    fn test_absent_is_not_zero() {
        let report = LastValueEvaluator.evaluate(&[5.0]);
        assert_eq!(report.mape, None);
        assert_ne!(report.mape, Some(0.0));
    }
}
