//! Integration tests for spend-forecast

use approx::{assert_abs_diff_eq, assert_relative_eq};
use spend_forecast_facade::trend::fit_trend;
use spend_forecast_facade::{
    ForecastGenerator, HoldoutEvaluator, MonthlyIndexDetector, MonthlySpendPoint,
    SeasonalityDetector, TrendDirection, TrendEstimator, OlsTrendEstimator, AccuracyEvaluator,
    YearMonth,
};

fn series_from(start: (i32, u32), values: &[f64]) -> Vec<MonthlySpendPoint> {
    let start = YearMonth::new(start.0, start.1).unwrap();
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| MonthlySpendPoint::new(start.add_months(i as u32), v, 25))
        .collect()
}

fn sample_data() -> Vec<f64> {
    vec![
        4200.0, 3900.0, 4400.0, 4600.0, 4100.0, 4800.0, 5000.0, 4700.0, 5200.0, 5100.0, 5600.0,
        7400.0, 5300.0, 5100.0, 5700.0, 5900.0, 5400.0, 6100.0,
    ]
}

#[test]
fn test_equal_values_are_flat_and_stable() {
    for n in [2, 5, 12, 30] {
        let data = vec![750.0; n];
        let estimator = OlsTrendEstimator::new();
        let trend = estimator.estimate(&data);

        assert_abs_diff_eq!(trend.slope, 0.0, epsilon = 1e-9);
        assert_eq!(trend.r_squared, 0.0);
        assert_eq!(estimator.direction(&trend, &data), TrendDirection::Stable);
    }
}

#[test]
fn test_linear_series_recovered() {
    for (a, b) in [(100.0, 7.5), (5000.0, -40.0), (0.0, 1.0)] {
        let data: Vec<f64> = (0..15).map(|i| a + b * i as f64).collect();
        let trend = fit_trend(&data);

        assert_relative_eq!(trend.slope, b, epsilon = 1e-9);
        assert_abs_diff_eq!(trend.intercept, a, epsilon = 1e-9);
        assert_relative_eq!(trend.r_squared, 1.0, epsilon = 1e-9);
    }
}

#[test]
fn test_forecast_points_ordered_and_non_negative() {
    let generator = ForecastGenerator::new();
    let histories = vec![
        sample_data(),
        vec![900.0, 700.0, 500.0, 300.0, 100.0],
        vec![0.0, 0.0, 10.0, 0.0],
        vec![50.0, 5000.0, 20.0, 4000.0, 10.0, 3000.0, 0.0, 2500.0, 10.0, 2000.0, 5.0, 1500.0],
    ];

    for values in histories {
        let history = series_from((2023, 1), &values);
        let result = generator.generate(&history, 24).unwrap();
        assert_eq!(result.forecast.len(), 24);
        for point in &result.forecast {
            assert!(point.predicted_spend >= 0.0);
            assert!(point.lower_bound_95 >= 0.0);
            assert!(point.is_well_ordered(), "bad ordering: {:?}", point);
        }
    }
}

#[test]
fn test_seasonal_factors_average_to_one() {
    let history = series_from((2022, 7), &sample_data());
    let analysis = MonthlyIndexDetector::new().detect(&history);

    assert!(!analysis.profile.is_empty());
    let mean: f64 =
        analysis.profile.iter().map(|(_, f)| f).sum::<f64>() / analysis.profile.len() as f64;
    assert_relative_eq!(mean, 1.0, epsilon = 1e-12);
}

#[test]
fn test_mape_presence_by_length() {
    let evaluator = HoldoutEvaluator::new();
    let data = sample_data();

    for n in 0..6 {
        assert_eq!(evaluator.evaluate(&data[..n]).mape, None, "n = {}", n);
    }
    for n in 6..=data.len() {
        assert!(evaluator.evaluate(&data[..n]).mape.is_some(), "n = {}", n);
    }
}

#[test]
fn test_accuracy_reports_full_length() {
    let history = series_from((2023, 1), &sample_data());
    let result = ForecastGenerator::new().generate(&history, 1).unwrap();

    assert_eq!(result.model_accuracy.data_points_used, 18);
    let r2 = result.model_accuracy.r_squared.unwrap();
    assert!((0.0..=1.0).contains(&r2));
}

#[test]
fn test_peak_months_reported_by_name() {
    let history = series_from((2023, 1), &sample_data());
    let result = ForecastGenerator::new().generate(&history, 12).unwrap();

    assert!(result.trend.seasonality_detected);
    assert_eq!(result.trend.peak_months.first().map(String::as_str), Some("December"));
    assert!(result.trend.peak_months.len() <= 3);
}
