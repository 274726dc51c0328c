//! Basic example: forecast a year of spend and project the budget
//!
//! Run with: RUST_LOG=debug cargo run --example basic -p spend-forecast-facade

use chrono::NaiveDate;
use spend_forecast_facade::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "spend_forecast_core=info".into()),
        )
        .init();

    println!("=== spend-forecast Basic Example ===\n");

    // Two years of monthly spend with a year-end peak
    let start = YearMonth::new(2024, 1)?;
    let history: Vec<MonthlySpendPoint> = (0..22)
        .map(|i| {
            let seasonal = if i % 12 == 11 { 1.6 } else { 1.0 };
            let amount = (8_000.0 + 120.0 * i as f64) * seasonal;
            MonthlySpendPoint::new(start.add_months(i), amount, 150 + i as u64)
        })
        .collect();

    // 1. Forecast
    let generator = ForecastConfig::default().build();
    let result = generator.generate(&history, 6)?;

    println!("1. Forecast (6 months)");
    for point in &result.forecast {
        println!(
            "   {}  {:>10.2}  80% [{:>10.2}, {:>10.2}]  95% [{:>10.2}, {:>10.2}]",
            point.month,
            point.predicted_spend,
            point.lower_bound_80,
            point.upper_bound_80,
            point.lower_bound_95,
            point.upper_bound_95
        );
    }
    println!(
        "   trend: {:?}, change/month {:.2}%, seasonal: {}, peaks: {:?}\n",
        result.trend.direction,
        result.trend.monthly_change_rate * 100.0,
        result.trend.seasonality_detected,
        result.trend.peak_months
    );

    // 2. Budget projection as of a caller-supplied date
    let projector = BudgetConfig::default().build(&ForecastConfig::default());
    let today = NaiveDate::from_ymd_opt(2025, 10, 19).ok_or("invalid date")?;
    let projection = projector.project_as_of(110_000.0, &history, today)?;

    println!("2. Budget projection as of {}", today);
    println!("{}", serde_json::to_string_pretty(&projection)?);

    println!("\n=== Example Complete ===");
    Ok(())
}
