//! Spend Forecast Facade
//!
//! High-level entry point for the spend forecasting engine. Re-exports all
//! public types from the forecast stack for convenient usage.
//!
//! ```rust
//! use spend_forecast_facade::prelude::*;
//!
//! let start = YearMonth::new(2024, 1).unwrap();
//! let history: Vec<MonthlySpendPoint> = (0..12)
//!     .map(|i| MonthlySpendPoint::new(start.add_months(i), 1000.0 + 25.0 * i as f64, 40))
//!     .collect();
//!
//! let result = ForecastConfig::default().build().generate(&history, 3).unwrap();
//! assert_eq!(result.forecast.len(), 3);
//! assert_eq!(result.trend.direction, TrendDirection::Increasing);
//! ```

// Re-export everything from API (which includes SPI and core)
pub use spend_forecast_api::*;

// Explicit re-exports for documentation
pub use spend_forecast_api::prelude;

// Re-export core modules for direct access
pub use spend_forecast_core::{accuracy, budget, confidence, generator, seasonality, stats, trend};

// Re-export SPI traits
pub use spend_forecast_spi::{
    AccuracyEvaluator, ConfidenceIntervalComputer, ForecastError, SeasonalityDetector,
    TrendEstimator,
};
