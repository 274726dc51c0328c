//! Spend Forecast Service Provider Interface
//!
//! Defines the data model, error taxonomy, and one trait per forecasting
//! component (trend, seasonality, confidence bands, accuracy).

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{
    AccuracyEvaluator, ConfidenceIntervalComputer, SeasonalityDetector, TrendEstimator,
};
pub use error::{ForecastError, Result};
pub use model::{
    AccuracyReport, BudgetProjection, BudgetStatus, ConfidenceBounds, ForecastPoint,
    ForecastResult, MonthlySpendPoint, SeasonalAnalysis, SeasonalProfile, TrendDescriptor,
    TrendDirection, TrendSummary, YearMonth,
};
