//! Spend Forecast Core
//!
//! Core implementations for trend estimation, seasonality detection,
//! confidence bands, holdout accuracy, forecast generation, and budget
//! projection. Every component is a pure function of its inputs.

pub mod accuracy;
pub mod budget;
pub mod confidence;
pub mod generator;
pub mod seasonality;
pub mod stats;
pub mod trend;

// Re-export SPI traits and models for implementations
pub use spend_forecast_spi::{
    AccuracyEvaluator, AccuracyReport, BudgetProjection, BudgetStatus, ConfidenceBounds,
    ConfidenceIntervalComputer, ForecastError, ForecastPoint, ForecastResult,
    MonthlySpendPoint, Result, SeasonalAnalysis, SeasonalProfile, SeasonalityDetector,
    TrendDescriptor, TrendDirection, TrendEstimator, TrendSummary, YearMonth,
};

// Re-export main types
pub use accuracy::HoldoutEvaluator;
pub use budget::BudgetProjector;
pub use confidence::ZScoreIntervalComputer;
pub use generator::ForecastGenerator;
pub use seasonality::MonthlyIndexDetector;
pub use trend::OlsTrendEstimator;
