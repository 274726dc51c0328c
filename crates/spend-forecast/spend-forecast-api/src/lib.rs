//! Spend Forecast Consumer API
//!
//! Consumer configurations and builder APIs for the forecasting engine.
//!
//! This crate provides:
//! - Configuration types for every forecasting component
//! - Builders turning a configuration into a ready generator or projector
//! - Re-exports from SPI and core for convenience

pub mod config;

// Re-export from core
pub use spend_forecast_core::{
    accuracy, budget, confidence, generator, seasonality, stats, trend, BudgetProjector,
    ForecastGenerator, HoldoutEvaluator, MonthlyIndexDetector, OlsTrendEstimator,
    ZScoreIntervalComputer,
};

// Re-export traits and models from SPI
pub use spend_forecast_spi::{
    AccuracyEvaluator, AccuracyReport, BudgetProjection, BudgetStatus, ConfidenceBounds,
    ConfidenceIntervalComputer, ForecastError, ForecastPoint, ForecastResult,
    MonthlySpendPoint, Result, SeasonalAnalysis, SeasonalProfile, SeasonalityDetector,
    TrendDescriptor, TrendDirection, TrendEstimator, TrendSummary, YearMonth,
};

pub use config::{
    AccuracyConfig, BudgetConfig, ConfidenceConfig, ForecastConfig, SeasonalityConfig,
    TrendConfig,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{BudgetConfig, ForecastConfig};
    pub use spend_forecast_core::{BudgetProjector, ForecastGenerator};
    pub use spend_forecast_spi::{
        AccuracyReport, BudgetProjection, BudgetStatus, ForecastError, ForecastPoint,
        ForecastResult, MonthlySpendPoint, TrendDirection, TrendSummary, YearMonth,
    };
}
