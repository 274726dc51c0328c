//! Forecast configuration types.
//!
//! Every section deserializes with defaults for missing fields, so a
//! partial document overrides only what it names.

use serde::{Deserialize, Serialize};
use spend_forecast_core::{
    accuracy, budget, confidence, generator, seasonality, trend, BudgetProjector,
    ForecastGenerator, HoldoutEvaluator, MonthlyIndexDetector, OlsTrendEstimator,
    ZScoreIntervalComputer,
};

// ============================================================================
// Trend Configuration
// ============================================================================

/// Trend classification configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Slope below this fraction of the mean is reported as stable.
    pub stability_band: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            stability_band: trend::DEFAULT_STABILITY_BAND,
        }
    }
}

// ============================================================================
// Seasonality Configuration
// ============================================================================

/// Seasonal index configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalityConfig {
    /// Minimum history length before seasonal factors are computed.
    pub min_points: usize,
    /// Factor a month must exceed to be reported as a peak.
    pub peak_threshold: f64,
    /// Maximum number of peak months reported.
    pub max_peak_months: usize,
}

impl Default for SeasonalityConfig {
    fn default() -> Self {
        Self {
            min_points: seasonality::DEFAULT_MIN_POINTS,
            peak_threshold: seasonality::DEFAULT_PEAK_THRESHOLD,
            max_peak_months: seasonality::DEFAULT_MAX_PEAK_MONTHS,
        }
    }
}

// ============================================================================
// Confidence Configuration
// ============================================================================

/// Confidence band configuration.
///
/// Built computers clamp the scores to `0 <= z_80 <= z_95`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Z-score for the 80% band.
    pub z_80: f64,
    /// Z-score for the 95% band.
    pub z_95: f64,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            z_80: confidence::Z_80,
            z_95: confidence::Z_95,
        }
    }
}

// ============================================================================
// Accuracy Configuration
// ============================================================================

/// Holdout accuracy configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccuracyConfig {
    /// Minimum history length before a holdout test runs.
    pub min_points: usize,
    /// Trailing points held out for testing.
    pub holdout: usize,
}

impl Default for AccuracyConfig {
    fn default() -> Self {
        Self {
            min_points: accuracy::DEFAULT_MIN_POINTS,
            holdout: accuracy::DEFAULT_HOLDOUT,
        }
    }
}

// ============================================================================
// Forecast Configuration
// ============================================================================

/// Configuration for the forecast generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastConfig {
    pub trend: TrendConfig,
    pub seasonality: SeasonalityConfig,
    pub confidence: ConfidenceConfig,
    pub accuracy: AccuracyConfig,
    /// Longest accepted horizon in months.
    pub max_horizon: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            trend: TrendConfig::default(),
            seasonality: SeasonalityConfig::default(),
            confidence: ConfidenceConfig::default(),
            accuracy: AccuracyConfig::default(),
            max_horizon: generator::DEFAULT_MAX_HORIZON,
        }
    }
}

impl ForecastConfig {
    /// Build a generator wired with this configuration.
    pub fn build(&self) -> ForecastGenerator {
        ForecastGenerator::new()
            .with_trend_estimator(Box::new(OlsTrendEstimator::with_stability_band(
                self.trend.stability_band,
            )))
            .with_seasonality_detector(Box::new(
                MonthlyIndexDetector::new()
                    .with_min_points(self.seasonality.min_points)
                    .with_peak_threshold(self.seasonality.peak_threshold)
                    .with_max_peak_months(self.seasonality.max_peak_months),
            ))
            .with_interval_computer(Box::new(ZScoreIntervalComputer::with_z_scores(
                self.confidence.z_80,
                self.confidence.z_95,
            )))
            .with_accuracy_evaluator(Box::new(HoldoutEvaluator::with_window(
                self.accuracy.min_points,
                self.accuracy.holdout,
            )))
            .with_max_horizon(self.max_horizon)
    }
}

// ============================================================================
// Budget Configuration
// ============================================================================

/// Budget projection configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetConfig {
    /// Variance percentage at which a budget is flagged under or over.
    pub status_threshold_pct: f64,
}

impl Default for BudgetConfig {
    fn default() -> Self {
        Self {
            status_threshold_pct: budget::DEFAULT_STATUS_THRESHOLD_PCT,
        }
    }
}

impl BudgetConfig {
    /// Build a projector whose forecasts follow `forecast`.
    pub fn build(&self, forecast: &ForecastConfig) -> BudgetProjector {
        BudgetProjector::new()
            .with_generator(forecast.build())
            .with_status_threshold(self.status_threshold_pct)
    }
}
