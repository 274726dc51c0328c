//! Forecast generation
//!
//! Combines the trend, seasonal profile, and confidence bands into a
//! horizon of forecast points, and attaches the trend summary and
//! holdout accuracy.

use spend_forecast_spi::{
    AccuracyEvaluator, ConfidenceIntervalComputer, ForecastError, ForecastPoint, ForecastResult,
    MonthlySpendPoint, Result, SeasonalityDetector, TrendEstimator, TrendSummary,
};
use tracing::debug;

use crate::accuracy::HoldoutEvaluator;
use crate::confidence::ZScoreIntervalComputer;
use crate::seasonality::MonthlyIndexDetector;
use crate::stats::mean;
use crate::trend::{monthly_change_rate, OlsTrendEstimator};

/// Longest accepted forecast horizon in months
pub const DEFAULT_MAX_HORIZON: usize = 120;

/// Orchestrates the forecasting components
///
/// Holds configuration only; every call to [`ForecastGenerator::generate`]
/// is independent.
pub struct ForecastGenerator {
    trend: Box<dyn TrendEstimator>,
    seasonality: Box<dyn SeasonalityDetector>,
    intervals: Box<dyn ConfidenceIntervalComputer>,
    accuracy: Box<dyn AccuracyEvaluator>,
    max_horizon: usize,
}

impl ForecastGenerator {
    pub fn new() -> Self {
        Self {
            trend: Box::new(OlsTrendEstimator::new()),
            seasonality: Box::new(MonthlyIndexDetector::new()),
            intervals: Box::new(ZScoreIntervalComputer::new()),
            accuracy: Box::new(HoldoutEvaluator::new()),
            max_horizon: DEFAULT_MAX_HORIZON,
        }
    }

    pub fn with_trend_estimator(mut self, trend: Box<dyn TrendEstimator>) -> Self {
        self.trend = trend;
        self
    }

    pub fn with_seasonality_detector(
        mut self,
        seasonality: Box<dyn SeasonalityDetector>,
    ) -> Self {
        self.seasonality = seasonality;
        self
    }

    pub fn with_interval_computer(
        mut self,
        intervals: Box<dyn ConfidenceIntervalComputer>,
    ) -> Self {
        self.intervals = intervals;
        self
    }

    pub fn with_accuracy_evaluator(mut self, accuracy: Box<dyn AccuracyEvaluator>) -> Self {
        self.accuracy = accuracy;
        self
    }

    pub fn with_max_horizon(mut self, max_horizon: usize) -> Self {
        self.max_horizon = max_horizon;
        self
    }

    pub fn max_horizon(&self) -> usize {
        self.max_horizon
    }

    /// Reject horizons outside `1..=max_horizon`
    pub fn validate_horizon(&self, horizon: usize) -> Result<()> {
        if horizon == 0 || horizon > self.max_horizon {
            return Err(ForecastError::InvalidHorizon {
                horizon,
                max: self.max_horizon,
            });
        }
        Ok(())
    }

    /// Forecast `horizon` months past the end of `history`
    ///
    /// An empty history is a valid input and yields an empty forecast with a
    /// stable trend and no accuracy figures.
    pub fn generate(
        &self,
        history: &[MonthlySpendPoint],
        horizon: usize,
    ) -> Result<ForecastResult> {
        self.validate_horizon(horizon)?;
        Ok(self.generate_unchecked(history, horizon))
    }

    /// Forecast without the `max_horizon` check, for horizons the crate derives itself
    pub(crate) fn generate_unchecked(
        &self,
        history: &[MonthlySpendPoint],
        horizon: usize,
    ) -> ForecastResult {
        let last_period = match history.last() {
            Some(point) => point.period,
            None => {
                debug!(horizon, "empty history, returning empty forecast");
                return ForecastResult::empty();
            }
        };

        let values = MonthlySpendPoint::amounts(history);
        let n = values.len();
        let trend = self.trend.estimate(&values);
        let seasonal = self.seasonality.detect(history);

        let forecast: Vec<ForecastPoint> = (1..=horizon)
            .map(|i| {
                let month = last_period.add_months(i as u32);
                let mut base = trend.value_at((n + i - 1) as f64);
                if seasonal.seasonality_detected {
                    if let Some(factor) = seasonal.profile.factor(month.month()) {
                        base *= factor;
                    }
                }
                let predicted = base.max(0.0);
                ForecastPoint::new(month, predicted, self.intervals.compute(&values, predicted))
            })
            .collect();

        let direction = self.trend.direction(&trend, &values);
        let r_squared = (n >= 2).then_some(trend.r_squared);
        let model_accuracy = self.accuracy.evaluate(&values).with_r_squared(r_squared);

        debug!(
            points = n,
            horizon,
            ?direction,
            slope = trend.slope,
            seasonality = seasonal.seasonality_detected,
            mape = ?model_accuracy.mape,
            "forecast generated"
        );

        ForecastResult {
            forecast,
            trend: TrendSummary {
                direction,
                monthly_change_rate: monthly_change_rate(trend.slope, mean(&values)),
                seasonality_detected: seasonal.seasonality_detected,
                peak_months: seasonal.peak_month_names(),
            },
            model_accuracy,
        }
    }
}

impl Default for ForecastGenerator {
    fn default() -> Self {
        Self::new()
    }
}
