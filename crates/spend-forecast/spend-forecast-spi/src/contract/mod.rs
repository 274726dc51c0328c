//! Contract module containing trait definitions for forecast components

mod accuracy_evaluator;
mod confidence_interval_computer;
mod seasonality_detector;
mod trend_estimator;

pub use accuracy_evaluator::AccuracyEvaluator;
pub use confidence_interval_computer::ConfidenceIntervalComputer;
pub use seasonality_detector::SeasonalityDetector;
pub use trend_estimator::TrendEstimator;
