//! Forecast error types

use thiserror::Error;

/// Errors that can occur during forecasting operations
///
/// Only caller-supplied parameter violations surface from the public
/// component operations. `InsufficientData` is raised by internal helpers
/// and absorbed into degenerate results before it reaches the caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Fewer points than a component's minimum
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Requested horizon outside 1..=max
    #[error("Invalid horizon {horizon}: must be between 1 and {max} months")]
    InvalidHorizon { horizon: usize, max: usize },

    /// Annual budget not strictly positive
    #[error("Invalid budget {0}: must be a positive number")]
    InvalidBudget(f64),

    /// Malformed calendar period
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
}
