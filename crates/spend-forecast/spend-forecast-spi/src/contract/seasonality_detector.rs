//! Trait for seasonality detection

use crate::model::{MonthlySpendPoint, SeasonalAnalysis};

/// Derives a per-calendar-month seasonal profile from a monthly series
pub trait SeasonalityDetector: Send + Sync {
    /// Detect seasonal factors in an ascending monthly series
    fn detect(&self, series: &[MonthlySpendPoint]) -> SeasonalAnalysis;
}
