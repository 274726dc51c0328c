//! Monthly spend input point

use serde::{Deserialize, Serialize};

use super::YearMonth;

/// Aggregated spend for one calendar month
///
/// Supplied by the data-access layer in ascending, duplicate-free period order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySpendPoint {
    pub period: YearMonth,
    pub total_amount: f64,
    pub transaction_count: u64,
}

impl MonthlySpendPoint {
    pub fn new(period: YearMonth, total_amount: f64, transaction_count: u64) -> Self {
        Self {
            period,
            total_amount,
            transaction_count,
        }
    }

    /// Extract the spend values of a series in order
    pub fn amounts(series: &[MonthlySpendPoint]) -> Vec<f64> {
        series.iter().map(|p| p.total_amount).collect()
    }
}
