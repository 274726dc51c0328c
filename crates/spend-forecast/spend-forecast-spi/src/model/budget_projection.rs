//! Budget projection model

use serde::{Deserialize, Serialize};

/// Budget health classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    OnTrack,
    UnderBudget,
    OverBudget,
    NoData,
}

/// Year-to-date budget variance and year-end projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetProjection {
    pub annual_budget: f64,
    pub monthly_budget: f64,
    pub ytd_spend: f64,
    pub ytd_budget: f64,
    /// `ytd_budget - ytd_spend`; positive means under budget
    pub variance: f64,
    pub variance_percentage: f64,
    pub projected_year_end: f64,
    pub projected_variance: f64,
    pub months_elapsed: u32,
    pub months_remaining: u32,
    pub status: BudgetStatus,
}

impl BudgetProjection {
    /// Projection for a year with no recorded months
    pub fn no_data(annual_budget: f64) -> Self {
        Self {
            annual_budget,
            monthly_budget: annual_budget / 12.0,
            ytd_spend: 0.0,
            ytd_budget: 0.0,
            variance: 0.0,
            variance_percentage: 0.0,
            projected_year_end: 0.0,
            projected_variance: annual_budget,
            months_elapsed: 0,
            months_remaining: 12,
            status: BudgetStatus::NoData,
        }
    }
}
