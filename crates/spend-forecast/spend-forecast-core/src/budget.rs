//! Budget projection
//!
//! Compares year-to-date spend with a pro-rata share of the annual budget
//! and projects the year-end position from a forecast of the remaining
//! months.

use chrono::{Datelike, NaiveDate};
use spend_forecast_spi::{
    BudgetProjection, BudgetStatus, ForecastError, MonthlySpendPoint, Result, YearMonth,
};
use tracing::debug;

use crate::generator::ForecastGenerator;

/// Variance percentage beyond which a budget is under or over
pub const DEFAULT_STATUS_THRESHOLD_PCT: f64 = 10.0;

const MONTHS_PER_YEAR: u32 = 12;

/// Year-end budget projector
pub struct BudgetProjector {
    generator: ForecastGenerator,
    status_threshold_pct: f64,
}

impl BudgetProjector {
    pub fn new() -> Self {
        Self {
            generator: ForecastGenerator::new(),
            status_threshold_pct: DEFAULT_STATUS_THRESHOLD_PCT,
        }
    }

    pub fn with_generator(mut self, generator: ForecastGenerator) -> Self {
        self.generator = generator;
        self
    }

    pub fn with_status_threshold(mut self, status_threshold_pct: f64) -> Self {
        self.status_threshold_pct = status_threshold_pct;
        self
    }

    /// Project the year from the current year's monthly points
    ///
    /// `year_to_date` holds zero to twelve ascending points of one calendar year.
    /// Only the last twelve points are used when more are supplied.
    pub fn project(
        &self,
        annual_budget: f64,
        year_to_date: &[MonthlySpendPoint],
    ) -> Result<BudgetProjection> {
        // also rejects NaN
        if !(annual_budget > 0.0) {
            return Err(ForecastError::InvalidBudget(annual_budget));
        }

        let skip = year_to_date.len().saturating_sub(MONTHS_PER_YEAR as usize);
        let year_to_date = &year_to_date[skip..];
        let months_elapsed = year_to_date.len() as u32;
        if months_elapsed == 0 {
            debug!(annual_budget, "no spend recorded this year");
            return Ok(BudgetProjection::no_data(annual_budget));
        }
        let months_remaining = MONTHS_PER_YEAR.saturating_sub(months_elapsed);

        let monthly_budget = annual_budget / MONTHS_PER_YEAR as f64;
        let ytd_spend: f64 = year_to_date.iter().map(|p| p.total_amount).sum();
        let ytd_budget = monthly_budget * months_elapsed as f64;
        let variance = ytd_budget - ytd_spend;
        let variance_percentage = if ytd_budget == 0.0 {
            0.0
        } else {
            variance / ytd_budget * 100.0
        };

        let projected_remaining = if months_remaining == 0 {
            0.0
        } else {
            self.generator
                .generate_unchecked(year_to_date, months_remaining as usize)
                .total_predicted()
        };
        let projected_year_end = ytd_spend + projected_remaining;

        let status = classify_status(variance_percentage, self.status_threshold_pct);
        debug!(
            months_elapsed,
            ytd_spend,
            variance_percentage,
            projected_year_end,
            ?status,
            "budget projected"
        );

        Ok(BudgetProjection {
            annual_budget,
            monthly_budget,
            ytd_spend,
            ytd_budget,
            variance,
            variance_percentage,
            projected_year_end,
            projected_variance: annual_budget - projected_year_end,
            months_elapsed,
            months_remaining,
            status,
        })
    }

    /// Project using the points of `today`'s year up to and including its month
    ///
    /// `today` is always supplied by the caller.
    pub fn project_as_of(
        &self,
        annual_budget: f64,
        history: &[MonthlySpendPoint],
        today: NaiveDate,
    ) -> Result<BudgetProjection> {
        let year_to_date = year_to_date(history, today);
        self.project(annual_budget, &year_to_date)
    }
}

impl Default for BudgetProjector {
    fn default() -> Self {
        Self::new()
    }
}

/// Points in `today`'s calendar year no later than `today`'s month
pub fn year_to_date(history: &[MonthlySpendPoint], today: NaiveDate) -> Vec<MonthlySpendPoint> {
    let current = YearMonth::from_date(&today);
    history
        .iter()
        .filter(|p| p.period.year() == today.year() && p.period <= current)
        .cloned()
        .collect()
}

/// Under budget at or above `+threshold`, over at or below `-threshold`
pub fn classify_status(variance_percentage: f64, threshold_pct: f64) -> BudgetStatus {
    if variance_percentage >= threshold_pct {
        BudgetStatus::UnderBudget
    } else if variance_percentage <= -threshold_pct {
        BudgetStatus::OverBudget
    } else {
        BudgetStatus::OnTrack
    }
}
