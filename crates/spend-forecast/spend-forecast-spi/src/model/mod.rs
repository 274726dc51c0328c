//! Model module containing data structures

mod accuracy_report;
mod budget_projection;
mod confidence_bounds;
mod forecast_point;
mod forecast_result;
mod seasonal_profile;
mod spend_point;
mod trend;
mod year_month;

pub use accuracy_report::AccuracyReport;
pub use budget_projection::{BudgetProjection, BudgetStatus};
pub use confidence_bounds::ConfidenceBounds;
pub use forecast_point::ForecastPoint;
pub use forecast_result::{ForecastResult, TrendSummary};
pub use seasonal_profile::{SeasonalAnalysis, SeasonalProfile};
pub use spend_point::MonthlySpendPoint;
pub use trend::{TrendDescriptor, TrendDirection};
pub use year_month::YearMonth;
