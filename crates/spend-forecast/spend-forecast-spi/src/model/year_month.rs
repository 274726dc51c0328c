//! Calendar month identifier

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Month};
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, Result};

/// A calendar month, ordered chronologically and written as `YYYY-MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Create a period, rejecting months outside 1..=12
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidPeriod(format!(
                "month {} out of range 1..=12",
                month
            )));
        }
        Ok(Self { year, month })
    }

    /// Period containing the given date
    pub fn from_date<D: Datelike>(date: &D) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Calendar month number, 1 = January
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Period `months` months after this one
    pub fn add_months(&self, months: u32) -> Self {
        let zero_based = self.month - 1 + months;
        Self {
            year: self.year + (zero_based / 12) as i32,
            month: zero_based % 12 + 1,
        }
    }

    /// The following calendar month
    pub fn next(&self) -> Self {
        self.add_months(1)
    }

    /// English name of the calendar month
    pub fn month_name(&self) -> &'static str {
        month_name(self.month)
    }
}

/// English name for a month number; empty for out-of-range input
pub fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self> {
        let (year, month) = s
            .trim()
            .split_once('-')
            .ok_or_else(|| ForecastError::InvalidPeriod(format!("expected YYYY-MM, got '{}'", s)))?;
        let year = year
            .parse::<i32>()
            .map_err(|_| ForecastError::InvalidPeriod(format!("bad year in '{}'", s)))?;
        let month = month
            .parse::<u32>()
            .map_err(|_| ForecastError::InvalidPeriod(format!("bad month in '{}'", s)))?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ForecastError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(period: YearMonth) -> Self {
        period.to_string()
    }
}
