//! Seasonality detection
//!
//! Calendar-month seasonal indices: the average spend of each observed
//! month relative to the average across those months.

use std::collections::BTreeMap;

use spend_forecast_spi::{
    ForecastError, MonthlySpendPoint, Result, SeasonalAnalysis, SeasonalProfile,
    SeasonalityDetector,
};
use tracing::trace;

/// Points required before seasonal indices are computed
pub const DEFAULT_MIN_POINTS: usize = 12;

/// Factor a month must exceed to count as a peak
pub const DEFAULT_PEAK_THRESHOLD: f64 = 1.1;

/// Maximum number of peak months reported
pub const DEFAULT_MAX_PEAK_MONTHS: usize = 3;

/// Tolerance under which a profile counts as flat
const UNIFORM_TOLERANCE: f64 = 1e-9;

/// Calendar-month seasonal index detector
#[derive(Debug, Clone)]
pub struct MonthlyIndexDetector {
    min_points: usize,
    peak_threshold: f64,
    max_peak_months: usize,
}

impl MonthlyIndexDetector {
    pub fn new() -> Self {
        Self {
            min_points: DEFAULT_MIN_POINTS,
            peak_threshold: DEFAULT_PEAK_THRESHOLD,
            max_peak_months: DEFAULT_MAX_PEAK_MONTHS,
        }
    }

    pub fn with_min_points(mut self, min_points: usize) -> Self {
        self.min_points = min_points;
        self
    }

    pub fn with_peak_threshold(mut self, peak_threshold: f64) -> Self {
        self.peak_threshold = peak_threshold;
        self
    }

    pub fn with_max_peak_months(mut self, max_peak_months: usize) -> Self {
        self.max_peak_months = max_peak_months;
        self
    }
}

impl Default for MonthlyIndexDetector {
    fn default() -> Self {
        Self::new()
    }
}

impl SeasonalityDetector for MonthlyIndexDetector {
    fn detect(&self, series: &[MonthlySpendPoint]) -> SeasonalAnalysis {
        let profile = match seasonal_indices(series, self.min_points) {
            Ok(profile) => profile,
            Err(err) => {
                trace!(%err, "seasonality skipped");
                return SeasonalAnalysis::none();
            }
        };

        // an all-equal history yields factors of exactly 1.0 everywhere
        let seasonality_detected = !profile.is_empty() && !profile.is_uniform(UNIFORM_TOLERANCE);
        let peak_months = profile.peak_months(self.peak_threshold, self.max_peak_months);

        SeasonalAnalysis {
            profile,
            seasonality_detected,
            peak_months,
        }
    }
}

/// Average spend per calendar month present in the series
pub fn monthly_averages(series: &[MonthlySpendPoint]) -> BTreeMap<u32, f64> {
    let mut groups: BTreeMap<u32, (f64, usize)> = BTreeMap::new();
    for point in series {
        let entry = groups.entry(point.period.month()).or_insert((0.0, 0));
        entry.0 += point.total_amount;
        entry.1 += 1;
    }
    groups
        .into_iter()
        .map(|(month, (sum, count))| (month, sum / count as f64))
        .collect()
}

/// Seasonal factor per observed month
///
/// Fails with `InsufficientData` below `min_points`. Returns an empty profile
/// when the average of the monthly averages is zero.
pub fn seasonal_indices(
    series: &[MonthlySpendPoint],
    min_points: usize,
) -> Result<SeasonalProfile> {
    if series.len() < min_points {
        return Err(ForecastError::InsufficientData {
            required: min_points,
            actual: series.len(),
        });
    }

    let averages = monthly_averages(series);
    if averages.is_empty() {
        return Ok(SeasonalProfile::new());
    }

    let overall = averages.values().sum::<f64>() / averages.len() as f64;
    if overall == 0.0 {
        return Ok(SeasonalProfile::new());
    }

    Ok(averages
        .into_iter()
        .map(|(month, avg)| (month, avg / overall))
        .collect())
}
