//! Seasonal profile model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::year_month::month_name;

/// Multiplicative factor per calendar month (1 = January)
///
/// Either empty or restricted to months observed in the history. When
/// non-empty the factors average to 1.0.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeasonalProfile {
    factors: BTreeMap<u32, f64>,
}

impl SeasonalProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, month: u32, factor: f64) {
        self.factors.insert(month, factor);
    }

    /// Factor for a calendar month, if that month was observed
    pub fn factor(&self, month: u32) -> Option<f64> {
        self.factors.get(&month).copied()
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Iterate `(month, factor)` in calendar order
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.factors.iter().map(|(&m, &f)| (m, f))
    }

    /// True when every factor is 1.0 within `tolerance`
    pub fn is_uniform(&self, tolerance: f64) -> bool {
        self.factors.values().all(|f| (f - 1.0).abs() <= tolerance)
    }

    /// Up to `limit` months whose factor exceeds `threshold`, strongest first
    pub fn peak_months(&self, threshold: f64, limit: usize) -> Vec<u32> {
        let mut peaks: Vec<(u32, f64)> = self.iter().filter(|&(_, f)| f > threshold).collect();
        peaks.sort_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)));
        peaks.into_iter().take(limit).map(|(m, _)| m).collect()
    }
}

impl FromIterator<(u32, f64)> for SeasonalProfile {
    fn from_iter<I: IntoIterator<Item = (u32, f64)>>(iter: I) -> Self {
        Self {
            factors: iter.into_iter().collect(),
        }
    }
}

/// Output of a seasonality detector
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeasonalAnalysis {
    pub profile: SeasonalProfile,
    pub seasonality_detected: bool,
    /// Peak calendar months, strongest first
    pub peak_months: Vec<u32>,
}

impl SeasonalAnalysis {
    /// No usable seasonal information
    pub fn none() -> Self {
        Self::default()
    }

    /// English names of the peak months, strongest first
    pub fn peak_month_names(&self) -> Vec<String> {
        self.peak_months
            .iter()
            .map(|&m| month_name(m).to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> SeasonalProfile {
        [(1, 0.8), (6, 1.15), (11, 1.3), (12, 1.4), (7, 1.05), (3, 1.2)]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_factor_lookup() {
        let p = profile();
        assert_eq!(p.factor(12), Some(1.4));
        assert_eq!(p.factor(2), None);
        assert_eq!(p.len(), 6);
    }

    #[test]
    fn test_peak_months_descending_and_limited() {
        let p = profile();
        assert_eq!(p.peak_months(1.1, 3), vec![12, 11, 3]);
        assert_eq!(p.peak_months(1.1, 10), vec![12, 11, 3, 6]);
        assert!(p.peak_months(2.0, 3).is_empty());
    }

    #[test]
    fn test_uniform() {
        let uniform: SeasonalProfile = (1..=12).map(|m| (m, 1.0)).collect();
        assert!(uniform.is_uniform(1e-9));
        assert!(!profile().is_uniform(1e-9));
    }

    #[test]
    fn test_peak_month_names() {
        let analysis = SeasonalAnalysis {
            profile: profile(),
            seasonality_detected: true,
            peak_months: vec![12, 11],
        };
        assert_eq!(analysis.peak_month_names(), vec!["December", "November"]);
    }

    #[test]
    fn test_none_is_empty() {
        let analysis = SeasonalAnalysis::none();
        assert!(analysis.profile.is_empty());
        assert!(!analysis.seasonality_detected);
    }
}
