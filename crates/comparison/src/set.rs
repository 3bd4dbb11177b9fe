//! Aligned, normalized multi-ticker comparison result.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::Serialize;
use stockscope_metrics::SummaryMetrics;

/// Normalized closes of several tickers on a shared date axis.
///
/// Tickers keep their input order in both maps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSet {
    /// Common dates, ascending
    pub dates: Vec<NaiveDate>,
    /// Close rescaled to 100 at the first common date, per ticker
    pub series: IndexMap<String, Vec<f64>>,
    /// Total return and volatility over the common dates, per ticker;
    /// `None` when fewer than two dates are shared
    pub summaries: IndexMap<String, Option<SummaryMetrics>>,
    /// Bars dropped by the date intersection across all tickers
    pub discarded_bars: usize,
}

impl ComparisonSet {
    /// Normalized value of `ticker` at date index `idx`.
    #[must_use]
    pub fn value_at(&self, ticker: &str, idx: usize) -> Option<f64> {
        self.series.get(ticker)?.get(idx).copied()
    }

    /// Tickers in input order.
    pub fn tickers(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    /// Number of common dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// True when there are no common dates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// `(ticker, total_return)` best first. Ties keep input order.
    /// Empty when the set has no summaries.
    #[must_use]
    pub fn relative_performance(&self) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .summaries
            .iter()
            .filter_map(|(ticker, summary)| Some((ticker.clone(), summary.as_ref()?.total_return)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }
}
