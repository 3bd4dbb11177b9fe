//! Immutable per-ticker time series.

use chrono::NaiveDate;
use stockscope_types::{Bar, Period};

use crate::error::DataError;
use crate::raw::{RawBar, coerce_bars};
use crate::validation::validate_bars;

/// Validated OHLCV history for one ticker over a requested period.
///
/// Construction is the only way in: bars are validated once and never
/// mutated afterwards. Transforms return new values.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    symbol: String,
    period: Period,
    bars: Vec<Bar>,
}

impl TimeSeries {
    /// Builds a series from already-typed bars.
    ///
    /// # Errors
    /// Any error from [`validate_bars`]: empty input, non-monotonic or
    /// duplicated dates, or corrupt values.
    pub fn new(
        symbol: impl Into<String>,
        period: Period,
        bars: Vec<Bar>,
    ) -> Result<Self, DataError> {
        validate_bars(&bars)?;
        Ok(Self {
            symbol: normalize_symbol(&symbol.into()),
            period,
            bars,
        })
    }

    /// Builds a series from the fetch layer's raw rows.
    ///
    /// `None` is how the fetch layer reports a failed or empty fetch.
    ///
    /// # Errors
    /// - [`DataError::NoData`] when `rows` is `None`.
    /// - Any coercion or validation error.
    pub fn from_raw(
        symbol: impl Into<String>,
        period: Period,
        rows: Option<Vec<RawBar>>,
    ) -> Result<Self, DataError> {
        let symbol = symbol.into();
        let rows = rows.ok_or_else(|| DataError::NoData(normalize_symbol(&symbol)))?;
        let bars = coerce_bars(rows)?;
        Self::new(symbol, period, bars)
    }

    /// Ticker symbol (trimmed, upper-case).
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Period the series was requested for.
    #[must_use]
    pub fn period(&self) -> Period {
        self.period
    }

    /// All bars in date order.
    #[must_use]
    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    /// Number of bars.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Always `false` for a constructed series; kept for API symmetry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Bar at `idx`.
    #[must_use]
    pub fn get(&self, idx: usize) -> Option<&Bar> {
        self.bars.get(idx)
    }

    /// First bar.
    #[must_use]
    pub fn first(&self) -> Option<&Bar> {
        self.bars.first()
    }

    /// Last bar.
    #[must_use]
    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Dates in ascending order.
    #[must_use]
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.bars.iter().map(|b| b.date).collect()
    }

    /// Closing prices aligned to [`TimeSeries::dates`].
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Volumes aligned to [`TimeSeries::dates`].
    #[must_use]
    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume).collect()
    }

    /// Highs aligned to [`TimeSeries::dates`].
    #[must_use]
    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    /// Lows aligned to [`TimeSeries::dates`].
    #[must_use]
    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    /// `(first date, last date)`.
    #[must_use]
    pub fn date_range(&self) -> (NaiveDate, NaiveDate) {
        // A constructed series always holds at least one bar.
        let first = self.bars[0].date;
        let last = self.bars[self.bars.len() - 1].date;
        (first, last)
    }

    /// New series restricted to bars dated on or after `start`.
    ///
    /// # Errors
    /// [`DataError::EmptyData`] when no bar remains.
    pub fn slice_from(&self, start: NaiveDate) -> Result<Self, DataError> {
        let idx = self.bars.partition_point(|b| b.date < start);
        Self::new(self.symbol.clone(), self.period, self.bars[idx..].to_vec())
    }
}

pub(crate) fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}
