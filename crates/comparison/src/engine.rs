//! Comparison engine: date alignment, normalization and summaries.

use std::collections::HashSet;

use indexmap::IndexMap;
use stockscope_data::{TimeSeries, align_closes};
use stockscope_metrics::{MetricsError, SummaryMetrics, summarize_closes};

use crate::error::ComparisonError;
use crate::set::ComparisonSet;

/// Builds [`ComparisonSet`]s.
#[derive(Debug, Default)]
pub struct ComparisonEngine;

impl ComparisonEngine {
    /// Aligns `series` on their common dates, normalizes each to 100 at the
    /// first common date and summarizes the aligned closes.
    ///
    /// With a single common date the normalized series is `[100]` and every
    /// summary is `None`.
    ///
    /// # Errors
    /// - [`ComparisonError::NoSeries`] for an empty input.
    /// - [`ComparisonError::DuplicateTicker`] when a symbol repeats.
    /// - [`ComparisonError::InsufficientOverlap`] when no date is shared.
    pub fn compare(series: &[TimeSeries]) -> Result<ComparisonSet, ComparisonError> {
        if series.is_empty() {
            return Err(ComparisonError::NoSeries);
        }

        let mut seen = HashSet::new();
        for s in series {
            if !seen.insert(s.symbol()) {
                return Err(ComparisonError::DuplicateTicker(s.symbol().to_string()));
            }
        }

        let aligned = align_closes(series)?;

        let mut normalized = IndexMap::with_capacity(series.len());
        let mut summaries = IndexMap::with_capacity(series.len());
        for (symbol, closes) in aligned.symbols.into_iter().zip(&aligned.closes) {
            summaries.insert(symbol.clone(), aligned_summary(closes));
            normalized.insert(symbol, normalize(closes));
        }

        Ok(ComparisonSet {
            dates: aligned.dates,
            series: normalized,
            summaries,
            discarded_bars: aligned.stats.discarded_count,
        })
    }
}

fn aligned_summary(closes: &[f64]) -> Option<SummaryMetrics> {
    match summarize_closes(closes) {
        Ok(summary) => Some(summary),
        Err(MetricsError::InsufficientData { .. }) => None,
    }
}

/// Rescales `closes` so the first value is exactly 100.
#[must_use]
pub fn normalize(closes: &[f64]) -> Vec<f64> {
    let Some(&base) = closes.first() else {
        return Vec::new();
    };
    closes.iter().map(|&c| c / base * 100.0).collect()
}
