use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::DataError;
use crate::store::TimeSeries;

/// Closing prices of several series restricted to their common dates.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignedCloses {
    /// Symbols in input order.
    pub symbols: Vec<String>,
    /// Common dates, ascending.
    pub dates: Vec<NaiveDate>,
    /// One close vector per symbol, aligned to `dates`.
    pub closes: Vec<Vec<f64>>,
    /// Alignment bookkeeping.
    pub stats: AlignmentStats,
}

/// Counts describing what the inner join kept and dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentStats {
    /// Bar count per input series, in input order.
    pub counts_before: Vec<usize>,
    /// Number of common dates.
    pub aligned_count: usize,
    /// Bars dropped across all inputs.
    pub discarded_count: usize,
}

/// Inner join on calendar dates across all `series`.
/// No interpolation or forward fill: only dates present in every series are kept.
///
/// # Errors
/// - [`DataError::EmptyData`] when `series` is empty.
/// - [`DataError::NoCommonDates`] when the intersection is empty.
pub fn align_closes(series: &[TimeSeries]) -> Result<AlignedCloses, DataError> {
    let Some((head, tail)) = series.split_first() else {
        return Err(DataError::EmptyData);
    };

    let mut common: BTreeSet<NaiveDate> = head.bars().iter().map(|b| b.date).collect();
    for s in tail {
        let dates: BTreeSet<NaiveDate> = s.bars().iter().map(|b| b.date).collect();
        common = common.intersection(&dates).copied().collect();
    }

    if common.is_empty() {
        return Err(DataError::NoCommonDates {
            series: series.len(),
        });
    }

    let closes: Vec<Vec<f64>> = series
        .iter()
        .map(|s| {
            s.bars()
                .iter()
                .filter(|b| common.contains(&b.date))
                .map(|b| b.close)
                .collect()
        })
        .collect();

    let counts_before: Vec<usize> = series.iter().map(TimeSeries::len).collect();
    let aligned_count = common.len();
    let discarded_count: usize = counts_before.iter().map(|c| c - aligned_count).sum();

    if discarded_count > 0 {
        let total: usize = counts_before.iter().sum();
        #[allow(clippy::cast_precision_loss)]
        let loss_ratio = discarded_count as f64 / total as f64;
        tracing::warn!(
            "Alignment discarded {} bars across {} series ({} common dates, loss ratio {:.4})",
            discarded_count,
            series.len(),
            aligned_count,
            loss_ratio
        );
    }

    Ok(AlignedCloses {
        symbols: series.iter().map(|s| s.symbol().to_string()).collect(),
        dates: common.into_iter().collect(),
        closes,
        stats: AlignmentStats {
            counts_before,
            aligned_count,
            discarded_count,
        },
    })
}
