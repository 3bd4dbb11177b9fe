//! Coercion of loosely-typed fetch rows into bars.
//!
//! Fetch layers deliver rows whose columns may be absent. Only `date` and
//! `close` are mandatory; everything else has a documented fallback.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stockscope_types::Bar;

use crate::error::DataError;

/// A bar as delivered by the fetch layer, every column optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawBar {
    /// Trading date
    #[serde(default)]
    pub date: Option<NaiveDate>,
    /// Open price (falls back to close)
    #[serde(default)]
    pub open: Option<f64>,
    /// High price (falls back to close)
    #[serde(default)]
    pub high: Option<f64>,
    /// Low price (falls back to close)
    #[serde(default)]
    pub low: Option<f64>,
    /// Close price
    #[serde(default)]
    pub close: Option<f64>,
    /// Volume (falls back to 0)
    #[serde(default)]
    pub volume: Option<f64>,
}

impl RawBar {
    /// Coerces one row. `index` is used for error reporting only.
    ///
    /// # Errors
    /// - [`DataError::MissingField`] when `date` or `close` is absent.
    /// - [`DataError::CorruptData`] when a present value is non-finite or
    ///   volume is negative.
    pub fn into_bar(self, index: usize) -> Result<Bar, DataError> {
        let date = self.date.ok_or(DataError::MissingField {
            index,
            field: "date",
        })?;
        let close = self.close.ok_or(DataError::MissingField {
            index,
            field: "close",
        })?;

        let bar = Bar {
            date,
            open: self.open.unwrap_or(close),
            high: self.high.unwrap_or(close),
            low: self.low.unwrap_or(close),
            close,
            volume: self.volume.unwrap_or(0.0),
        };

        if ![bar.open, bar.high, bar.low, bar.close, bar.volume]
            .iter()
            .all(|v| v.is_finite())
        {
            return Err(DataError::CorruptData(format!(
                "NaN/Inf at row {index}: {bar:?}"
            )));
        }
        if bar.volume < 0.0 {
            return Err(DataError::CorruptData(format!(
                "Negative volume at row {index}: {}",
                bar.volume
            )));
        }

        Ok(bar)
    }
}

/// Coerces raw rows in order. Ordering is not repaired here.
///
/// # Errors
/// - [`DataError::EmptyData`] when `rows` is empty.
/// - The first per-row error from [`RawBar::into_bar`].
pub fn coerce_bars(rows: Vec<RawBar>) -> Result<Vec<Bar>, DataError> {
    if rows.is_empty() {
        return Err(DataError::EmptyData);
    }

    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.into_bar(i).inspect_err(|err| {
                tracing::warn!("rejected raw bar at row {i}: {err}");
            })
        })
        .collect()
}
