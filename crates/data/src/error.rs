//! Data-layer error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors raised while building or aligning time series.
#[derive(Debug, Error)]
pub enum DataError {
    /// The fetch layer delivered nothing for the requested scope.
    #[error("No data returned for {0}")]
    NoData(String),

    /// No rows were supplied.
    #[error("Empty data")]
    EmptyData,

    /// Dates are not strictly increasing (out of order or duplicated).
    #[error("Non-monotonic date at index {index}: {current} <= {previous}")]
    NonMonotonic {
        /// Offending row index.
        index: usize,
        /// Date of the preceding row.
        previous: NaiveDate,
        /// Date of the offending row.
        current: NaiveDate,
    },

    /// A raw row lacks a field that has no fallback.
    #[error("Missing field '{field}' at row {index}")]
    MissingField {
        /// Offending row index.
        index: usize,
        /// Name of the missing field.
        field: &'static str,
    },

    /// Values violate bar invariants (non-finite, negative volume, bad OHLC).
    #[error("Corrupt data: {0}")]
    CorruptData(String),

    /// The series share no calendar date.
    #[error("No common dates across {series} series")]
    NoCommonDates {
        /// Number of series that were intersected.
        series: usize,
    },
}
