//! Comparison error types.

use stockscope_data::DataError;
use thiserror::Error;

/// Errors from building a comparison.
#[derive(Debug, Error)]
pub enum ComparisonError {
    /// No series were supplied.
    #[error("No series to compare")]
    NoSeries,

    /// The same ticker appears more than once.
    #[error("Duplicate ticker in comparison: {0}")]
    DuplicateTicker(String),

    /// The series share no calendar date.
    #[error("Insufficient overlap: {series} series share no common date")]
    InsufficientOverlap {
        /// Number of series compared
        series: usize,
    },

    /// Any other data-layer failure.
    #[error(transparent)]
    Data(DataError),
}

impl From<DataError> for ComparisonError {
    fn from(err: DataError) -> Self {
        match err {
            DataError::NoCommonDates { series } => ComparisonError::InsufficientOverlap { series },
            DataError::EmptyData => ComparisonError::NoSeries,
            other => ComparisonError::Data(other),
        }
    }
}
