use thiserror::Error;

/// Errors from metric computation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MetricsError {
    /// Too few observations for the statistic.
    #[error("insufficient data: need at least {required} bars, got {available}")]
    InsufficientData {
        /// Minimum number of bars
        required: usize,
        /// Bars supplied
        available: usize,
    },
}

/// Minimum bars for any return-based statistic.
pub(crate) const MIN_BARS: usize = 2;

pub(crate) fn require_bars(available: usize) -> Result<(), MetricsError> {
    if available < MIN_BARS {
        return Err(MetricsError::InsufficientData {
            required: MIN_BARS,
            available,
        });
    }
    Ok(())
}
