//! Options error types.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors from building or querying an options chain.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptionsError {
    /// The chain holds no contracts for the requested ticker.
    #[error("Empty options chain for {0}")]
    EmptyChain(String),

    /// No contract of the chain expires on the requested date.
    #[error("No contracts expire on {0}")]
    UnknownExpiry(NaiveDate),

    /// A raw row lacks a field that has no fallback.
    #[error("Missing field '{field}' at contract row {index}")]
    MissingField {
        /// Offending row index
        index: usize,
        /// Name of the missing field
        field: &'static str,
    },

    /// A present value is invalid.
    #[error("Corrupt contract data: {0}")]
    CorruptData(String),

    /// A summed count does not fit in 64 bits.
    #[error("{field} total overflows for expiry {expiry}")]
    CountOverflow {
        /// Expiry being aggregated
        expiry: NaiveDate,
        /// Name of the summed field
        field: &'static str,
    },
}
