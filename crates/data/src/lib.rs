//! Stockscope Data
//!
//! Validated time-series store, boundary coercion of raw fetch rows,
//! multi-series date alignment and the caller-owned series cache.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

/// Multi-series date alignment.
pub mod alignment;
/// Caller-owned series cache keyed by (ticker, period).
pub mod cache;
/// Data-layer error types.
pub mod error;
/// Coercion of loosely-typed fetch rows into bars.
pub mod raw;
/// Immutable per-ticker time series.
pub mod store;
/// Bar sequence validation.
pub mod validation;

/// Re-export: aligned closes container.
pub use alignment::AlignedCloses;
/// Re-export: alignment stats.
pub use alignment::AlignmentStats;
/// Re-export: inner-join alignment of N series.
pub use alignment::align_closes;
/// Re-export: series cache.
pub use cache::{SeriesCache, SeriesKey};
/// Re-export: data-layer error type.
pub use error::DataError;
/// Re-export: raw fetch row.
pub use raw::RawBar;
/// Re-export: coerce raw rows.
pub use raw::coerce_bars;
/// Re-export: time series.
pub use store::TimeSeries;
/// Re-export: bar validation.
pub use validation::validate_bars;
