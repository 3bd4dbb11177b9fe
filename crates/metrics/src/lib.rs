//! Stockscope Metrics
//!
//! Scalar summary statistics over a time series, plus the metric definition
//! catalog for downstream consumers.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

/// Metric definition catalog for the output contract.
pub mod definitions;
/// Metrics error types.
pub mod error;
/// Risk-adjusted performance metrics.
pub mod performance;
/// Total return and volatility.
pub mod summary;

pub use definitions::{MetricDefinition, MetricDefinitions};
pub use error::MetricsError;
pub use performance::{PerformanceMetrics, max_drawdown, performance_from_closes, performance_metrics};
pub use summary::{SummaryMetrics, pct_returns, summarize, summarize_closes};
