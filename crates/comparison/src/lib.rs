//! Stockscope Comparison
//!
//! Aligns several series on their common dates and rescales each to 100 at
//! the first aligned date for relative-performance comparison.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

/// Comparison entrypoint.
pub mod engine;
/// Comparison error types.
pub mod error;
/// Aligned, normalized comparison output.
pub mod set;

pub use engine::{ComparisonEngine, normalize};
pub use error::ComparisonError;
pub use set::ComparisonSet;
