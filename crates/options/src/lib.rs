//! Stockscope Options
//!
//! Restructures an options chain by expiry and contract type and aggregates
//! open interest and its notional value.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(missing_docs)]

/// Per-expiry open-interest aggregation.
pub mod aggregate;
/// Validated options chain.
pub mod chain;
/// Strike-sorted detail view of one expiry.
pub mod detailed;
/// Options error types.
pub mod error;
/// Coercion of loosely-typed chain rows.
pub mod raw;

pub use aggregate::{ExpirySummary, OpenInterestSummary, SideSummary, aggregate};
pub use chain::OptionsChain;
pub use detailed::{ChainRow, DetailedChain, detailed_chain};
pub use error::OptionsError;
pub use raw::{RawOptionContract, coerce_contracts};
