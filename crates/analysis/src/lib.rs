//! Stockscope Analysis
//!
//! JSON request runner over the stockscope engines: builds series and
//! chains from raw fetch rows, runs indicators, performance metrics,
//! comparison and options aggregation, and serializes one result document.

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

/// Entry point mapping errors onto the result contract.
pub mod entry;
/// Analysis error types and categories.
pub mod error;
/// Request schema.
pub mod request;
/// Result schema.
pub mod result;
/// Request execution.
pub mod runner;

pub use entry::{analyze, serialize_error};
pub use error::AnalysisError;
pub use request::{AnalysisRequest, OptionsRequest, SeriesRequest};
pub use result::{AnalysisResult, ErrorResult, OptionsAnalysis, TickerAnalysis};
pub use runner::{parse_request, run_analysis_from_json, run_request};
