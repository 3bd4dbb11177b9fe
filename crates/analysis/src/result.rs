//! Result schema.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stockscope_comparison::ComparisonSet;
use stockscope_indicators::TechnicalReport;
use stockscope_metrics::{MetricDefinition, PerformanceMetrics};
use stockscope_options::{DetailedChain, OpenInterestSummary};
use stockscope_types::Period;

/// Analysis result document
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Success flag
    pub ok: bool,
    /// Error information (if failed)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorResult>,
    /// Per-ticker results, in request order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickers: Option<Vec<TickerAnalysis>>,
    /// Normalized comparison (two or more series)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison: Option<ComparisonSet>,
    /// Options aggregation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<OptionsAnalysis>,
    /// Metric definitions (sorted for determinism)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metric_definitions: Option<BTreeMap<String, MetricDefinition>>,
}

impl AnalysisResult {
    /// Result with only the error set.
    #[must_use]
    pub fn failure(error: ErrorResult) -> Self {
        Self {
            ok: false,
            error: Some(error),
            tickers: None,
            comparison: None,
            options: None,
            metric_definitions: None,
        }
    }
}

/// Error result information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResult {
    /// Error category
    pub category: String,
    /// Error message
    pub message: String,
    /// Additional error details
    #[serde(default)]
    pub details: serde_json::Value,
}

/// Everything computed for one series.
#[derive(Debug, Clone, Serialize)]
pub struct TickerAnalysis {
    /// Normalized symbol
    pub symbol: String,
    /// Requested lookback
    pub period: Period,
    /// First bar date
    pub start_date: NaiveDate,
    /// Last bar date
    pub end_date: NaiveDate,
    /// Number of bars
    pub bar_count: usize,
    /// Performance over the full series
    pub performance: PerformanceMetrics,
    /// Indicators and annotations
    pub technical: TechnicalReport,
}

/// Aggregated options chain.
#[derive(Debug, Clone, Serialize)]
pub struct OptionsAnalysis {
    /// Normalized symbol
    pub symbol: String,
    /// Number of contracts in the chain
    pub contract_count: usize,
    /// Aggregates by expiry, ascending
    pub summary: OpenInterestSummary,
    /// Detail view when an expiry was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed: Option<DetailedChain>,
}
