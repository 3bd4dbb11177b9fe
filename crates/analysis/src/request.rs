//! Request schema.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stockscope_data::RawBar;
use stockscope_options::RawOptionContract;
use stockscope_types::{AnalyticsConfig, Period};

/// One analysis run over any number of series and at most one options chain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisRequest {
    /// Analytics parameters; defaults apply when absent
    #[serde(default)]
    pub config: Option<AnalyticsConfig>,
    /// Price series, in the order results are reported
    #[serde(default)]
    pub series: Vec<SeriesRequest>,
    /// Options chain to aggregate
    #[serde(default)]
    pub options: Option<OptionsRequest>,
}

/// Raw rows for one ticker and period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesRequest {
    /// Ticker symbol
    pub symbol: String,
    /// Requested lookback
    #[serde(default)]
    pub period: Period,
    /// Rows from the fetch layer; `null` when the fetch failed
    #[serde(default)]
    pub bars: Option<Vec<RawBar>>,
}

/// Raw chain rows for one ticker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptionsRequest {
    /// Ticker symbol
    pub symbol: String,
    /// Rows from the fetch layer; `null` when the fetch failed
    #[serde(default)]
    pub contracts: Option<Vec<RawOptionContract>>,
    /// Expiry for the detailed chain view
    #[serde(default)]
    pub expiry: Option<NaiveDate>,
}
