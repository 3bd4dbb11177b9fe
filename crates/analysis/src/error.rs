//! Analysis error types.

use serde_json::json;
use stockscope_comparison::ComparisonError;
use stockscope_data::DataError;
use stockscope_indicators::IndicatorError;
use stockscope_metrics::MetricsError;
use stockscope_options::OptionsError;
use thiserror::Error;

use crate::result::ErrorResult;

/// Errors that can occur while running an analysis request.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Request JSON could not be parsed
    #[error("config parse error: {0}")]
    ConfigParse(String),

    /// Request or configuration failed validation
    #[error("config validation error: {0}")]
    ConfigValidation(String),

    /// A series could not be built
    #[error("data error for {symbol}: {source}")]
    Series {
        /// Requested symbol
        symbol: String,
        /// Underlying data error
        #[source]
        source: DataError,
    },

    /// A statistic could not be computed for a series
    #[error("metrics error for {symbol}: {source}")]
    Metrics {
        /// Series symbol
        symbol: String,
        /// Underlying metrics error
        #[source]
        source: MetricsError,
    },

    /// Comparison failed
    #[error("comparison error: {0}")]
    Comparison(#[from] ComparisonError),

    /// Options chain could not be built or queried
    #[error("options error: {0}")]
    Options(#[from] OptionsError),

    /// Indicator engine setup failed
    #[error("indicator error: {0}")]
    Indicator(#[from] IndicatorError),

    /// Result serialization error
    #[error("result serialization error: {0}")]
    ResultSerialize(String),
}

impl AnalysisError {
    /// Returns true if this is a request parse/validation error.
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            AnalysisError::ConfigParse(_) | AnalysisError::ConfigValidation(_)
        )
    }

    /// Returns the error category for the output contract.
    /// Categories: `config`, `market_data`, `options`, `runtime`
    #[must_use]
    pub fn error_category(&self) -> &'static str {
        match self {
            AnalysisError::ConfigParse(_) | AnalysisError::ConfigValidation(_) => "config",

            AnalysisError::Series { .. }
            | AnalysisError::Metrics { .. }
            | AnalysisError::Comparison(_) => "market_data",

            AnalysisError::Options(_) => "options",

            AnalysisError::Indicator(_) | AnalysisError::ResultSerialize(_) => "runtime",
        }
    }

    fn details(&self) -> serde_json::Value {
        match self {
            AnalysisError::Series { symbol, .. } | AnalysisError::Metrics { symbol, .. } => {
                json!({ "symbol": symbol })
            }
            AnalysisError::Options(
                OptionsError::UnknownExpiry(expiry) | OptionsError::CountOverflow { expiry, .. },
            ) => {
                json!({ "expiry": expiry })
            }
            _ => json!({}),
        }
    }
}

impl From<AnalysisError> for ErrorResult {
    fn from(err: AnalysisError) -> Self {
        Self {
            category: err.error_category().to_string(),
            message: err.to_string(),
            details: err.details(),
        }
    }
}
