//! Indicator error types.

use stockscope_types::CoreError;
use thiserror::Error;

/// Errors that can occur while setting up indicator computation.
#[derive(Debug, Error)]
pub enum IndicatorError {
    /// Invalid parameters for an indicator
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl IndicatorError {
    /// Creates an `InvalidParams` error with a message.
    #[must_use]
    pub fn invalid_params(msg: impl Into<String>) -> Self {
        IndicatorError::InvalidParams(msg.into())
    }
}

impl From<CoreError> for IndicatorError {
    fn from(err: CoreError) -> Self {
        IndicatorError::InvalidParams(err.to_string())
    }
}
