//! Entry point mapping errors onto the result contract.
//!
//! Config errors are returned to the caller. Every other failure becomes an
//! `ok: false` result document.

use crate::error::AnalysisError;
use crate::request::AnalysisRequest;
use crate::result::{AnalysisResult, ErrorResult};
use crate::runner::run_request;

/// Runs a request and serializes the outcome.
///
/// # Errors
/// Only config errors ([`AnalysisError::is_config_error`]).
pub fn analyze(request: AnalysisRequest, pretty: bool) -> Result<String, AnalysisError> {
    match run_request(request) {
        Ok(result) => to_json(&result, pretty),
        Err(err) if err.is_config_error() => Err(err),
        Err(err) => {
            tracing::warn!("analysis failed: {err}");
            Ok(serialize_error(err, pretty))
        }
    }
}

/// Serializes an error into an `ok: false` result document.
#[must_use]
pub fn serialize_error(err: AnalysisError, pretty: bool) -> String {
    let error_result = AnalysisResult::failure(ErrorResult::from(err));

    to_json(&error_result, pretty).unwrap_or_else(|_| {
        r#"{"ok":false,"error":{"category":"runtime","message":"serialization_failed"}}"#
            .to_string()
    })
}

fn to_json(result: &AnalysisResult, pretty: bool) -> Result<String, AnalysisError> {
    let encoded = if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    };
    encoded.map_err(|e| AnalysisError::ResultSerialize(e.to_string()))
}
