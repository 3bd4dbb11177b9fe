//! Request execution.

use stockscope_comparison::ComparisonEngine;
use stockscope_data::TimeSeries;
use stockscope_indicators::IndicatorEngine;
use stockscope_metrics::{MetricDefinitions, performance_metrics};
use stockscope_options::{OptionsChain, aggregate, detailed_chain};
use stockscope_types::AnalyticsConfig;
use tracing::info;

use crate::error::AnalysisError;
use crate::request::{AnalysisRequest, OptionsRequest, SeriesRequest};
use crate::result::{AnalysisResult, OptionsAnalysis, TickerAnalysis};

/// Parses and runs a JSON request, returning the result JSON.
///
/// # Errors
/// - [`AnalysisError::ConfigParse`] on malformed JSON.
/// - Any error from [`run_request`].
/// - [`AnalysisError::ResultSerialize`] if the result cannot be encoded.
pub fn run_analysis_from_json(request_json: &str) -> Result<String, AnalysisError> {
    let request = parse_request(request_json)?;
    let result = run_request(request)?;

    serde_json::to_string(&result).map_err(|e| AnalysisError::ResultSerialize(e.to_string()))
}

/// Parses a request without running it.
///
/// # Errors
/// [`AnalysisError::ConfigParse`] on malformed JSON.
pub fn parse_request(request_json: &str) -> Result<AnalysisRequest, AnalysisError> {
    serde_json::from_str(request_json).map_err(|e| AnalysisError::ConfigParse(e.to_string()))
}

/// Runs a parsed request.
///
/// Series results keep request order. A comparison is built when two or
/// more series are given.
///
/// # Errors
/// - [`AnalysisError::ConfigValidation`] for an empty request or invalid config.
/// - [`AnalysisError::Series`] / [`AnalysisError::Metrics`] for a bad series.
/// - [`AnalysisError::Comparison`] / [`AnalysisError::Options`] from those engines.
pub fn run_request(request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
    validate_request(&request)?;
    let config = request.config.unwrap_or_default();

    info!(
        "analysis started: {} series, options: {}",
        request.series.len(),
        request.options.is_some()
    );

    let series = build_series(request.series)?;
    let engine = IndicatorEngine::new(config.clone())?;

    let tickers = series
        .iter()
        .map(|s| analyze_series(s, &engine, &config))
        .collect::<Result<Vec<_>, _>>()?;

    let comparison = if series.len() >= 2 {
        Some(ComparisonEngine::compare(&series)?)
    } else {
        None
    };

    let options = request
        .options
        .map(|req| analyze_options(req, &config))
        .transpose()?;

    let has_tickers = !tickers.is_empty();
    info!(
        "analysis finished: {} tickers, comparison: {}, options: {}",
        tickers.len(),
        comparison.is_some(),
        options.is_some()
    );

    Ok(AnalysisResult {
        ok: true,
        error: None,
        tickers: has_tickers.then_some(tickers),
        comparison,
        options,
        metric_definitions: has_tickers.then(MetricDefinitions::definitions),
    })
}

fn validate_request(request: &AnalysisRequest) -> Result<(), AnalysisError> {
    if request.series.is_empty() && request.options.is_none() {
        return Err(AnalysisError::ConfigValidation(
            "request needs at least one series or an options chain".to_string(),
        ));
    }

    for (i, s) in request.series.iter().enumerate() {
        if s.symbol.trim().is_empty() {
            return Err(AnalysisError::ConfigValidation(format!(
                "series[{i}].symbol is empty"
            )));
        }
    }
    if let Some(options) = &request.options
        && options.symbol.trim().is_empty()
    {
        return Err(AnalysisError::ConfigValidation(
            "options.symbol is empty".to_string(),
        ));
    }

    if let Some(config) = &request.config {
        config
            .validate()
            .map_err(|e| AnalysisError::ConfigValidation(e.to_string()))?;
    }

    Ok(())
}

fn build_series(requests: Vec<SeriesRequest>) -> Result<Vec<TimeSeries>, AnalysisError> {
    requests
        .into_iter()
        .map(|SeriesRequest { symbol, period, bars }| {
            TimeSeries::from_raw(symbol.as_str(), period, bars).map_err(|source| {
                AnalysisError::Series {
                    symbol: symbol.trim().to_uppercase(),
                    source,
                }
            })
        })
        .collect()
}

fn analyze_series(
    series: &TimeSeries,
    engine: &IndicatorEngine,
    config: &AnalyticsConfig,
) -> Result<TickerAnalysis, AnalysisError> {
    let performance =
        performance_metrics(series, &config.performance).map_err(|source| AnalysisError::Metrics {
            symbol: series.symbol().to_string(),
            source,
        })?;
    let (start_date, end_date) = series.date_range();

    Ok(TickerAnalysis {
        symbol: series.symbol().to_string(),
        period: series.period(),
        start_date,
        end_date,
        bar_count: series.len(),
        performance,
        technical: engine.technical_report(series),
    })
}

fn analyze_options(
    request: OptionsRequest,
    config: &AnalyticsConfig,
) -> Result<OptionsAnalysis, AnalysisError> {
    let chain = OptionsChain::from_raw(request.symbol, request.contracts)?;
    let summary = aggregate(&chain, &config.options)?;
    let detailed = request
        .expiry
        .map(|expiry| detailed_chain(&chain, expiry, &config.options))
        .transpose()?;

    Ok(OptionsAnalysis {
        symbol: chain.symbol().to_string(),
        contract_count: chain.len(),
        summary,
        detailed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_request_is_config_error() {
        let err = run_analysis_from_json("{}").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            run_analysis_from_json("{not json"),
            Err(AnalysisError::ConfigParse(_))
        ));
    }

    #[test]
    fn test_blank_symbol_rejected() {
        let json = r#"{"series": [{"symbol": "  ", "bars": []}]}"#;
        assert!(matches!(
            run_analysis_from_json(json),
            Err(AnalysisError::ConfigValidation(msg)) if msg.contains("series[0]")
        ));
    }

    #[test]
    fn test_invalid_embedded_config() {
        let json = r#"{"config": {"moving_averages": {"short_window": 50, "long_window": 20}},
                       "series": [{"symbol": "AAPL", "bars": null}]}"#;
        assert!(matches!(
            run_analysis_from_json(json),
            Err(AnalysisError::ConfigValidation(_))
        ));
    }

    #[test]
    fn test_failed_fetch_reports_symbol() {
        let json = r#"{"series": [{"symbol": "nvda", "bars": null}]}"#;
        match run_analysis_from_json(json) {
            Err(AnalysisError::Series { symbol, source }) => {
                assert_eq!(symbol, "NVDA");
                assert_eq!(source.to_string(), "No data returned for NVDA");
            }
            other => panic!("expected series error, got {other:?}"),
        }
    }
}
