//! Integration tests for the metrics crate.

use approx::assert_relative_eq;
use chrono::{Days, NaiveDate};
use stockscope_data::TimeSeries;
use stockscope_metrics::{MetricDefinitions, MetricsError, performance_metrics, summarize};
use stockscope_types::{Bar, PerformanceConfig, Period};

fn series(closes: &[f64]) -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2024, 6, 3).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Bar::flat(start + Days::new(i as u64), c, 10.0))
        .collect();
    TimeSeries::new("spy", Period::ThreeMonths, bars).unwrap()
}

#[test]
fn test_summary_from_series() {
    let summary = summarize(&series(&[100.0, 110.0, 121.0])).unwrap();
    assert_relative_eq!(summary.total_return, 0.21, epsilon = 1e-12);
    assert_eq!(summary.start_price, 100.0);
    assert_eq!(summary.end_price, 121.0);
}

#[test]
fn test_single_bar_series_is_insufficient() {
    let err = summarize(&series(&[100.0])).unwrap_err();
    assert_eq!(
        err,
        MetricsError::InsufficientData {
            required: 2,
            available: 1
        }
    );
    assert_eq!(
        err.to_string(),
        "insufficient data: need at least 2 bars, got 1"
    );
}

#[test]
fn test_performance_keys_match_definitions() {
    let metrics =
        performance_metrics(&series(&[10.0, 11.0, 9.0, 12.0]), &PerformanceConfig::default())
            .unwrap();
    let json = serde_json::to_value(metrics).unwrap();
    let defs = MetricDefinitions::definitions();

    let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
    assert_eq!(keys.len(), defs.len());
    for key in keys {
        assert!(defs.contains_key(key), "missing definition for {key}");
    }
}
