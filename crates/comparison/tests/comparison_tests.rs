//! Integration tests for cross-ticker comparison.

use approx::assert_relative_eq;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use stockscope_comparison::{ComparisonEngine, ComparisonError};
use stockscope_data::TimeSeries;
use stockscope_types::{Bar, Period};

fn day(offset: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 1).unwrap() + Days::new(offset)
}

fn series(symbol: &str, points: &[(u64, f64)]) -> TimeSeries {
    let bars = points
        .iter()
        .map(|&(d, c)| Bar::flat(day(d), c, 1_000.0))
        .collect();
    TimeSeries::new(symbol, Period::OneYear, bars).unwrap()
}

#[test]
fn test_two_ticker_normalization() {
    let a = series("AAA", &[(0, 100.0), (1, 110.0), (2, 121.0)]);
    let b = series("BBB", &[(0, 50.0), (1, 45.0), (2, 54.0)]);

    let set = ComparisonEngine::compare(&[a, b]).unwrap();

    assert_eq!(set.dates, vec![day(0), day(1), day(2)]);
    let expected = [[100.0, 100.0], [110.0, 90.0], [121.0, 108.0]];
    for (idx, row) in expected.iter().enumerate() {
        assert_relative_eq!(set.value_at("AAA", idx).unwrap(), row[0], epsilon = 1e-9);
        assert_relative_eq!(set.value_at("BBB", idx).unwrap(), row[1], epsilon = 1e-9);
    }
    assert_eq!(set.value_at("AAA", 0), Some(100.0));
    assert!(set.value_at("CCC", 0).is_none());
    assert!(set.value_at("AAA", 3).is_none());
}

#[test]
fn test_ticker_order_follows_input() {
    let a = series("zzz", &[(0, 1.0), (1, 2.0)]);
    let b = series("aaa", &[(0, 1.0), (1, 3.0)]);

    let set = ComparisonEngine::compare(&[a, b]).unwrap();
    assert_eq!(set.tickers().collect::<Vec<_>>(), vec!["ZZZ", "AAA"]);
    assert_eq!(
        set.summaries.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["ZZZ", "AAA"]
    );
}

#[test]
fn test_inner_join_and_summaries_on_common_dates() {
    let a = series("A", &[(0, 10.0), (1, 20.0), (2, 11.0), (4, 12.0)]);
    let b = series("B", &[(1, 5.0), (2, 6.0), (3, 7.0), (4, 8.0)]);

    let set = ComparisonEngine::compare(&[a, b]).unwrap();

    assert_eq!(set.dates, vec![day(1), day(2), day(4)]);
    assert_eq!(set.discarded_bars, 2);
    // A's return covers 20 -> 12, not 10 -> 12
    assert_relative_eq!(set.summaries["A"].unwrap().total_return, -0.4, epsilon = 1e-12);
    assert_relative_eq!(set.summaries["B"].unwrap().total_return, 0.6, epsilon = 1e-12);
}

#[test]
fn test_relative_performance_ranking() {
    let a = series("A", &[(0, 10.0), (1, 11.0)]);
    let b = series("B", &[(0, 10.0), (1, 15.0)]);
    let c = series("C", &[(0, 20.0), (1, 22.0)]);

    let set = ComparisonEngine::compare(&[a, b, c]).unwrap();
    let ranked: Vec<String> = set
        .relative_performance()
        .into_iter()
        .map(|(ticker, _)| ticker)
        .collect();

    // A and C tie at +10%; input order is kept
    assert_eq!(ranked, vec!["B", "A", "C"]);
}

#[test]
fn test_no_overlap() {
    let a = series("A", &[(0, 1.0), (1, 2.0)]);
    let b = series("B", &[(5, 1.0), (6, 2.0)]);

    assert!(matches!(
        ComparisonEngine::compare(&[a, b]),
        Err(ComparisonError::InsufficientOverlap { series: 2 })
    ));
}

#[test]
fn test_single_common_date_has_no_summaries() {
    let a = series("A", &[(0, 1.0), (1, 2.0)]);
    let b = series("B", &[(1, 4.0), (2, 2.0)]);

    let set = ComparisonEngine::compare(&[a, b]).unwrap();

    assert_eq!(set.dates, vec![day(1)]);
    assert_eq!(set.series["A"], vec![100.0]);
    assert_eq!(set.series["B"], vec![100.0]);
    assert!(set.summaries.values().all(Option::is_none));
    assert!(set.relative_performance().is_empty());
}

#[test]
fn test_duplicate_ticker() {
    let a = series("msft", &[(0, 1.0), (1, 2.0)]);
    let b = series("MSFT ", &[(0, 1.0), (1, 2.0)]);

    match ComparisonEngine::compare(&[a, b]) {
        Err(ComparisonError::DuplicateTicker(t)) => assert_eq!(t, "MSFT"),
        other => panic!("expected DuplicateTicker, got {other:?}"),
    }
}

#[test]
fn test_single_series_is_allowed() {
    let a = series("A", &[(0, 4.0), (1, 5.0)]);
    let set = ComparisonEngine::compare(&[a]).unwrap();
    assert_eq!(set.series["A"], vec![100.0, 125.0]);
}

fn closes_by_day() -> impl Strategy<Value = Vec<(u64, f64)>> {
    prop::collection::btree_map(0u64..30, 1.0f64..500.0, 2..20)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_first_aligned_value_is_100(a in closes_by_day(), b in closes_by_day()) {
        let sa = series("A", &a);
        let sb = series("B", &b);

        match ComparisonEngine::compare(&[sa, sb]) {
            Ok(set) => {
                prop_assert!(set.dates.windows(2).all(|w| w[0] < w[1]));
                for ticker in ["A", "B"] {
                    prop_assert_eq!(set.value_at(ticker, 0), Some(100.0));
                    prop_assert_eq!(set.series[ticker].len(), set.dates.len());
                }
            }
            Err(ComparisonError::InsufficientOverlap { .. }) => {}
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }
}
