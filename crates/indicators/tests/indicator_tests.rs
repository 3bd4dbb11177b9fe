//! Integration tests for the indicator engine.

use approx::assert_relative_eq;
use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use stockscope_data::{RawBar, TimeSeries};
use stockscope_indicators::{IndicatorEngine, RSI, SMA, moving_average, rsi, signal};
use stockscope_indicators::{Indicator, RsiSignal};
use stockscope_types::{AnalyticsConfig, Bar, Period};

const SAMPLE_CLOSES: [f64; 14] = [
    10.0, 12.0, 11.0, 13.0, 15.0, 14.0, 16.0, 18.0, 17.0, 19.0, 20.0, 21.0, 19.0, 22.0,
];

fn series_from_closes(closes: &[f64]) -> TimeSeries {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let bars = closes
        .iter()
        .enumerate()
        .map(|(i, &c)| Bar::flat(start + Days::new(i as u64), c, 1_000.0))
        .collect();
    TimeSeries::new("TEST", Period::OneYear, bars).unwrap()
}

fn closes_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(1.0f64..1_000.0, min_len..=max_len)
}

#[test]
fn test_sample_series_ma20_undefined() {
    let series = series_from_closes(&SAMPLE_CLOSES);
    let ma = moving_average(&series, 20);

    assert_eq!(ma.len(), 14);
    assert!(ma.iter().all(Option::is_none));
}

#[test]
fn test_sample_series_rsi_in_range() {
    let series = series_from_closes(&SAMPLE_CLOSES);

    // a 14-delta window needs 15 closes
    let rsi14 = rsi(&series, 14);
    assert!(rsi14.iter().all(Option::is_none));

    // 13 deltas: gains 17, losses 5 -> RSI = 100 - 100 / (1 + 17/5)
    let rsi13 = rsi(&series, 13);
    let last = rsi13[13].unwrap();
    assert!((0.0..=100.0).contains(&last));
    assert_relative_eq!(last, 100.0 - 100.0 / (1.0 + 17.0 / 5.0), epsilon = 1e-10);
}

#[test]
fn test_engine_signal_follows_config_thresholds() {
    let mut config = AnalyticsConfig::default();
    config.rsi.window = 3;
    config.rsi.overbought = 90.0;
    config.rsi.oversold = 10.0;
    let engine = IndicatorEngine::new(config).unwrap();

    // known RSI of 80 on the last row
    let set = engine.compute(&series_from_closes(&[10.0, 12.0, 11.0, 13.0]));
    assert_relative_eq!(set.rows[3].rsi.unwrap(), 80.0, epsilon = 1e-10);
    assert_eq!(set.rows[3].signal, RsiSignal::Neutral);
    assert_eq!(signal(set.rows[3].rsi), RsiSignal::Overbought);
}

#[test]
fn test_raw_rows_are_deterministic() {
    let rows: Vec<RawBar> = SAMPLE_CLOSES
        .iter()
        .enumerate()
        .map(|(i, &c)| RawBar {
            date: NaiveDate::from_ymd_opt(2024, 2, 1).map(|d| d + Days::new(i as u64)),
            close: Some(c),
            volume: Some(100.0),
            ..RawBar::default()
        })
        .collect();

    let mut config = AnalyticsConfig::default();
    config.moving_averages.short_window = 3;
    config.moving_averages.long_window = 5;
    config.rsi.window = 5;
    let engine = IndicatorEngine::new(config).unwrap();

    let first = TimeSeries::from_raw("msft", Period::OneMonth, Some(rows.clone())).unwrap();
    let second = TimeSeries::from_raw("msft", Period::OneMonth, Some(rows)).unwrap();

    let a = engine.technical_report(&first);
    let b = engine.technical_report(&second);
    assert_eq!(a, b);

    let json_a = serde_json::to_string(&a.indicators).unwrap();
    let json_b = serde_json::to_string(&b.indicators).unwrap();
    assert_eq!(json_a, json_b);
}

proptest! {
    #[test]
    fn prop_ma_defined_count(closes in closes_strategy(1, 120), window in 1usize..40) {
        prop_assume!(window <= closes.len());
        let series = series_from_closes(&closes);
        let ma = SMA::new(window).compute(series.bars());

        let defined = ma.iter().filter(|v| v.is_some()).count();
        prop_assert_eq!(defined, closes.len() - window + 1);
        prop_assert!(ma[..window - 1].iter().all(Option::is_none));

        for (i, value) in ma.iter().enumerate().skip(window - 1) {
            let expected = closes[i + 1 - window..=i].iter().sum::<f64>() / window as f64;
            prop_assert!((value.unwrap() - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_rsi_bounded(closes in closes_strategy(2, 120), window in 1usize..30) {
        let series = series_from_closes(&closes);
        let values = RSI::new(window).compute(series.bars());

        prop_assert_eq!(values.len(), closes.len());
        for (i, value) in values.iter().enumerate() {
            if i < window {
                prop_assert!(value.is_none());
            } else {
                let v = value.unwrap();
                prop_assert!((0.0..=100.0).contains(&v));
            }
        }
    }

    #[test]
    fn prop_rsi_is_100_without_losses(start in 1.0f64..100.0, steps in prop::collection::vec(0.0f64..5.0, 15..40)) {
        let mut closes = vec![start];
        for step in steps {
            let last = *closes.last().unwrap();
            closes.push(last + step);
        }
        let series = series_from_closes(&closes);
        for value in rsi(&series, 14).iter().flatten() {
            prop_assert_eq!(*value, 100.0);
        }
    }

    #[test]
    fn prop_signal_is_pure(value in 0.0f64..=100.0) {
        let expected = if value > 70.0 {
            RsiSignal::Overbought
        } else if value < 30.0 {
            RsiSignal::Oversold
        } else {
            RsiSignal::Neutral
        };
        prop_assert_eq!(signal(Some(value)), expected);
        prop_assert_eq!(signal(Some(value)), signal(Some(value)));
    }
}
