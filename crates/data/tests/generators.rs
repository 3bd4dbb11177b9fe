#![allow(dead_code)]

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use stockscope_types::Bar;

/// Generates valid daily bar sequences for property tests.
pub fn valid_bar_sequence(len: usize) -> impl Strategy<Value = Vec<Bar>> {
    prop::collection::vec(valid_bar(), len..=len).prop_map(|mut bars| {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for (i, bar) in bars.iter_mut().enumerate() {
            bar.date = start + Days::new(i as u64);
        }
        bars
    })
}

fn valid_bar() -> impl Strategy<Value = Bar> {
    (
        10.0f64..500.0, // base price
        0.01..5.0,      // half range
        0.0..1_000_000.0,
    )
        .prop_map(|(base, range, volume)| Bar {
            date: NaiveDate::MIN, // overwritten in valid_bar_sequence
            open: base,
            high: base + range,
            low: base - range,
            close: base + range * 0.5,
            volume,
        })
}
