//! Support and resistance levels from local extremes.

use serde::Serialize;
use stockscope_data::TimeSeries;
use stockscope_types::Bar;

/// Distinct price levels found in a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SupportResistance {
    /// Highest levels first
    pub resistance: Vec<f64>,
    /// Ascending; the levels closest to price
    pub support: Vec<f64>,
}

impl SupportResistance {
    /// Finds local extremes over a `2 * window + 1` neighbourhood.
    ///
    /// Bars closer than `window` to either end have an incomplete
    /// neighbourhood and are never levels.
    #[must_use]
    pub fn from_bars(bars: &[Bar], window: usize, max_levels: usize) -> Self {
        let n = bars.len();
        let span = window.checked_mul(2).and_then(|w| w.checked_add(1));
        if span.is_none_or(|span| n < span) {
            return Self::default();
        }

        let mut resistance = Vec::new();
        let mut support = Vec::new();
        for i in window..n - window {
            let neighbourhood = &bars[i - window..=i + window];
            let max_high = neighbourhood
                .iter()
                .map(|b| b.high)
                .fold(f64::NEG_INFINITY, f64::max);
            let min_low = neighbourhood
                .iter()
                .map(|b| b.low)
                .fold(f64::INFINITY, f64::min);

            if bars[i].high == max_high {
                resistance.push(bars[i].high);
            }
            if bars[i].low == min_low {
                support.push(bars[i].low);
            }
        }

        resistance.sort_by(|a, b| b.total_cmp(a));
        resistance.dedup();
        resistance.truncate(max_levels);

        support.sort_by(f64::total_cmp);
        support.dedup();
        let skip = support.len().saturating_sub(max_levels);
        support.drain(..skip);

        Self {
            resistance,
            support,
        }
    }
}

/// Support/resistance levels of a series.
#[must_use]
pub fn support_resistance(
    series: &TimeSeries,
    window: usize,
    max_levels: usize,
) -> SupportResistance {
    SupportResistance::from_bars(series.bars(), window, max_levels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    fn bars(data: &[(f64, f64)]) -> Vec<Bar> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        data.iter()
            .enumerate()
            .map(|(i, &(high, low))| Bar {
                date: start + Days::new(i as u64),
                open: low,
                high,
                low,
                close: low,
                volume: 0.0,
            })
            .collect()
    }

    #[test]
    fn test_levels_found() {
        let bars = bars(&[
            (10.0, 8.0),
            (12.0, 9.0),
            (11.0, 7.0),
            (13.0, 10.0),
            (12.0, 9.5),
            (14.0, 11.0),
            (13.0, 10.5),
        ]);
        let levels = SupportResistance::from_bars(&bars, 1, 5);

        assert_eq!(levels.resistance, vec![14.0, 13.0, 12.0]);
        assert_eq!(levels.support, vec![7.0, 9.5]);
    }

    #[test]
    fn test_max_levels_keeps_extremes() {
        let bars = bars(&[
            (10.0, 8.0),
            (12.0, 9.0),
            (11.0, 7.0),
            (13.0, 10.0),
            (12.0, 9.5),
            (14.0, 11.0),
            (13.0, 10.5),
        ]);
        let levels = SupportResistance::from_bars(&bars, 1, 1);

        assert_eq!(levels.resistance, vec![14.0]);
        assert_eq!(levels.support, vec![9.5]);
    }

    #[test]
    fn test_short_series_has_no_levels() {
        let bars = bars(&[(10.0, 8.0), (12.0, 9.0)]);
        assert_eq!(
            SupportResistance::from_bars(&bars, 1, 5),
            SupportResistance::default()
        );
    }

    #[test]
    fn test_huge_window_has_no_levels() {
        let bars = bars(&[(10.0, 8.0), (12.0, 9.0), (11.0, 7.0)]);
        assert_eq!(
            SupportResistance::from_bars(&bars, usize::MAX, 5),
            SupportResistance::default()
        );
        assert_eq!(
            SupportResistance::from_bars(&bars, usize::MAX / 2, 5),
            SupportResistance::default()
        );
    }
}
