//! Volume indicators

use stockscope_data::TimeSeries;
use stockscope_types::Bar;

use crate::rolling::rolling_mean;
use crate::traits::Indicator;

/// Trailing mean of volume.
#[derive(Debug, Clone)]
pub struct VolumeSMA {
    /// Averaging window
    pub window: usize,
}

impl VolumeSMA {
    /// Creates a new volume moving average.
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl Indicator for VolumeSMA {
    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let volumes: Vec<f64> = bars.iter().map(|b| b.volume).collect();
        rolling_mean(&volumes, self.window)
    }

    fn warmup_periods(&self) -> usize {
        self.window.saturating_sub(1)
    }
}

/// Trailing `window` mean of volume.
#[must_use]
pub fn volume_moving_average(series: &TimeSeries, window: usize) -> Vec<Option<f64>> {
    VolumeSMA::new(window).compute(series.bars())
}

/// On-Balance Volume. Starts at 0 on the first bar; unchanged closes carry
/// the previous value.
#[must_use]
pub fn on_balance_volume(series: &TimeSeries) -> Vec<f64> {
    let bars = series.bars();
    let mut obv = Vec::with_capacity(bars.len());
    let mut running = 0.0;
    for (i, bar) in bars.iter().enumerate() {
        if i > 0 {
            let prev = bars[i - 1].close;
            if bar.close > prev {
                running += bar.volume;
            } else if bar.close < prev {
                running -= bar.volume;
            }
        }
        obv.push(running);
    }
    obv
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use stockscope_types::Period;

    fn series(data: &[(f64, f64)]) -> TimeSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = data
            .iter()
            .enumerate()
            .map(|(i, &(close, volume))| Bar::flat(start + Days::new(i as u64), close, volume))
            .collect();
        TimeSeries::new("VOL", Period::OneMonth, bars).unwrap()
    }

    #[test]
    fn test_obv() {
        let s = series(&[(10.0, 100.0), (11.0, 200.0), (10.5, 50.0), (10.5, 75.0), (12.0, 25.0)]);
        assert_eq!(on_balance_volume(&s), vec![0.0, 200.0, 150.0, 150.0, 175.0]);
    }

    #[test]
    fn test_obv_single_bar() {
        assert_eq!(on_balance_volume(&series(&[(10.0, 100.0)])), vec![0.0]);
    }

    #[test]
    fn test_volume_sma() {
        let s = series(&[(1.0, 100.0), (1.0, 200.0), (1.0, 600.0)]);
        assert_eq!(volume_moving_average(&s, 2), vec![None, Some(150.0), Some(400.0)]);
    }
}
