//! Stochastic Oscillator

use serde::Serialize;
use stockscope_data::TimeSeries;
use stockscope_types::Bar;

use crate::rolling::{rolling_max, rolling_mean_opt, rolling_min};
use crate::traits::MultiOutputIndicator;

/// %K and %D lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StochasticResult {
    /// 100 * (close - lowest low) / (highest high - lowest low)
    pub k: Vec<Option<f64>>,
    /// SMA of %K
    pub d: Vec<Option<f64>>,
}

/// Stochastic Oscillator
///
/// %K is undefined when the high-low range of the window is zero.
#[derive(Debug, Clone)]
pub struct Stochastic {
    /// Lookback for highest high / lowest low
    pub k_period: usize,
    /// Smoothing window for %D
    pub d_period: usize,
}

impl Stochastic {
    /// Creates a new Stochastic Oscillator.
    #[must_use]
    pub fn new(k_period: usize, d_period: usize) -> Self {
        Self { k_period, d_period }
    }
}

impl MultiOutputIndicator for Stochastic {
    type Output = StochasticResult;

    fn compute_all(&self, bars: &[Bar]) -> Self::Output {
        let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
        let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
        let highest = rolling_max(&highs, self.k_period);
        let lowest = rolling_min(&lows, self.k_period);

        let k: Vec<Option<f64>> = bars
            .iter()
            .zip(highest.iter().zip(&lowest))
            .map(|(bar, (hh, ll))| {
                let (hh, ll) = ((*hh)?, (*ll)?);
                let range = hh - ll;
                if range == 0.0 {
                    return None;
                }
                Some(100.0 * (bar.close - ll) / range)
            })
            .collect();
        let d = rolling_mean_opt(&k, self.d_period);

        StochasticResult { k, d }
    }

    fn warmup_periods(&self) -> usize {
        self.k_period.saturating_add(self.d_period).saturating_sub(2)
    }
}

/// Stochastic Oscillator of a series.
#[must_use]
pub fn stochastic(series: &TimeSeries, k_period: usize, d_period: usize) -> StochasticResult {
    Stochastic::new(k_period, d_period).compute_all(series.bars())
}
