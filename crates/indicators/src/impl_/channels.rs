//! Price channels (Donchian style)

use serde::Serialize;
use stockscope_data::TimeSeries;
use stockscope_types::Bar;

use crate::rolling::{rolling_max, rolling_min};
use crate::traits::MultiOutputIndicator;

/// Upper, middle and lower channel lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChannelResult {
    /// Highest high over the period
    pub upper: Vec<Option<f64>>,
    /// Mean of upper and lower
    pub middle: Vec<Option<f64>>,
    /// Lowest low over the period
    pub lower: Vec<Option<f64>>,
}

/// Highest-high / lowest-low channel.
#[derive(Debug, Clone)]
pub struct PriceChannels {
    /// Lookback period
    pub period: usize,
}

impl PriceChannels {
    /// Creates a new price channel indicator.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl MultiOutputIndicator for PriceChannels {
    type Output = ChannelResult;

    fn compute_all(&self, bars: &[Bar]) -> Self::Output {
        let highs: Vec<f64> = bars.iter().map(|b| b.high).collect();
        let lows: Vec<f64> = bars.iter().map(|b| b.low).collect();
        let upper = rolling_max(&highs, self.period);
        let lower = rolling_min(&lows, self.period);
        let middle = upper
            .iter()
            .zip(&lower)
            .map(|(u, l)| Some(((*u)? + (*l)?) / 2.0))
            .collect();

        ChannelResult {
            upper,
            middle,
            lower,
        }
    }

    fn warmup_periods(&self) -> usize {
        self.period.saturating_sub(1)
    }
}

/// Price channels of a series.
#[must_use]
pub fn price_channels(series: &TimeSeries, period: usize) -> ChannelResult {
    PriceChannels::new(period).compute_all(series.bars())
}
