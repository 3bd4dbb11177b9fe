//! Simple Moving Average (SMA) indicator

use stockscope_data::TimeSeries;
use stockscope_types::Bar;

use crate::rolling::rolling_mean;
use crate::traits::Indicator;

/// Simple Moving Average
///
/// Calculates the arithmetic mean of the last N close prices.
#[derive(Debug, Clone)]
pub struct SMA {
    /// Number of periods for the moving average
    pub period: usize,
}

impl SMA {
    /// Creates a new SMA indicator with the given period.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for SMA {
    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        rolling_mean(&closes, self.period)
    }

    fn warmup_periods(&self) -> usize {
        self.period.saturating_sub(1)
    }
}

/// Trailing `window` mean of closes; the first `window - 1` dates are `None`.
#[must_use]
pub fn moving_average(series: &TimeSeries, window: usize) -> Vec<Option<f64>> {
    SMA::new(window).compute(series.bars())
}
