//! Relative Strength Index (RSI).
//!
//! ```text
//! delta[t] = close[t] - close[t-1]
//! gain     = max(delta, 0),  loss = max(-delta, 0)
//! RS       = mean(gain over window) / mean(loss over window)
//! RSI      = 100 - 100 / (1 + RS)
//! ```
//!
//! Means are simple trailing means over exactly `window` deltas, so the
//! first `window` dates are undefined. A zero loss mean yields exactly 100.

use stockscope_data::TimeSeries;
use stockscope_types::Bar;

use crate::traits::Indicator;

/// Relative Strength Index over simple trailing means of gains and losses.
#[derive(Debug, Clone)]
pub struct RSI {
    /// Number of deltas in each trailing mean
    pub window: usize,
}

impl RSI {
    /// Creates a new RSI indicator.
    #[must_use]
    pub fn new(window: usize) -> Self {
        Self { window }
    }
}

impl Indicator for RSI {
    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let n = bars.len();
        let mut result = vec![None; n];
        if self.window == 0 || n <= self.window {
            return result;
        }

        // gains[j] / losses[j] belong to the move from bar j to bar j + 1
        let (gains, losses): (Vec<f64>, Vec<f64>) = bars
            .windows(2)
            .map(|pair| {
                let delta = pair[1].close - pair[0].close;
                (delta.max(0.0), (-delta).max(0.0))
            })
            .unzip();

        let w = self.window as f64;
        for i in self.window..n {
            let range = (i - self.window)..i;
            let avg_gain = gains[range.clone()].iter().sum::<f64>() / w;
            let avg_loss = losses[range].iter().sum::<f64>() / w;
            result[i] = Some(rsi_value(avg_gain, avg_loss));
        }

        result
    }

    fn warmup_periods(&self) -> usize {
        self.window
    }
}

/// RSI of closes with the given window; the first `window` dates are `None`.
#[must_use]
pub fn rsi(series: &TimeSeries, window: usize) -> Vec<Option<f64>> {
    RSI::new(window).compute(series.bars())
}

#[inline]
fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    (100.0 - 100.0 / (1.0 + rs)).clamp(0.0, 100.0)
}
