//! MACD (Moving Average Convergence Divergence)

use serde::Serialize;
use stockscope_data::TimeSeries;
use stockscope_types::Bar;

use super::ema::ema_values;
use crate::traits::MultiOutputIndicator;

/// MACD line, signal line and histogram, aligned to the input bars.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MacdResult {
    /// EMA(fast) - EMA(slow)
    pub macd: Vec<Option<f64>>,
    /// EMA(signal) of the MACD line
    pub signal: Vec<Option<f64>>,
    /// MACD - signal
    pub histogram: Vec<Option<f64>>,
}

/// MACD over adjusted EMAs of the close.
#[derive(Debug, Clone)]
pub struct MACD {
    /// Fast EMA span
    pub fast: usize,
    /// Slow EMA span
    pub slow: usize,
    /// Signal EMA span
    pub signal: usize,
}

impl MACD {
    /// Creates a new MACD indicator.
    #[must_use]
    pub fn new(fast: usize, slow: usize, signal: usize) -> Self {
        Self { fast, slow, signal }
    }
}

impl MultiOutputIndicator for MACD {
    type Output = MacdResult;

    fn compute_all(&self, bars: &[Bar]) -> Self::Output {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let fast = ema_values(&closes, self.fast);
        let slow = ema_values(&closes, self.slow);

        let macd: Vec<Option<f64>> = fast
            .iter()
            .zip(&slow)
            .map(|(f, s)| Some((*f)? - (*s)?))
            .collect();

        // EMA spans are recursive from the first bar, so the MACD line is
        // either fully defined or fully undefined.
        let signal = if macd.iter().all(Option::is_some) {
            let line: Vec<f64> = macd.iter().flatten().copied().collect();
            ema_values(&line, self.signal)
        } else {
            vec![None; macd.len()]
        };

        let histogram = macd
            .iter()
            .zip(&signal)
            .map(|(m, s)| Some((*m)? - (*s)?))
            .collect();

        MacdResult {
            macd,
            signal,
            histogram,
        }
    }

    fn warmup_periods(&self) -> usize {
        0
    }
}

/// MACD of closes.
#[must_use]
pub fn macd(series: &TimeSeries, fast: usize, slow: usize, signal: usize) -> MacdResult {
    MACD::new(fast, slow, signal).compute_all(series.bars())
}
