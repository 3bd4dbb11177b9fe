//! Exponential Moving Average (EMA) indicator

use stockscope_data::TimeSeries;
use stockscope_types::Bar;

use crate::traits::Indicator;

/// Exponential Moving Average
///
/// Span semantics with adjusted weighting: each value is
/// `sum((1-a)^i * x[t-i]) / sum((1-a)^i)` with `a = 2 / (period + 1)`.
/// Defined from the first bar.
#[derive(Debug, Clone)]
pub struct EMA {
    /// Span of the EMA
    pub period: usize,
}

impl EMA {
    /// Creates a new EMA indicator with the given period.
    #[must_use]
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

impl Indicator for EMA {
    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        ema_values(&closes, self.period)
    }

    fn warmup_periods(&self) -> usize {
        0
    }
}

/// EMA of closes with the given span.
#[must_use]
pub fn ema(series: &TimeSeries, period: usize) -> Vec<Option<f64>> {
    EMA::new(period).compute(series.bars())
}

/// Adjusted EMA over raw values. A zero span yields no values.
#[must_use]
pub fn ema_values(values: &[f64], period: usize) -> Vec<Option<f64>> {
    if period == 0 {
        return vec![None; values.len()];
    }

    let decay = 1.0 - 2.0 / (period as f64 + 1.0);
    let mut numerator = 0.0;
    let mut denominator = 0.0;

    values
        .iter()
        .map(|&x| {
            numerator = x + decay * numerator;
            denominator = 1.0 + decay * denominator;
            Some(numerator / denominator)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::impl_::test_support::bars_from_closes;
    use approx::assert_relative_eq;

    #[test]
    fn test_ema_first_value_is_close() {
        let bars = bars_from_closes(&[10.0, 11.0]);
        let result = EMA::new(3).compute(&bars);
        assert_relative_eq!(result[0].unwrap(), 10.0);
    }

    #[test]
    fn test_ema_adjusted_weights() {
        // span 3 -> alpha 0.5, decay 0.5
        let result = ema_values(&[1.0, 2.0, 3.0], 3);
        assert_relative_eq!(result[1].unwrap(), (2.0 + 0.5 * 1.0) / 1.5, epsilon = 1e-12);
        assert_relative_eq!(
            result[2].unwrap(),
            (3.0 + 0.5 * 2.0 + 0.25 * 1.0) / 1.75,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_ema_constant_input() {
        let result = ema_values(&[7.0; 20], 12);
        for v in result {
            assert_relative_eq!(v.unwrap(), 7.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_ema_period_zero() {
        assert!(ema_values(&[1.0, 2.0], 0).iter().all(Option::is_none));
    }
}
