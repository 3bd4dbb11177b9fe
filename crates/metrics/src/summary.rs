//! Total return and period volatility.

use serde::{Deserialize, Serialize};
use stockscope_data::TimeSeries;

use crate::error::{MetricsError, require_bars};

/// Scalar summary of one price series. Values are ratios, not percentages.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// last / first - 1
    pub total_return: f64,
    /// Sample standard deviation of day-over-day returns
    pub volatility: f64,
    /// First close
    pub start_price: f64,
    /// Last close
    pub end_price: f64,
}

/// Summarizes a series.
///
/// # Errors
/// [`MetricsError::InsufficientData`] with fewer than 2 bars.
pub fn summarize(series: &TimeSeries) -> Result<SummaryMetrics, MetricsError> {
    summarize_closes(&series.closes())
}

/// Summarizes a raw close sequence.
///
/// # Errors
/// [`MetricsError::InsufficientData`] with fewer than 2 closes.
pub fn summarize_closes(closes: &[f64]) -> Result<SummaryMetrics, MetricsError> {
    require_bars(closes.len())?;
    let start_price = closes[0];
    let end_price = closes[closes.len() - 1];

    Ok(SummaryMetrics {
        total_return: end_price / start_price - 1.0,
        volatility: sample_std(&pct_returns(closes)),
        start_price,
        end_price,
    })
}

/// Day-over-day percentage returns as ratios; one shorter than `closes`.
#[must_use]
pub fn pct_returns(closes: &[f64]) -> Vec<f64> {
    closes.windows(2).map(|w| w[1] / w[0] - 1.0).collect()
}

/// Sample standard deviation (n - 1). A single observation has no spread
/// and yields 0.
pub(crate) fn sample_std(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_total_return() {
        let summary = summarize_closes(&[100.0, 110.0, 121.0]).unwrap();
        assert_relative_eq!(summary.total_return, 0.21, epsilon = 1e-12);
        // both daily returns are 10%
        assert_relative_eq!(summary.volatility, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_volatility_sample_std() {
        // returns -0.1, +0.2
        let summary = summarize_closes(&[50.0, 45.0, 54.0]).unwrap();
        let expected = ((0.15f64).powi(2) * 2.0).sqrt();
        assert_relative_eq!(summary.volatility, expected, epsilon = 1e-12);
        assert_relative_eq!(summary.total_return, 0.08, epsilon = 1e-12);
    }

    #[test]
    fn test_two_bars_has_zero_volatility() {
        let summary = summarize_closes(&[10.0, 12.0]).unwrap();
        assert_relative_eq!(summary.total_return, 0.2, epsilon = 1e-12);
        assert_eq!(summary.volatility, 0.0);
    }

    #[test]
    fn test_insufficient_data() {
        assert_eq!(
            summarize_closes(&[10.0]),
            Err(MetricsError::InsufficientData {
                required: 2,
                available: 1
            })
        );
        assert!(summarize_closes(&[]).is_err());
    }
}
