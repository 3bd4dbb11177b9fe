//! Risk-adjusted performance metrics.

use serde::{Deserialize, Serialize};
use stockscope_data::TimeSeries;
use stockscope_types::PerformanceConfig;

use crate::error::{MetricsError, require_bars};
use crate::summary::{pct_returns, summarize_closes};

/// Performance of one series over its full range. All values are ratios.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    /// last / first - 1
    pub total_return: f64,
    /// Sample std of daily returns
    pub volatility: f64,
    /// volatility * sqrt(trading days per year)
    pub annualized_volatility: f64,
    /// (annualized mean return - risk free rate) / annualized volatility
    pub sharpe_ratio: f64,
    /// Deepest peak-to-trough decline, <= 0
    pub max_drawdown: f64,
    /// First close
    pub start_price: f64,
    /// Last close
    pub end_price: f64,
}

/// Computes performance metrics for a series.
///
/// # Errors
/// [`MetricsError::InsufficientData`] with fewer than 2 bars.
pub fn performance_metrics(
    series: &TimeSeries,
    config: &PerformanceConfig,
) -> Result<PerformanceMetrics, MetricsError> {
    performance_from_closes(&series.closes(), config)
}

/// Computes performance metrics for a raw close sequence.
///
/// # Errors
/// [`MetricsError::InsufficientData`] with fewer than 2 closes.
pub fn performance_from_closes(
    closes: &[f64],
    config: &PerformanceConfig,
) -> Result<PerformanceMetrics, MetricsError> {
    let summary = summarize_closes(closes)?;
    let returns = pct_returns(closes);
    let trading_days = f64::from(config.trading_days_per_year);

    let annualized_volatility = summary.volatility * trading_days.sqrt();
    let sharpe_ratio = if annualized_volatility == 0.0 {
        0.0
    } else {
        let mean_return = returns.iter().sum::<f64>() / returns.len() as f64;
        (mean_return * trading_days - config.risk_free_rate) / annualized_volatility
    };

    Ok(PerformanceMetrics {
        total_return: summary.total_return,
        volatility: summary.volatility,
        annualized_volatility,
        sharpe_ratio,
        max_drawdown: max_drawdown(closes)?,
        start_price: summary.start_price,
        end_price: summary.end_price,
    })
}

/// Most negative `(value - running max) / running max` over the closes,
/// starting from the first close. 0 when prices never fall below a peak.
///
/// # Errors
/// [`MetricsError::InsufficientData`] with fewer than 2 closes.
pub fn max_drawdown(closes: &[f64]) -> Result<f64, MetricsError> {
    require_bars(closes.len())?;

    let mut peak = closes[0];
    let mut worst: f64 = 0.0;
    for &close in closes {
        peak = peak.max(close);
        worst = worst.min((close - peak) / peak);
    }
    Ok(worst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn config() -> PerformanceConfig {
        PerformanceConfig {
            trading_days_per_year: 252,
            risk_free_rate: 0.02,
        }
    }

    #[test]
    fn test_max_drawdown() {
        let dd = max_drawdown(&[100.0, 120.0, 90.0, 130.0, 117.0]).unwrap();
        assert_relative_eq!(dd, -0.25, epsilon = 1e-12);
    }

    #[test]
    fn test_max_drawdown_monotonic_up() {
        assert_eq!(max_drawdown(&[1.0, 2.0, 3.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_max_drawdown_first_day_drop() {
        assert_relative_eq!(max_drawdown(&[100.0, 50.0]).unwrap(), -0.5);
    }

    #[test]
    fn test_constant_growth_has_zero_sharpe() {
        let metrics = performance_from_closes(&[100.0, 200.0, 400.0], &config()).unwrap();
        assert_relative_eq!(metrics.annualized_volatility, 0.0, epsilon = 1e-12);
        assert_eq!(metrics.sharpe_ratio, 0.0);
    }

    #[test]
    fn test_sharpe_and_annualization() {
        let closes = [50.0, 45.0, 54.0];
        let metrics = performance_from_closes(&closes, &config()).unwrap();

        let vol = ((0.15f64).powi(2) * 2.0).sqrt();
        assert_relative_eq!(metrics.volatility, vol, epsilon = 1e-12);
        assert_relative_eq!(
            metrics.annualized_volatility,
            vol * 252f64.sqrt(),
            epsilon = 1e-12
        );
        let expected_sharpe = (0.05 * 252.0 - 0.02) / (vol * 252f64.sqrt());
        assert_relative_eq!(metrics.sharpe_ratio, expected_sharpe, epsilon = 1e-10);
        assert_relative_eq!(metrics.max_drawdown, -0.1, epsilon = 1e-12);
        assert_eq!(metrics.start_price, 50.0);
        assert_eq!(metrics.end_price, 54.0);
    }

    #[test]
    fn test_single_bar_fails() {
        assert!(matches!(
            performance_from_closes(&[10.0], &config()),
            Err(MetricsError::InsufficientData { available: 1, .. })
        ));
    }
}
