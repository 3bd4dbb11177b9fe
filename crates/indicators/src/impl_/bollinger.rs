//! Bollinger Bands indicator

use serde::Serialize;
use stockscope_data::TimeSeries;
use stockscope_types::Bar;

use crate::rolling::{rolling_mean, rolling_sample_std};
use crate::traits::MultiOutputIndicator;

/// Bollinger Bands result containing upper, middle, and lower bands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BollingerResult {
    /// Upper band = SMA + std_dev * std
    pub upper: Vec<Option<f64>>,
    /// Middle band = SMA
    pub middle: Vec<Option<f64>>,
    /// Lower band = SMA - std_dev * std
    pub lower: Vec<Option<f64>>,
}

/// Bollinger Bands
///
/// Calculates three bands based on standard deviation around a simple moving average:
/// - Upper Band = SMA + (std_dev * StdDev)
/// - Middle Band = SMA
/// - Lower Band = SMA - (std_dev * StdDev)
///
/// Uses the sample standard deviation (n-1).
#[derive(Debug, Clone)]
pub struct BollingerBands {
    /// Period for the SMA and standard deviation
    pub period: usize,
    /// Multiplier for standard deviation (typically 2.0)
    pub std_dev: f64,
}

impl BollingerBands {
    /// Creates new Bollinger Bands with the given parameters.
    #[must_use]
    pub fn new(period: usize, std_dev: f64) -> Self {
        Self { period, std_dev }
    }
}

impl MultiOutputIndicator for BollingerBands {
    type Output = BollingerResult;

    fn compute_all(&self, bars: &[Bar]) -> Self::Output {
        let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();
        let middle = rolling_mean(&closes, self.period);
        let std = rolling_sample_std(&closes, self.period);

        let band = |sign: f64| -> Vec<Option<f64>> {
            middle
                .iter()
                .zip(&std)
                .map(|(m, s)| Some((*m)? + sign * self.std_dev * (*s)?))
                .collect()
        };
        let upper = band(1.0);
        let lower = band(-1.0);

        // middle is only reported where the bands exist
        let middle = middle
            .iter()
            .zip(&std)
            .map(|(m, s)| s.and(*m))
            .collect();

        BollingerResult {
            upper,
            middle,
            lower,
        }
    }

    fn warmup_periods(&self) -> usize {
        self.period.saturating_sub(1)
    }
}

/// Bollinger Bands of closes.
#[must_use]
pub fn bollinger(series: &TimeSeries, period: usize, std_dev: f64) -> BollingerResult {
    BollingerBands::new(period, std_dev).compute_all(series.bars())
}
