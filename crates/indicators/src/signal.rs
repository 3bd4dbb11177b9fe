//! Rule-based annotations derived from indicator values.
//!
//! These are threshold rules, not forecasts.

use serde::Serialize;
use stockscope_data::TimeSeries;
use stockscope_types::{MaAlignment, MovingAverageConfig, PricePosition, RsiSignal, TradeSignal};

use crate::impl_::sma::moving_average;

/// Default overbought threshold.
pub const DEFAULT_OVERBOUGHT: f64 = 70.0;
/// Default oversold threshold.
pub const DEFAULT_OVERSOLD: f64 = 30.0;

/// Classifies an RSI value against explicit thresholds.
///
/// Both thresholds are exclusive: a value equal to `overbought` or
/// `oversold` is neutral. Undefined RSI is neutral.
#[must_use]
pub fn classify_rsi(rsi: Option<f64>, overbought: f64, oversold: f64) -> RsiSignal {
    match rsi {
        Some(value) if value > overbought => RsiSignal::Overbought,
        Some(value) if value < oversold => RsiSignal::Oversold,
        _ => RsiSignal::Neutral,
    }
}

/// Classifies an RSI value with the 70/30 thresholds.
#[must_use]
pub fn signal(rsi: Option<f64>) -> RsiSignal {
    classify_rsi(rsi, DEFAULT_OVERBOUGHT, DEFAULT_OVERSOLD)
}

/// Per-date crossover annotations of close against its `ma_window` SMA,
/// gated by RSI.
///
/// `rsi` must be aligned with the series; missing entries count as undefined.
#[must_use]
pub fn crossover_signals(
    series: &TimeSeries,
    ma_window: usize,
    rsi: &[Option<f64>],
    overbought: f64,
    oversold: f64,
) -> Vec<TradeSignal> {
    let closes = series.closes();
    let ma = moving_average(series, ma_window);

    (0..closes.len())
        .map(|i| {
            if i == 0 {
                return TradeSignal::Hold;
            }
            let (Some(prev_ma), Some(cur_ma), Some(cur_rsi)) =
                (ma[i - 1], ma[i], rsi.get(i).copied().flatten())
            else {
                return TradeSignal::Hold;
            };
            let (prev_close, close) = (closes[i - 1], closes[i]);

            if prev_close <= prev_ma && close > cur_ma && cur_rsi < overbought {
                TradeSignal::Buy
            } else if prev_close >= prev_ma && close < cur_ma && cur_rsi > oversold {
                TradeSignal::Sell
            } else {
                TradeSignal::Hold
            }
        })
        .collect()
}

/// Trend snapshot on the last bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendAssessment {
    /// Last close
    pub close: f64,
    /// Short moving average on the last bar
    pub ma_short: f64,
    /// Long moving average on the last bar
    pub ma_long: f64,
    /// Close relative to both averages
    pub price_position: PricePosition,
    /// Short average relative to long
    pub ma_alignment: MaAlignment,
}

/// Assesses the trend on the last bar. `None` while either average is
/// undefined there.
#[must_use]
pub fn trend_assessment(series: &TimeSeries, config: &MovingAverageConfig) -> Option<TrendAssessment> {
    let close = series.last()?.close;
    let ma_short = moving_average(series, config.short_window).last().copied()??;
    let ma_long = moving_average(series, config.long_window).last().copied()??;

    let price_position = if close > ma_short && close > ma_long {
        PricePosition::AboveBoth
    } else if close < ma_short && close < ma_long {
        PricePosition::BelowBoth
    } else {
        PricePosition::Mixed
    };
    let ma_alignment = if ma_short > ma_long {
        MaAlignment::ShortAboveLong
    } else {
        MaAlignment::ShortBelowLong
    };

    Some(TrendAssessment {
        close,
        ma_short,
        ma_long,
        price_position,
        ma_alignment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};
    use stockscope_types::{Bar, Period};

    fn series(closes: &[f64]) -> TimeSeries {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = closes
            .iter()
            .enumerate()
            .map(|(i, &c)| Bar::flat(start + Days::new(i as u64), c, 1_000.0))
            .collect();
        TimeSeries::new("TEST", Period::OneYear, bars).unwrap()
    }

    #[test]
    fn test_signal_thresholds() {
        assert_eq!(signal(Some(70.1)), RsiSignal::Overbought);
        assert_eq!(signal(Some(29.9)), RsiSignal::Oversold);
        assert_eq!(signal(Some(50.0)), RsiSignal::Neutral);
        assert_eq!(signal(None), RsiSignal::Neutral);
    }

    #[test]
    fn test_signal_boundaries_are_neutral() {
        assert_eq!(signal(Some(70.0)), RsiSignal::Neutral);
        assert_eq!(signal(Some(30.0)), RsiSignal::Neutral);
        assert_eq!(signal(Some(100.0)), RsiSignal::Overbought);
        assert_eq!(signal(Some(0.0)), RsiSignal::Oversold);
    }

    #[test]
    fn test_classify_custom_thresholds() {
        assert_eq!(classify_rsi(Some(65.0), 60.0, 40.0), RsiSignal::Overbought);
        assert_eq!(classify_rsi(Some(60.0), 60.0, 40.0), RsiSignal::Neutral);
    }

    #[test]
    fn test_crossover_buy_and_sell() {
        let s = series(&[10.0, 9.0, 8.0, 12.0, 8.0]);
        // window 2 MA: None, 9.5, 8.5, 10, 10
        let rsi = vec![Some(50.0); 5];
        let signals = crossover_signals(&s, 2, &rsi, 70.0, 30.0);

        assert_eq!(
            signals,
            vec![
                TradeSignal::Hold,
                TradeSignal::Hold,
                TradeSignal::Hold,
                TradeSignal::Buy,
                TradeSignal::Sell,
            ]
        );
    }

    #[test]
    fn test_crossover_gated_by_rsi() {
        let s = series(&[10.0, 9.0, 8.0, 12.0, 8.0]);
        let overbought = vec![Some(80.0); 5];
        assert_eq!(
            crossover_signals(&s, 2, &overbought, 70.0, 30.0)[3],
            TradeSignal::Hold
        );

        let undefined = vec![None; 5];
        assert!(
            crossover_signals(&s, 2, &undefined, 70.0, 30.0)
                .iter()
                .all(|sig| *sig == TradeSignal::Hold)
        );
    }

    #[test]
    fn test_trend_assessment() {
        let closes: Vec<f64> = (0..60).map(|i| 100.0 + f64::from(i)).collect();
        let config = MovingAverageConfig {
            short_window: 20,
            long_window: 50,
        };
        let trend = trend_assessment(&series(&closes), &config).unwrap();

        assert_eq!(trend.price_position, PricePosition::AboveBoth);
        assert_eq!(trend.ma_alignment, MaAlignment::ShortAboveLong);
        assert_eq!(trend.close, 159.0);
    }

    #[test]
    fn test_trend_assessment_needs_long_history() {
        let config = MovingAverageConfig {
            short_window: 20,
            long_window: 50,
        };
        assert!(trend_assessment(&series(&[100.0; 30]), &config).is_none());
    }
}
