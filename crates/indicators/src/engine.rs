//! Indicator engine: assembles per-date indicator rows and full technical
//! reports for one series.

use chrono::NaiveDate;
use serde::Serialize;
use stockscope_data::TimeSeries;
use stockscope_types::{AnalyticsConfig, RsiSignal, TradeSignal};

use crate::error::IndicatorError;
use crate::impl_::{
    bollinger::{BollingerBands, BollingerResult},
    channels::{ChannelResult, PriceChannels},
    ema::EMA,
    macd::{MACD, MacdResult},
    rsi::{RSI, rsi},
    sma::{SMA, moving_average},
    stochastic::{Stochastic, StochasticResult},
    support_resistance::{SupportResistance, support_resistance},
    volume::{VolumeSMA, on_balance_volume},
};
use crate::signal::{TrendAssessment, classify_rsi, crossover_signals, trend_assessment};
use crate::traits::{Indicator, MultiOutputIndicator};

/// Indicator values on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IndicatorRow {
    /// Bar date
    pub date: NaiveDate,
    /// Bar close
    pub close: f64,
    /// Short SMA, `None` during warmup
    pub ma_short: Option<f64>,
    /// Long SMA, `None` during warmup
    pub ma_long: Option<f64>,
    /// RSI in `[0, 100]`, `None` during warmup
    pub rsi: Option<f64>,
    /// RSI threshold annotation
    pub signal: RsiSignal,
}

/// One [`IndicatorRow`] per bar of the source series, in date order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorSet {
    /// Symbol of the source series
    pub symbol: String,
    /// Rows in ascending date order
    pub rows: Vec<IndicatorRow>,
}

impl IndicatorSet {
    /// Row for a date, if the series has a bar there.
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&IndicatorRow> {
        self.rows
            .binary_search_by_key(&date, |row| row.date)
            .ok()
            .map(|idx| &self.rows[idx])
    }

    /// Most recent row.
    #[must_use]
    pub fn latest(&self) -> Option<&IndicatorRow> {
        self.rows.last()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True when there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// EMA values for one span.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmaSeries {
    /// Span
    pub period: usize,
    /// Values aligned with the series
    pub values: Vec<Option<f64>>,
}

/// Leading bars without a value in each windowed output of a report.
///
/// The exponential family (EMA, MACD) is defined from the first bar and has
/// no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WarmupPeriods {
    /// Short SMA
    pub ma_short: usize,
    /// Long SMA
    pub ma_long: usize,
    /// RSI
    pub rsi: usize,
    /// Bollinger Bands
    pub bollinger: usize,
    /// Stochastic %D (%K needs fewer)
    pub stochastic: usize,
    /// Volume moving average
    pub volume_ma: usize,
    /// Price channels
    pub channels: usize,
}

/// Every indicator the engine knows, computed for one series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TechnicalReport {
    /// Per-date moving averages, RSI and RSI annotation
    pub indicators: IndicatorSet,
    /// One entry per configured EMA span
    pub ema: Vec<EmaSeries>,
    /// MACD lines
    pub macd: MacdResult,
    /// Bollinger Bands
    pub bollinger: BollingerResult,
    /// Stochastic Oscillator
    pub stochastic: StochasticResult,
    /// Volume moving average
    pub volume_ma: Vec<Option<f64>>,
    /// On-Balance Volume
    pub obv: Vec<f64>,
    /// Price channels
    pub channels: ChannelResult,
    /// Support and resistance levels
    pub levels: SupportResistance,
    /// Short-MA crossover annotations
    pub crossovers: Vec<TradeSignal>,
    /// Trend snapshot on the last bar
    pub trend: Option<TrendAssessment>,
    /// Leading undefined bars per windowed output
    pub warmup: WarmupPeriods,
}

/// Computes indicators for a series under a fixed, validated configuration.
///
/// Holds no state besides the configuration, so one engine can serve any
/// number of series concurrently.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    config: AnalyticsConfig,
}

impl IndicatorEngine {
    /// Creates an engine after validating the configuration.
    ///
    /// # Errors
    /// [`IndicatorError::InvalidParams`] when the configuration is invalid.
    pub fn new(config: AnalyticsConfig) -> Result<Self, IndicatorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    /// Moving averages, RSI and RSI annotation for every bar.
    #[must_use]
    pub fn compute(&self, series: &TimeSeries) -> IndicatorSet {
        let ma = &self.config.moving_averages;
        let rsi_cfg = &self.config.rsi;

        let ma_short = moving_average(series, ma.short_window);
        let ma_long = moving_average(series, ma.long_window);
        let rsi_values = rsi(series, rsi_cfg.window);

        let rows = series
            .bars()
            .iter()
            .enumerate()
            .map(|(i, bar)| IndicatorRow {
                date: bar.date,
                close: bar.close,
                ma_short: ma_short[i],
                ma_long: ma_long[i],
                rsi: rsi_values[i],
                signal: classify_rsi(rsi_values[i], rsi_cfg.overbought, rsi_cfg.oversold),
            })
            .collect();

        IndicatorSet {
            symbol: series.symbol().to_string(),
            rows,
        }
    }

    /// Full technical report.
    #[must_use]
    pub fn technical_report(&self, series: &TimeSeries) -> TechnicalReport {
        let cfg = &self.config;
        let bars = series.bars();
        let indicators = self.compute(series);
        let rsi_values: Vec<Option<f64>> = indicators.rows.iter().map(|r| r.rsi).collect();

        let bands = BollingerBands::new(cfg.bollinger.period, cfg.bollinger.std_dev);
        let oscillator = Stochastic::new(cfg.stochastic.k_period, cfg.stochastic.d_period);
        let volume_sma = VolumeSMA::new(cfg.volume_ma_window);
        let channels = PriceChannels::new(cfg.channels.period);
        let warmup = WarmupPeriods {
            ma_short: SMA::new(cfg.moving_averages.short_window).warmup_periods(),
            ma_long: SMA::new(cfg.moving_averages.long_window).warmup_periods(),
            rsi: RSI::new(cfg.rsi.window).warmup_periods(),
            bollinger: bands.warmup_periods(),
            stochastic: oscillator.warmup_periods(),
            volume_ma: volume_sma.warmup_periods(),
            channels: channels.warmup_periods(),
        };

        let ema = cfg
            .ema_periods
            .iter()
            .map(|&period| EmaSeries {
                period,
                values: EMA::new(period).compute(bars),
            })
            .collect();

        TechnicalReport {
            ema,
            macd: MACD::new(cfg.macd.fast, cfg.macd.slow, cfg.macd.signal).compute_all(bars),
            bollinger: bands.compute_all(bars),
            stochastic: oscillator.compute_all(bars),
            volume_ma: volume_sma.compute(bars),
            obv: on_balance_volume(series),
            channels: channels.compute_all(bars),
            levels: support_resistance(
                series,
                cfg.support_resistance.window,
                cfg.support_resistance.max_levels,
            ),
            crossovers: crossover_signals(
                series,
                cfg.moving_averages.short_window,
                &rsi_values,
                cfg.rsi.overbought,
                cfg.rsi.oversold,
            ),
            trend: trend_assessment(series, &cfg.moving_averages),
            warmup,
            indicators,
        }
    }
}
