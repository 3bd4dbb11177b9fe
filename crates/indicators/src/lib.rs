//! Stockscope Indicators
//!
//! Technical indicator engine for the stockscope analytics core.
//! Every indicator is a pure function of an immutable bar slice, so the
//! same series can be processed for many tickers concurrently without locks.
//!
//! # Features
//! - Indicator trait with vectorized computation
//! - Multi-output indicators (MACD, Bollinger Bands, Stochastic, Channels)
//! - Rule-based RSI and crossover annotations
//! - [`IndicatorEngine`] assembling per-date [`IndicatorSet`] rows
//!
//! # Available Indicators
//! - SMA: Simple Moving Average
//! - EMA: Exponential Moving Average (adjusted weighting)
//! - RSI: Relative Strength Index (simple trailing means)
//! - MACD: line, signal, histogram
//! - Bollinger Bands: Upper, Middle, Lower bands
//! - Stochastic Oscillator: %K, %D
//! - Volume SMA and On-Balance Volume
//! - Price Channels and Support/Resistance levels

#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(missing_docs)]

/// Indicator engine and report types.
pub mod engine;
/// Indicator error types.
pub mod error;
/// Concrete indicator implementations.
pub mod impl_;
/// Trailing-window helpers.
pub mod rolling;
/// Rule-based RSI, crossover and trend annotations.
pub mod signal;
/// Indicator traits.
pub mod traits;

// Re-export main types
pub use engine::{
    EmaSeries, IndicatorEngine, IndicatorRow, IndicatorSet, TechnicalReport, WarmupPeriods,
};
pub use error::IndicatorError;
pub use signal::{
    TrendAssessment, classify_rsi, crossover_signals, signal, trend_assessment,
};
pub use stockscope_types::{RsiSignal, TradeSignal};
pub use traits::{Indicator, MultiOutputIndicator};

// Re-export indicator implementations
pub use impl_::{
    bollinger::{BollingerBands, BollingerResult, bollinger},
    channels::{ChannelResult, PriceChannels, price_channels},
    ema::{EMA, ema, ema_values},
    macd::{MACD, MacdResult, macd},
    rsi::{RSI, rsi},
    sma::{SMA, moving_average},
    stochastic::{Stochastic, StochasticResult, stochastic},
    support_resistance::{SupportResistance, support_resistance},
    volume::{VolumeSMA, on_balance_volume, volume_moving_average},
};
