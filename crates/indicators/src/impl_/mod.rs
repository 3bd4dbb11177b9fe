//! Indicator implementations
//!
//! Contains all concrete indicator implementations.

/// Bollinger Bands.
pub mod bollinger;
/// Highest-high / lowest-low price channels.
pub mod channels;
/// Exponential moving average.
pub mod ema;
/// MACD line, signal and histogram.
pub mod macd;
/// Relative Strength Index.
pub mod rsi;
/// Simple moving average.
pub mod sma;
/// Stochastic Oscillator.
pub mod stochastic;
/// Support and resistance levels.
pub mod support_resistance;
/// Volume moving average and On-Balance Volume.
pub mod volume;
