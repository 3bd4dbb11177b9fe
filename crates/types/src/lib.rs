//! Stockscope Types
//!
//! Core data structures shared by the stockscope analytics engines.
//! This crate provides types for daily bars, options contracts, lookback
//! periods, signal annotations and the analytics configuration.

#![deny(clippy::all)]

pub mod bar;
pub mod config;
pub mod error;
pub mod option;
pub mod period;
pub mod signal;

// Re-export main types for convenience
pub use bar::Bar;
pub use config::{
    AnalyticsConfig, BollingerConfig, ChannelConfig, MacdConfig, MovingAverageConfig,
    OptionsConfig, PerformanceConfig, RsiConfig, StochasticConfig, SupportResistanceConfig,
};
pub use error::CoreError;
pub use option::{ContractType, OptionContract};
pub use period::{ParsePeriodError, Period};
pub use signal::{MaAlignment, PricePosition, RsiSignal, TradeSignal};
