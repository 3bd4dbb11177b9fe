//! Analytics configuration.
//!
//! Every field carries a default so partial YAML/JSON documents are valid.

use std::path::Path;

use crate::error::CoreError;

/// Main analytics configuration
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AnalyticsConfig {
    /// Short/long simple moving average windows
    #[serde(default)]
    pub moving_averages: MovingAverageConfig,
    /// RSI window and signal thresholds
    #[serde(default)]
    pub rsi: RsiConfig,
    /// EMA spans
    #[serde(default = "default_ema_periods")]
    pub ema_periods: Vec<usize>,
    /// MACD configuration
    #[serde(default)]
    pub macd: MacdConfig,
    /// Bollinger band configuration
    #[serde(default)]
    pub bollinger: BollingerConfig,
    /// Stochastic oscillator configuration
    #[serde(default)]
    pub stochastic: StochasticConfig,
    /// Price channel configuration
    #[serde(default)]
    pub channels: ChannelConfig,
    /// Support/resistance detection
    #[serde(default)]
    pub support_resistance: SupportResistanceConfig,
    /// Volume moving average window
    #[serde(default = "default_volume_ma_window")]
    pub volume_ma_window: usize,
    /// Performance metric parameters
    #[serde(default)]
    pub performance: PerformanceConfig,
    /// Options aggregation parameters
    #[serde(default)]
    pub options: OptionsConfig,
}

fn default_ema_periods() -> Vec<usize> {
    vec![12, 26]
}

fn default_volume_ma_window() -> usize {
    20
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            moving_averages: MovingAverageConfig::default(),
            rsi: RsiConfig::default(),
            ema_periods: default_ema_periods(),
            macd: MacdConfig::default(),
            bollinger: BollingerConfig::default(),
            stochastic: StochasticConfig::default(),
            channels: ChannelConfig::default(),
            support_resistance: SupportResistanceConfig::default(),
            volume_ma_window: default_volume_ma_window(),
            performance: PerformanceConfig::default(),
            options: OptionsConfig::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Loads a configuration from a YAML file.
    ///
    /// # Errors
    /// - [`CoreError::Io`] when the file cannot be read.
    /// - [`CoreError::Yaml`] when the content is not valid YAML for this schema.
    /// - [`CoreError::Config`] when a value fails validation.
    pub fn from_yaml_file(path: &Path) -> Result<Self, CoreError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Loads a configuration from a YAML string.
    ///
    /// # Errors
    /// Same as [`AnalyticsConfig::from_yaml_file`], minus IO.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CoreError> {
        let config: AnalyticsConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON string.
    ///
    /// # Errors
    /// - [`CoreError::Json`] on malformed JSON.
    /// - [`CoreError::Config`] when a value fails validation.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let config: AnalyticsConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value ranges and cross-field constraints.
    ///
    /// # Errors
    /// Returns [`CoreError::Config`] describing the first violated constraint.
    pub fn validate(&self) -> Result<(), CoreError> {
        let ma = &self.moving_averages;
        require_window("moving_averages.short_window", ma.short_window)?;
        require_window("moving_averages.long_window", ma.long_window)?;
        if ma.short_window >= ma.long_window {
            return Err(CoreError::Config(format!(
                "moving_averages.short_window ({}) must be < long_window ({})",
                ma.short_window, ma.long_window
            )));
        }

        require_window("rsi.window", self.rsi.window)?;
        for (name, value) in [
            ("rsi.overbought", self.rsi.overbought),
            ("rsi.oversold", self.rsi.oversold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(CoreError::Config(format!(
                    "{name} must be within 0..=100, got {value}"
                )));
            }
        }
        if self.rsi.oversold >= self.rsi.overbought {
            return Err(CoreError::Config(format!(
                "rsi.oversold ({}) must be < rsi.overbought ({})",
                self.rsi.oversold, self.rsi.overbought
            )));
        }

        for period in &self.ema_periods {
            require_window("ema_periods[]", *period)?;
        }

        require_window("macd.fast", self.macd.fast)?;
        require_window("macd.slow", self.macd.slow)?;
        require_window("macd.signal", self.macd.signal)?;
        if self.macd.fast >= self.macd.slow {
            return Err(CoreError::Config(format!(
                "macd.fast ({}) must be < macd.slow ({})",
                self.macd.fast, self.macd.slow
            )));
        }

        require_window("bollinger.period", self.bollinger.period)?;
        require_positive("bollinger.std_dev", self.bollinger.std_dev)?;
        require_window("stochastic.k_period", self.stochastic.k_period)?;
        require_window("stochastic.d_period", self.stochastic.d_period)?;
        require_window("channels.period", self.channels.period)?;
        require_window("support_resistance.window", self.support_resistance.window)?;
        require_window(
            "support_resistance.max_levels",
            self.support_resistance.max_levels,
        )?;
        require_window("volume_ma_window", self.volume_ma_window)?;

        if self.performance.trading_days_per_year == 0 {
            return Err(CoreError::Config(
                "performance.trading_days_per_year must be > 0".to_string(),
            ));
        }
        if !self.performance.risk_free_rate.is_finite() {
            return Err(CoreError::Config(
                "performance.risk_free_rate must be finite".to_string(),
            ));
        }
        require_positive(
            "options.contract_multiplier",
            self.options.contract_multiplier,
        )?;

        Ok(())
    }
}

fn require_window(name: &str, value: usize) -> Result<(), CoreError> {
    if value == 0 {
        return Err(CoreError::Config(format!("{name} must be > 0")));
    }
    Ok(())
}

fn require_positive(name: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CoreError::Config(format!("{name} must be > 0, got {value}")));
    }
    Ok(())
}

/// Moving average windows in trading periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MovingAverageConfig {
    /// Short window
    #[serde(default = "default_short_window")]
    pub short_window: usize,
    /// Long window
    #[serde(default = "default_long_window")]
    pub long_window: usize,
}

fn default_short_window() -> usize {
    20
}
fn default_long_window() -> usize {
    50
}

impl Default for MovingAverageConfig {
    fn default() -> Self {
        Self {
            short_window: default_short_window(),
            long_window: default_long_window(),
        }
    }
}

/// RSI parameters
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RsiConfig {
    /// Trailing window for gain/loss means
    #[serde(default = "default_rsi_window")]
    pub window: usize,
    /// Values strictly above are overbought
    #[serde(default = "default_overbought")]
    pub overbought: f64,
    /// Values strictly below are oversold
    #[serde(default = "default_oversold")]
    pub oversold: f64,
}

fn default_rsi_window() -> usize {
    14
}
fn default_overbought() -> f64 {
    70.0
}
fn default_oversold() -> f64 {
    30.0
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            window: default_rsi_window(),
            overbought: default_overbought(),
            oversold: default_oversold(),
        }
    }
}

/// MACD spans
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MacdConfig {
    /// Fast EMA span
    #[serde(default = "default_macd_fast")]
    pub fast: usize,
    /// Slow EMA span
    #[serde(default = "default_macd_slow")]
    pub slow: usize,
    /// Signal line EMA span
    #[serde(default = "default_macd_signal")]
    pub signal: usize,
}

fn default_macd_fast() -> usize {
    12
}
fn default_macd_slow() -> usize {
    26
}
fn default_macd_signal() -> usize {
    9
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast: default_macd_fast(),
            slow: default_macd_slow(),
            signal: default_macd_signal(),
        }
    }
}

/// Bollinger band parameters
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BollingerConfig {
    /// SMA/std window
    #[serde(default = "default_twenty")]
    pub period: usize,
    /// Standard deviation multiplier
    #[serde(default = "default_std_dev")]
    pub std_dev: f64,
}

fn default_twenty() -> usize {
    20
}
fn default_std_dev() -> f64 {
    2.0
}

impl Default for BollingerConfig {
    fn default() -> Self {
        Self {
            period: default_twenty(),
            std_dev: default_std_dev(),
        }
    }
}

/// Stochastic oscillator parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct StochasticConfig {
    /// %K lookback
    #[serde(default = "default_k_period")]
    pub k_period: usize,
    /// %D smoothing
    #[serde(default = "default_d_period")]
    pub d_period: usize,
}

fn default_k_period() -> usize {
    14
}
fn default_d_period() -> usize {
    3
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            k_period: default_k_period(),
            d_period: default_d_period(),
        }
    }
}

/// Price channel parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChannelConfig {
    /// Highest-high / lowest-low window
    #[serde(default = "default_twenty")]
    pub period: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            period: default_twenty(),
        }
    }
}

/// Support/resistance detection parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SupportResistanceConfig {
    /// Half-width of the neighbourhood a pivot must dominate
    #[serde(default = "default_twenty")]
    pub window: usize,
    /// Levels kept per side
    #[serde(default = "default_max_levels")]
    pub max_levels: usize,
}

fn default_max_levels() -> usize {
    5
}

impl Default for SupportResistanceConfig {
    fn default() -> Self {
        Self {
            window: default_twenty(),
            max_levels: default_max_levels(),
        }
    }
}

/// Performance metric parameters
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PerformanceConfig {
    /// Annualization factor
    #[serde(default = "default_trading_days")]
    pub trading_days_per_year: u32,
    /// Annual risk-free rate as a ratio
    #[serde(default = "default_risk_free_rate")]
    pub risk_free_rate: f64,
}

fn default_trading_days() -> u32 {
    252
}
fn default_risk_free_rate() -> f64 {
    0.02
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            trading_days_per_year: default_trading_days(),
            risk_free_rate: default_risk_free_rate(),
        }
    }
}

/// Options aggregation parameters
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptionsConfig {
    /// Multiplier applied to `open_interest * last_price`
    #[serde(default = "default_contract_multiplier")]
    pub contract_multiplier: f64,
}

fn default_contract_multiplier() -> f64 {
    1.0
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            contract_multiplier: default_contract_multiplier(),
        }
    }
}
