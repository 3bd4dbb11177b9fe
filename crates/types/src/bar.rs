use chrono::NaiveDate;

/// One daily OHLCV bar.
/// `date` is the trading date of the session the bar summarizes.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Bar {
    /// Trading date
    pub date: NaiveDate,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Volume (non-negative)
    pub volume: f64,
}

impl Bar {
    /// Builds a flat bar where open, high, low and close all equal `close`.
    #[must_use]
    pub fn flat(date: NaiveDate, close: f64, volume: f64) -> Self {
        Self {
            date,
            open: close,
            high: close,
            low: close,
            close,
            volume,
        }
    }
}
