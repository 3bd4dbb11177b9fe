/// RSI threshold annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsiSignal {
    /// RSI strictly above the overbought threshold
    Overbought,
    /// RSI strictly below the oversold threshold
    Oversold,
    /// Anything else, including undefined RSI
    #[default]
    Neutral,
}

/// Moving-average crossover annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeSignal {
    /// Close crossed above the moving average
    Buy,
    /// Close crossed below the moving average
    Sell,
    /// No crossover
    #[default]
    Hold,
}

/// Where the last close sits relative to the short and long moving averages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePosition {
    /// Above both averages
    AboveBoth,
    /// Below both averages
    BelowBoth,
    /// Between the averages
    Mixed,
}

/// Ordering of the short moving average against the long one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaAlignment {
    /// Short MA strictly above long MA
    ShortAboveLong,
    /// Short MA at or below long MA
    ShortBelowLong,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_serialization() {
        assert_eq!(
            serde_json::to_string(&RsiSignal::Overbought).unwrap(),
            "\"overbought\""
        );
        assert_eq!(serde_json::to_string(&TradeSignal::Hold).unwrap(), "\"hold\"");
        assert_eq!(
            serde_json::to_string(&PricePosition::AboveBoth).unwrap(),
            "\"above_both\""
        );
    }

    #[test]
    fn test_signal_defaults() {
        assert_eq!(RsiSignal::default(), RsiSignal::Neutral);
        assert_eq!(TradeSignal::default(), TradeSignal::Hold);
    }
}
