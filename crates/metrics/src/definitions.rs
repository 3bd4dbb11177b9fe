//! Metric definition catalog.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Describes one reported metric for downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricDefinition {
    /// Unit of the value ("ratio", "price", ...)
    pub unit: String,
    /// Human-readable description
    pub description: String,
    /// Value domain ("any", "<=0", ">=0")
    pub domain: String,
}

impl MetricDefinition {
    fn new(unit: &str, description: &str, domain: &str) -> Self {
        Self {
            unit: unit.to_string(),
            description: description.to_string(),
            domain: domain.to_string(),
        }
    }
}

/// Provides the default metric definitions for the output contract.
#[derive(Debug, Default)]
pub struct MetricDefinitions;

impl MetricDefinitions {
    /// Returns the metric definitions keyed by metric name.
    /// Uses `BTreeMap` for deterministic (sorted) key order in JSON output.
    #[must_use]
    pub fn definitions() -> BTreeMap<String, MetricDefinition> {
        [
            (
                "total_return",
                MetricDefinition::new("ratio", "Last close / first close - 1", "any"),
            ),
            (
                "volatility",
                MetricDefinition::new(
                    "ratio",
                    "Sample standard deviation of day-over-day returns",
                    ">=0",
                ),
            ),
            (
                "annualized_volatility",
                MetricDefinition::new(
                    "ratio",
                    "Volatility scaled by sqrt(trading days per year)",
                    ">=0",
                ),
            ),
            (
                "sharpe_ratio",
                MetricDefinition::new(
                    "ratio",
                    "(Annualized mean return - risk free rate) / annualized volatility; 0 without volatility",
                    "any",
                ),
            ),
            (
                "max_drawdown",
                MetricDefinition::new(
                    "ratio",
                    "Deepest decline from a running peak close",
                    "<=0",
                ),
            ),
            (
                "start_price",
                MetricDefinition::new("price", "First close of the range", ">0"),
            ),
            (
                "end_price",
                MetricDefinition::new("price", "Last close of the range", ">0"),
            ),
        ]
        .into_iter()
        .map(|(name, def)| (name.to_string(), def))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_sorted_and_complete() {
        let defs = MetricDefinitions::definitions();
        let keys: Vec<&str> = defs.keys().map(String::as_str).collect();

        assert_eq!(
            keys,
            vec![
                "annualized_volatility",
                "end_price",
                "max_drawdown",
                "sharpe_ratio",
                "start_price",
                "total_return",
                "volatility",
            ]
        );
        assert_eq!(defs["max_drawdown"].domain, "<=0");
    }
}
