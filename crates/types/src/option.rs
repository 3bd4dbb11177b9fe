use chrono::NaiveDate;

/// Call or put.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum ContractType {
    /// Call option
    Call,
    /// Put option
    Put,
}

impl ContractType {
    /// Lowercase name used in payloads.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractType::Call => "call",
            ContractType::Put => "put",
        }
    }
}

impl std::str::FromStr for ContractType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" => Ok(ContractType::Call),
            "put" | "p" => Ok(ContractType::Put),
            other => Err(format!("invalid contract type '{other}'")),
        }
    }
}

/// A single listed options contract as seen in one chain snapshot.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptionContract {
    /// Strike price
    pub strike: f64,
    /// Expiry date
    pub expiry: NaiveDate,
    /// Call or put
    pub contract_type: ContractType,
    /// Outstanding contracts
    pub open_interest: u64,
    /// Last traded price (non-negative)
    pub last_price: f64,
    /// Implied volatility, when the source provides one
    #[serde(default)]
    pub implied_volatility: Option<f64>,
    /// Contracts traded in the session
    #[serde(default)]
    pub volume: u64,
    /// Best bid
    #[serde(default)]
    pub bid: Option<f64>,
    /// Best ask
    #[serde(default)]
    pub ask: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_contract_type_serialization() {
        assert_eq!(
            serde_json::to_string(&ContractType::Call).unwrap(),
            "\"call\""
        );
        assert_eq!(serde_json::to_string(&ContractType::Put).unwrap(), "\"put\"");
    }

    #[test]
    fn test_contract_type_from_str() {
        assert_eq!(ContractType::from_str("CALL"), Ok(ContractType::Call));
        assert_eq!(ContractType::from_str(" p "), Ok(ContractType::Put));
        assert!(ContractType::from_str("straddle").is_err());
    }

    #[test]
    fn test_contract_optional_fields_default() {
        let json = r#"{
            "strike": 150.0,
            "expiry": "2024-06-21",
            "contract_type": "put",
            "open_interest": 12,
            "last_price": 1.25
        }"#;
        let contract: OptionContract = serde_json::from_str(json).unwrap();
        assert_eq!(contract.volume, 0);
        assert!(contract.implied_volatility.is_none());
        assert!(contract.bid.is_none());
    }
}
