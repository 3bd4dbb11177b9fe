//! Coercion of loosely-typed chain rows into contracts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use stockscope_types::{ContractType, OptionContract};

use crate::error::OptionsError;

/// An options-chain row as delivered by the fetch layer, every column optional.
///
/// Counts arrive as floats because the source tables are float-typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawOptionContract {
    /// Strike price
    pub strike: Option<f64>,
    /// Expiry date
    pub expiry: Option<NaiveDate>,
    /// "call"/"put" (or "c"/"p")
    pub contract_type: Option<String>,
    /// Open interest (falls back to 0)
    pub open_interest: Option<f64>,
    /// Last price (falls back to 0)
    pub last_price: Option<f64>,
    /// Implied volatility
    pub implied_volatility: Option<f64>,
    /// Volume (falls back to 0)
    pub volume: Option<f64>,
    /// Best bid
    pub bid: Option<f64>,
    /// Best ask
    pub ask: Option<f64>,
}

impl RawOptionContract {
    /// Coerces one row. `index` is used for error reporting only.
    ///
    /// # Errors
    /// - [`OptionsError::MissingField`] when strike, expiry or type is absent.
    /// - [`OptionsError::CorruptData`] for an unknown type, non-finite values,
    ///   negative counts or prices, fractional counts, or counts beyond `u64`.
    pub fn into_contract(self, index: usize) -> Result<OptionContract, OptionsError> {
        let missing = |field| OptionsError::MissingField { index, field };

        let strike = self.strike.ok_or_else(|| missing("strike"))?;
        let expiry = self.expiry.ok_or_else(|| missing("expiry"))?;
        let contract_type: ContractType = self
            .contract_type
            .ok_or_else(|| missing("contract_type"))?
            .parse()
            .map_err(|e| OptionsError::CorruptData(format!("row {index}: {e}")))?;

        if !strike.is_finite() || strike <= 0.0 {
            return Err(OptionsError::CorruptData(format!(
                "Invalid strike at row {index}: {strike}"
            )));
        }

        let last_price = non_negative(index, "last_price", self.last_price.unwrap_or(0.0))?;
        for (field, value) in [
            ("implied_volatility", self.implied_volatility),
            ("bid", self.bid),
            ("ask", self.ask),
        ] {
            if let Some(v) = value {
                non_negative(index, field, v)?;
            }
        }

        Ok(OptionContract {
            strike,
            expiry,
            contract_type,
            open_interest: count(index, "open_interest", self.open_interest)?,
            last_price,
            implied_volatility: self.implied_volatility,
            volume: count(index, "volume", self.volume)?,
            bid: self.bid,
            ask: self.ask,
        })
    }
}

fn non_negative(index: usize, field: &str, value: f64) -> Result<f64, OptionsError> {
    if !value.is_finite() || value < 0.0 {
        return Err(OptionsError::CorruptData(format!(
            "Invalid {field} at row {index}: {value}"
        )));
    }
    Ok(value)
}

#[allow(clippy::cast_precision_loss)]
const MAX_COUNT: f64 = u64::MAX as f64;

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(index: usize, field: &str, value: Option<f64>) -> Result<u64, OptionsError> {
    let value = non_negative(index, field, value.unwrap_or(0.0))?;
    if value.fract() != 0.0 {
        return Err(OptionsError::CorruptData(format!(
            "Fractional {field} at row {index}: {value}"
        )));
    }
    // u64::MAX rounds up to 2^64 as f64, which the cast would saturate
    if value >= MAX_COUNT {
        return Err(OptionsError::CorruptData(format!(
            "{field} out of range at row {index}: {value}"
        )));
    }
    Ok(value as u64)
}

/// Coerces raw rows in order.
///
/// # Errors
/// The first per-row error from [`RawOptionContract::into_contract`].
pub fn coerce_contracts(rows: Vec<RawOptionContract>) -> Result<Vec<OptionContract>, OptionsError> {
    rows.into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.into_contract(i).inspect_err(|err| {
                tracing::warn!("rejected raw option contract at row {i}: {err}");
            })
        })
        .collect()
}
