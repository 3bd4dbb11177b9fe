//! Strike-sorted detail view of one expiry.

use chrono::NaiveDate;
use serde::Serialize;
use stockscope_types::{ContractType, OptionContract, OptionsConfig};

use crate::aggregate::interest_value;
use crate::chain::OptionsChain;
use crate::error::OptionsError;

/// One strike of the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ChainRow {
    /// Strike price
    pub strike: f64,
    /// Last price
    pub last_price: f64,
    /// Best bid
    pub bid: Option<f64>,
    /// Best ask
    pub ask: Option<f64>,
    /// Session volume
    pub volume: u64,
    /// Open interest, never 0 here
    pub open_interest: u64,
    /// open_interest * last_price * contract multiplier
    pub interest_value: f64,
    /// Implied volatility
    pub implied_volatility: Option<f64>,
}

impl ChainRow {
    fn new(contract: &OptionContract, multiplier: f64) -> Self {
        Self {
            strike: contract.strike,
            last_price: contract.last_price,
            bid: contract.bid,
            ask: contract.ask,
            volume: contract.volume,
            open_interest: contract.open_interest,
            interest_value: interest_value(contract, multiplier),
            implied_volatility: contract.implied_volatility,
        }
    }
}

/// Calls and puts of one expiry with open interest, by ascending strike.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailedChain {
    /// Selected expiry
    pub expiry: NaiveDate,
    /// Call rows
    pub calls: Vec<ChainRow>,
    /// Put rows
    pub puts: Vec<ChainRow>,
}

/// Detail view of one expiry. Zero open-interest contracts are left out;
/// aggregates in [`crate::aggregate`] still count them.
///
/// # Errors
/// [`OptionsError::UnknownExpiry`] when no contract expires on `expiry`.
pub fn detailed_chain(
    chain: &OptionsChain,
    expiry: NaiveDate,
    config: &OptionsConfig,
) -> Result<DetailedChain, OptionsError> {
    if !chain.contracts().iter().any(|c| c.expiry == expiry) {
        return Err(OptionsError::UnknownExpiry(expiry));
    }

    let rows = |contract_type| -> Vec<ChainRow> {
        let mut rows: Vec<ChainRow> = chain
            .side(expiry, contract_type)
            .filter(|c| c.open_interest > 0)
            .map(|c| ChainRow::new(c, config.contract_multiplier))
            .collect();
        rows.sort_by(|a, b| a.strike.total_cmp(&b.strike));
        rows
    };

    Ok(DetailedChain {
        expiry,
        calls: rows(ContractType::Call),
        puts: rows(ContractType::Put),
    })
}
