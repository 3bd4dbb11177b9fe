//! Validated options chain grouped by expiry.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use stockscope_types::{ContractType, OptionContract};

use crate::error::OptionsError;
use crate::raw::{RawOptionContract, coerce_contracts};

/// All contracts of one ticker's chain snapshot. Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsChain {
    symbol: String,
    contracts: Vec<OptionContract>,
}

impl OptionsChain {
    /// Builds a chain from typed contracts.
    ///
    /// # Errors
    /// [`OptionsError::EmptyChain`] when `contracts` is empty.
    pub fn new(
        symbol: impl Into<String>,
        contracts: Vec<OptionContract>,
    ) -> Result<Self, OptionsError> {
        let symbol = symbol.into().trim().to_uppercase();
        if contracts.is_empty() {
            return Err(OptionsError::EmptyChain(symbol));
        }
        Ok(Self { symbol, contracts })
    }

    /// Builds a chain from the fetch layer's raw rows. `None` is a failed
    /// fetch and is reported like an empty chain.
    ///
    /// # Errors
    /// - [`OptionsError::EmptyChain`] when `rows` is `None` or empty.
    /// - Any per-row coercion error.
    pub fn from_raw(
        symbol: impl Into<String>,
        rows: Option<Vec<RawOptionContract>>,
    ) -> Result<Self, OptionsError> {
        let contracts = coerce_contracts(rows.unwrap_or_default())?;
        Self::new(symbol, contracts)
    }

    /// Ticker symbol (trimmed, upper-case).
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Contracts in input order.
    #[must_use]
    pub fn contracts(&self) -> &[OptionContract] {
        &self.contracts
    }

    /// Number of contracts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contracts.len()
    }

    /// Always false for a constructed chain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contracts.is_empty()
    }

    /// Distinct expiries, ascending.
    #[must_use]
    pub fn expiries(&self) -> Vec<NaiveDate> {
        self.by_expiry().into_keys().collect()
    }

    /// Contracts grouped by expiry, ascending. Input order is kept within a group.
    #[must_use]
    pub fn by_expiry(&self) -> BTreeMap<NaiveDate, Vec<&OptionContract>> {
        let mut groups: BTreeMap<NaiveDate, Vec<&OptionContract>> = BTreeMap::new();
        for contract in &self.contracts {
            groups.entry(contract.expiry).or_default().push(contract);
        }
        groups
    }

    /// Contracts of one expiry and type, in input order.
    pub fn side(
        &self,
        expiry: NaiveDate,
        contract_type: ContractType,
    ) -> impl Iterator<Item = &OptionContract> {
        self.contracts
            .iter()
            .filter(move |c| c.expiry == expiry && c.contract_type == contract_type)
    }
}
