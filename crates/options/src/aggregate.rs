//! Per-expiry, per-type open-interest aggregation.
//!
//! Every contract counts, including those with zero open interest.
//! Groups are summed in a canonical order so the result does not depend
//! on the order contracts arrive in.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;
use stockscope_types::{ContractType, OptionContract, OptionsConfig};

use crate::chain::OptionsChain;
use crate::error::OptionsError;

/// Aggregates for the calls or the puts of one expiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SideSummary {
    /// Contracts on this side, zero-OI included
    pub contract_count: usize,
    /// Sum of open interest
    pub total_open_interest: u64,
    /// Sum of open_interest * last_price * contract multiplier
    pub total_interest_value: f64,
    /// Mean last price (0 when the side is empty)
    pub avg_last_price: f64,
    /// Sum of session volume
    pub total_volume: u64,
    /// Mean session volume (0 when the side is empty)
    pub avg_volume: f64,
}

impl SideSummary {
    #[allow(clippy::cast_precision_loss)]
    fn from_contracts(
        expiry: NaiveDate,
        contracts: &mut [&OptionContract],
        multiplier: f64,
    ) -> Result<Self, OptionsError> {
        contracts.sort_by(|a, b| canonical_order(a, b));
        let overflow = |field| OptionsError::CountOverflow { expiry, field };

        let mut summary = SideSummary {
            contract_count: contracts.len(),
            ..SideSummary::default()
        };
        let mut price_sum = 0.0;
        for c in contracts.iter() {
            summary.total_open_interest = summary
                .total_open_interest
                .checked_add(c.open_interest)
                .ok_or_else(|| overflow("open_interest"))?;
            summary.total_interest_value += interest_value(c, multiplier);
            summary.total_volume = summary
                .total_volume
                .checked_add(c.volume)
                .ok_or_else(|| overflow("volume"))?;
            price_sum += c.last_price;
        }
        if summary.contract_count > 0 {
            let n = summary.contract_count as f64;
            summary.avg_last_price = price_sum / n;
            summary.avg_volume = summary.total_volume as f64 / n;
        }
        Ok(summary)
    }
}

/// Calls and puts of one expiry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ExpirySummary {
    /// Call side
    pub calls: SideSummary,
    /// Put side
    pub puts: SideSummary,
    /// Put open interest / call open interest, `None` without call open interest
    pub put_call_ratio: Option<f64>,
}

impl ExpirySummary {
    /// Interest value of both sides.
    #[must_use]
    pub fn total_interest_value(&self) -> f64 {
        self.calls.total_interest_value + self.puts.total_interest_value
    }

    #[allow(clippy::cast_precision_loss)]
    fn ratio(calls: &SideSummary, puts: &SideSummary) -> Option<f64> {
        if calls.total_open_interest == 0 {
            return None;
        }
        Some(puts.total_open_interest as f64 / calls.total_open_interest as f64)
    }
}

/// Aggregates keyed by expiry, ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct OpenInterestSummary {
    by_expiry: BTreeMap<NaiveDate, ExpirySummary>,
}

impl OpenInterestSummary {
    /// Expiries, ascending.
    #[must_use]
    pub fn expiries(&self) -> Vec<NaiveDate> {
        self.by_expiry.keys().copied().collect()
    }

    /// Summary of one expiry.
    #[must_use]
    pub fn get(&self, expiry: NaiveDate) -> Option<&ExpirySummary> {
        self.by_expiry.get(&expiry)
    }

    /// Put/call open-interest ratio of one expiry.
    #[must_use]
    pub fn put_call_ratio(&self, expiry: NaiveDate) -> Option<f64> {
        self.by_expiry.get(&expiry)?.put_call_ratio
    }

    /// Iterates `(expiry, summary)` by ascending expiry.
    pub fn iter(&self) -> impl Iterator<Item = (&NaiveDate, &ExpirySummary)> {
        self.by_expiry.iter()
    }

    /// Number of expiries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_expiry.len()
    }

    /// True when there are no expiries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_expiry.is_empty()
    }
}

/// Aggregates a chain by expiry and contract type.
///
/// # Errors
/// [`OptionsError::CountOverflow`] when a side's open interest or volume
/// total does not fit in a `u64`.
pub fn aggregate(
    chain: &OptionsChain,
    config: &OptionsConfig,
) -> Result<OpenInterestSummary, OptionsError> {
    let multiplier = config.contract_multiplier;

    let by_expiry = chain
        .by_expiry()
        .into_iter()
        .map(|(expiry, contracts)| -> Result<_, OptionsError> {
            let (mut calls, mut puts): (Vec<&OptionContract>, Vec<&OptionContract>) = contracts
                .into_iter()
                .partition(|c| c.contract_type == ContractType::Call);
            let calls = SideSummary::from_contracts(expiry, &mut calls, multiplier)?;
            let puts = SideSummary::from_contracts(expiry, &mut puts, multiplier)?;
            let summary = ExpirySummary {
                put_call_ratio: ExpirySummary::ratio(&calls, &puts),
                calls,
                puts,
            };
            Ok((expiry, summary))
        })
        .collect::<Result<BTreeMap<_, _>, _>>()?;

    tracing::debug!(
        "aggregated {} contracts of {} across {} expiries",
        chain.len(),
        chain.symbol(),
        by_expiry.len()
    );

    Ok(OpenInterestSummary { by_expiry })
}

#[allow(clippy::cast_precision_loss)]
pub(crate) fn interest_value(contract: &OptionContract, multiplier: f64) -> f64 {
    contract.open_interest as f64 * contract.last_price * multiplier
}

pub(crate) fn canonical_order(a: &OptionContract, b: &OptionContract) -> std::cmp::Ordering {
    a.strike
        .total_cmp(&b.strike)
        .then(a.last_price.total_cmp(&b.last_price))
        .then(a.open_interest.cmp(&b.open_interest))
}
