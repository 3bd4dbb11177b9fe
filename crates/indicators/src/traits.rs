//! Indicator traits.

use stockscope_types::Bar;

/// Trait for single-output indicators.
///
/// All indicators compute over the full bar series and return one value per
/// bar. Values before the warmup period are `None`; they are never
/// backfilled from a partial window.
pub trait Indicator: Send + Sync {
    /// Computes the indicator for all bars.
    ///
    /// Returns a vector with the same length as `bars`.
    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>>;

    /// Number of leading bars without a defined value.
    fn warmup_periods(&self) -> usize;
}

/// Trait for multi-output indicators like Bollinger Bands.
///
/// These indicators produce several aligned series that are computed together.
pub trait MultiOutputIndicator: Send + Sync {
    /// Type of the output structure
    type Output;

    /// Computes all outputs at once.
    fn compute_all(&self, bars: &[Bar]) -> Self::Output;

    /// Number of leading bars without a defined value.
    fn warmup_periods(&self) -> usize;
}
