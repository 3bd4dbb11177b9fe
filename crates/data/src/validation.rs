//! Bar sequence validation.

use crate::error::DataError;
use stockscope_types::Bar;

/// Validates a bar sequence for a single instrument.
///
/// # Errors
/// - [`DataError::EmptyData`] when `bars` is empty.
/// - [`DataError::CorruptData`] on non-finite or non-positive prices,
///   negative volume or inconsistent OHLC.
/// - [`DataError::NonMonotonic`] when dates are not strictly increasing.
pub fn validate_bars(bars: &[Bar]) -> Result<(), DataError> {
    if bars.is_empty() {
        return Err(DataError::EmptyData);
    }

    for (i, bar) in bars.iter().enumerate() {
        if !bar.open.is_finite()
            || !bar.high.is_finite()
            || !bar.low.is_finite()
            || !bar.close.is_finite()
            || !bar.volume.is_finite()
        {
            return Err(DataError::CorruptData(format!(
                "NaN/Inf at index {i}: {bar:?}"
            )));
        }

        if bar.volume < 0.0 {
            return Err(DataError::CorruptData(format!(
                "Negative volume at index {i}: {}",
                bar.volume
            )));
        }

        if bar.low > bar.open
            || bar.low > bar.close
            || bar.high < bar.open
            || bar.high < bar.close
        {
            return Err(DataError::CorruptData(format!(
                "Invalid OHLC at index {i}: low={}, high={}, open={}, close={}",
                bar.low, bar.high, bar.open, bar.close
            )));
        }

        if bar.low <= 0.0 {
            return Err(DataError::CorruptData(format!(
                "Non-positive price at index {i}: low={}",
                bar.low
            )));
        }

        if i > 0 && bar.date <= bars[i - 1].date {
            return Err(DataError::NonMonotonic {
                index: i,
                previous: bars[i - 1].date,
                current: bar.date,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_accepts_valid_sequence() {
        let bars = vec![Bar::flat(day(2), 10.0, 1.0), Bar::flat(day(3), 11.0, 1.0)];
        assert!(validate_bars(&bars).is_ok());
    }

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(validate_bars(&[]), Err(DataError::EmptyData)));
    }

    #[test]
    fn test_rejects_duplicate_date() {
        let bars = vec![Bar::flat(day(2), 10.0, 1.0), Bar::flat(day(2), 11.0, 1.0)];
        let err = validate_bars(&bars).unwrap_err();
        assert!(matches!(err, DataError::NonMonotonic { index: 1, .. }));
    }

    #[test]
    fn test_rejects_out_of_order() {
        let bars = vec![Bar::flat(day(5), 10.0, 1.0), Bar::flat(day(3), 11.0, 1.0)];
        assert!(matches!(
            validate_bars(&bars),
            Err(DataError::NonMonotonic { .. })
        ));
    }

    #[test]
    fn test_rejects_nan_close() {
        let bars = vec![Bar::flat(day(2), f64::NAN, 1.0)];
        assert!(matches!(validate_bars(&bars), Err(DataError::CorruptData(_))));
    }

    #[test]
    fn test_rejects_high_below_close() {
        let mut bar = Bar::flat(day(2), 10.0, 1.0);
        bar.high = 9.0;
        assert!(matches!(
            validate_bars(&[bar]),
            Err(DataError::CorruptData(_))
        ));
    }

    #[test]
    fn test_rejects_zero_price() {
        let bars = vec![Bar::flat(day(2), 0.0, 1.0)];
        assert!(matches!(validate_bars(&bars), Err(DataError::CorruptData(_))));
    }
}
