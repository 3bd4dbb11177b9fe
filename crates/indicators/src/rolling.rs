//! Trailing-window helpers shared by the indicators.
//!
//! Each helper returns one entry per input value; entries whose window is not
//! yet full are `None`. Windows are recomputed from scratch at every step so
//! a value depends only on the inputs inside its own window.

/// Arithmetic mean of the trailing `window` values.
#[must_use]
pub fn rolling_mean(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_apply(values, window, |w| w.iter().sum::<f64>() / w.len() as f64)
}

/// Sample standard deviation (n - 1) of the trailing `window` values.
/// Windows shorter than 2 are undefined everywhere.
#[must_use]
pub fn rolling_sample_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    if window < 2 {
        return vec![None; values.len()];
    }
    rolling_apply(values, window, sample_std)
}

/// Maximum of the trailing `window` values.
#[must_use]
pub fn rolling_max(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_apply(values, window, |w| {
        w.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}

/// Minimum of the trailing `window` values.
#[must_use]
pub fn rolling_min(values: &[f64], window: usize) -> Vec<Option<f64>> {
    rolling_apply(values, window, |w| w.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Mean over a series that may itself contain gaps. A window containing any
/// `None` is undefined.
#[must_use]
pub fn rolling_mean_opt(values: &[Option<f64>], window: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return result;
    }

    for i in (window - 1)..values.len() {
        let slice = &values[i + 1 - window..=i];
        if slice.iter().all(Option::is_some) {
            let sum: f64 = slice.iter().flatten().sum();
            result[i] = Some(sum / window as f64);
        }
    }

    result
}

fn sample_std(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

fn rolling_apply<F>(values: &[f64], window: usize, f: F) -> Vec<Option<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    let mut result = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return result;
    }

    for i in (window - 1)..values.len() {
        result[i] = Some(f(&values[i + 1 - window..=i]));
    }

    result
}
