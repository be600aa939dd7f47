//! Series primitives shared by every indicator.
//!
//! All functions return a series of the same length as their input. A `None`
//! entry means "not available yet" (window not filled) or "undefined"
//! (zero denominator); callers never see NaN or infinities.

use crate::models::indicators::Series;

/// Lift a slice of plain values into a fully defined series.
pub fn to_series(values: &[f64]) -> Series {
    values.iter().copied().map(Some).collect()
}

/// Smoothing factor for a span-based EMA: `2 / (n + 1)`.
pub fn smoothing_factor(period: usize) -> f64 {
    2.0 / (period.max(1) as f64 + 1.0)
}

/// Recursive exponential moving average.
///
/// Seeded by the first defined value (no min-periods gating):
/// `ema[0] = x[0]`, `ema[t] = α·x[t] + (1-α)·ema[t-1]`.
/// An undefined input carries the previous average forward.
pub fn ema(values: &[Option<f64>], period: usize) -> Series {
    let alpha = smoothing_factor(period);
    let mut state: Option<f64> = None;

    values
        .iter()
        .map(|value| {
            state = match (state, *value) {
                (None, Some(v)) => Some(v),
                (Some(prev), Some(v)) => Some(alpha * v + (1.0 - alpha) * prev),
                (prev, None) => prev,
            };
            state
        })
        .collect()
}

/// Trailing simple moving average over `period` values.
///
/// `None` until `period` values are available, and for any window that
/// contains an undefined value.
pub fn sma(values: &[Option<f64>], period: usize) -> Series {
    rolling(values, period, |window| {
        Some(window.iter().sum::<f64>() / window.len() as f64)
    })
}

/// Trailing sample standard deviation (divisor `n - 1`).
pub fn rolling_std(values: &[Option<f64>], period: usize) -> Series {
    if period < 2 {
        return vec![None; values.len()];
    }
    rolling(values, period, sample_std)
}

/// Sample standard deviation of a complete window.
pub fn sample_std(window: &[f64]) -> Option<f64> {
    let n = window.len();
    if n < 2 {
        return None;
    }
    let mean = window.iter().sum::<f64>() / n as f64;
    let variance = window.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    Some(variance.sqrt())
}

/// Apply `f` to every complete trailing window of `period` defined values.
fn rolling<F>(values: &[Option<f64>], period: usize, f: F) -> Series
where
    F: Fn(&[f64]) -> Option<f64>,
{
    if period == 0 {
        return vec![None; values.len()];
    }

    let mut window = Vec::with_capacity(period);
    (0..values.len())
        .map(|i| {
            if i + 1 < period {
                return None;
            }
            window.clear();
            for value in &values[i + 1 - period..=i] {
                window.push((*value)?);
            }
            f(&window)
        })
        .collect()
}

/// Mean of every value seen so far.
pub fn expanding_mean(values: &[f64]) -> Series {
    let mut sum = 0.0;
    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            sum += v;
            Some(sum / (i + 1) as f64)
        })
        .collect()
}

/// True range of one bar. Without a previous close it is just `high - low`.
pub fn true_range(high: f64, low: f64, prev_close: Option<f64>) -> f64 {
    let range = high - low;
    match prev_close {
        Some(pc) => range.max((high - pc).abs()).max((low - pc).abs()),
        None => range,
    }
}

/// Division that maps a zero (or undefined) denominator to `None`.
pub fn safe_div(numerator: Option<f64>, denominator: Option<f64>) -> Option<f64> {
    let den = denominator?;
    if den == 0.0 {
        return None;
    }
    let result = numerator? / den;
    result.is_finite().then_some(result)
}

/// Element-wise combination of two aligned series.
pub fn zip_with<F>(a: &[Option<f64>], b: &[Option<f64>], f: F) -> Series
where
    F: Fn(Option<f64>, Option<f64>) -> Option<f64>,
{
    a.iter().zip(b.iter()).map(|(x, y)| f(*x, *y)).collect()
}
