//! Period returns used for the key statistics block

use crate::models::{PriceSeries, Series};

/// Trading days in one month
pub const ONE_MONTH_BARS: usize = 21;

/// `close[t] / close[t - lookback] - 1`; undefined without enough history or
/// with a zero base.
pub fn period_return_series(prices: &PriceSeries, lookback: usize) -> Series {
    let closes = prices.closes();
    (0..closes.len())
        .map(|i| {
            let base = closes[i.checked_sub(lookback)?];
            ratio_minus_one(closes[i], base)
        })
        .collect()
}

/// Return relative to the first close of the supplied window (not a calendar
/// quarter).
pub fn window_return_series(prices: &PriceSeries) -> Series {
    let closes = prices.closes();
    let Some(&first) = closes.first() else {
        return Vec::new();
    };
    closes.iter().map(|&c| ratio_minus_one(c, first)).collect()
}

fn ratio_minus_one(value: f64, base: f64) -> Option<f64> {
    if base == 0.0 {
        return None;
    }
    Some(value / base - 1.0)
}
