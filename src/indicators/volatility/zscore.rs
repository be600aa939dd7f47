//! Z-score of the close against its trailing mean

use crate::common::math;
use crate::models::{PriceSeries, Series};

/// `(close - SMA(period)) / std(period)`; undefined for a flat window.
pub fn zscore_series(prices: &PriceSeries, period: usize) -> Series {
    let closes = math::to_series(&prices.closes());
    let mean = math::sma(&closes, period);
    let std = math::rolling_std(&closes, period);

    closes
        .iter()
        .zip(mean.iter().zip(std.iter()))
        .map(|(close, (mean, std))| math::safe_div(Some((*close)? - (*mean)?), *std))
        .collect()
}
