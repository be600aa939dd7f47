//! EMA (Exponential Moving Average) indicator

use crate::common::math;
use crate::models::{PriceSeries, Series};

/// EMA of closes for every bar, seeded by the first close.
pub fn ema_series(prices: &PriceSeries, period: usize) -> Series {
    math::ema(&math::to_series(&prices.closes()), period)
}

/// EMA on the latest bar
pub fn calculate_ema(prices: &PriceSeries, period: usize) -> Option<f64> {
    ema_series(prices, period).last().copied().flatten()
}
