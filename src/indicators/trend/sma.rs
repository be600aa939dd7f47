//! SMA (Simple Moving Average) indicator

use crate::common::math;
use crate::models::{PriceSeries, Series};

/// Trailing mean of the last `period` closes; `None` until the window fills.
pub fn sma_series(prices: &PriceSeries, period: usize) -> Series {
    math::sma(&math::to_series(&prices.closes()), period)
}

pub fn calculate_sma(prices: &PriceSeries, period: usize) -> Option<f64> {
    sma_series(prices, period).last().copied().flatten()
}
