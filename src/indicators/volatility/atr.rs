//! ATR (Average True Range) indicator

use crate::common::math;
use crate::indicators::trend::directional_movement;
use crate::models::{PriceSeries, Series};

/// ATR as the trailing simple mean of the true range
pub fn atr_series(prices: &PriceSeries, period: usize) -> Series {
    let (tr, _, _) = directional_movement(prices);
    math::sma(&math::to_series(&tr), period)
}
