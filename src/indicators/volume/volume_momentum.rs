//! Volume relative to its recent average

use crate::common::math;
use crate::models::{PriceSeries, Series};

/// `volume[t] / SMA(volume, period)`; undefined until the window fills or
/// when the mean is zero.
pub fn volume_momentum_series(prices: &PriceSeries, period: usize) -> Series {
    let volumes = math::to_series(&prices.volumes());
    let mean = math::sma(&volumes, period);
    math::zip_with(&volumes, &mean, math::safe_div)
}

/// Mean volume over every bar up to and including `t`.
pub fn average_volume_series(prices: &PriceSeries) -> Series {
    math::expanding_mean(&prices.volumes())
}
