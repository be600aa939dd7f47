//! Bollinger Bands indicator

use crate::common::math;
use crate::models::{PriceSeries, Series};

pub struct BollingerSeries {
    pub middle: Series,
    pub upper: Series,
    pub lower: Series,
    /// Where the close sits inside the band: 0 at the lower band, 1 at the upper.
    pub position: Series,
}

/// Calculate Bollinger Bands
///
/// Middle Band = SMA(period)
/// Upper Band = Middle + (k * sample standard deviation)
/// Lower Band = Middle - (k * sample standard deviation)
pub fn bollinger_series(prices: &PriceSeries, period: usize, k: f64) -> BollingerSeries {
    let closes = math::to_series(&prices.closes());
    let middle = math::sma(&closes, period);
    let std = math::rolling_std(&closes, period);

    let upper = math::zip_with(&middle, &std, |m, s| Some(m? + k * s?));
    let lower = math::zip_with(&middle, &std, |m, s| Some(m? - k * s?));

    let position = closes
        .iter()
        .zip(upper.iter().zip(lower.iter()))
        .map(|(close, (upper, lower))| {
            let (upper, lower) = ((*upper)?, (*lower)?);
            math::safe_div(Some((*close)? - lower), Some(upper - lower))
        })
        .collect();

    BollingerSeries {
        middle,
        upper,
        lower,
        position,
    }
}

/// Calculate Bollinger Bands with default parameters (20 SMA, 2σ)
pub fn bollinger_series_default(prices: &PriceSeries) -> BollingerSeries {
    bollinger_series(prices, 20, 2.0)
}
