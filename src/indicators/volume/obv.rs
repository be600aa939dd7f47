//! OBV (On-Balance Volume) indicator

use crate::common::math;
use crate::models::{PriceSeries, Series};

pub struct ObvSeries {
    pub obv: Series,
    pub moving_average: Series,
}

/// Running volume total seeded at 0: `+volume` on an up close, `-volume` on a
/// down close, unchanged otherwise.
pub fn obv_values(prices: &PriceSeries) -> Vec<f64> {
    let bars = prices.bars();
    let mut total = 0.0;
    let mut out = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        if i > 0 {
            let prev_close = bars[i - 1].close;
            if bar.close > prev_close {
                total += bar.volume as f64;
            } else if bar.close < prev_close {
                total -= bar.volume as f64;
            }
        }
        out.push(total);
    }

    out
}

/// OBV plus its trailing simple moving average
pub fn obv_series(prices: &PriceSeries, ma_period: usize) -> ObvSeries {
    let obv = math::to_series(&obv_values(prices));
    let moving_average = math::sma(&obv, ma_period);
    ObvSeries {
        obv,
        moving_average,
    }
}
