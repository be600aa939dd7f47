//! MACD (Moving Average Convergence Divergence) indicator

use crate::common::math;
use crate::models::{PriceSeries, Series};

pub struct MacdSeries {
    pub macd: Series,
    pub signal: Series,
    pub diff: Series,
}

/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal) of MACD
/// Diff = MACD - Signal
pub fn macd_series(prices: &PriceSeries, fast: usize, slow: usize, signal: usize) -> MacdSeries {
    let closes = math::to_series(&prices.closes());
    let fast_ema = math::ema(&closes, fast);
    let slow_ema = math::ema(&closes, slow);

    let macd = math::zip_with(&fast_ema, &slow_ema, |f, s| Some(f? - s?));
    let signal_line = math::ema(&macd, signal);
    let diff = math::zip_with(&macd, &signal_line, |m, s| Some(m? - s?));

    MacdSeries {
        macd,
        signal: signal_line,
        diff,
    }
}
