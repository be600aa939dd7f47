//! ADX (Average Directional Index) indicator

use crate::common::math;
use crate::models::{PriceSeries, Series};

pub struct AdxSeries {
    pub adx: Series,
    pub plus_di: Series,
    pub minus_di: Series,
}

/// Per-bar true range and directional movement.
///
/// The first bar has no predecessor: its true range is `high - low` and both
/// directional movements are zero.
pub fn directional_movement(prices: &PriceSeries) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let bars = prices.bars();
    let mut tr = Vec::with_capacity(bars.len());
    let mut plus_dm = Vec::with_capacity(bars.len());
    let mut minus_dm = Vec::with_capacity(bars.len());

    for (i, bar) in bars.iter().enumerate() {
        let prev = i.checked_sub(1).map(|p| &bars[p]);
        tr.push(math::true_range(bar.high, bar.low, prev.map(|p| p.close)));

        let (plus, minus) = match prev {
            Some(prev) => {
                let up_move = bar.high - prev.high;
                let down_move = prev.low - bar.low;
                let plus = if up_move > down_move && up_move > 0.0 {
                    up_move
                } else {
                    0.0
                };
                let minus = if down_move > up_move && down_move > 0.0 {
                    down_move
                } else {
                    0.0
                };
                (plus, minus)
            }
            None => (0.0, 0.0),
        };
        plus_dm.push(plus);
        minus_dm.push(minus);
    }

    (tr, plus_dm, minus_dm)
}

/// Calculate ADX with +DI and -DI for every bar
///
/// TR, +DM and -DM are smoothed with an EMA of span `period`;
/// DX = 100·|+DI − −DI| / (+DI + −DI), undefined when the sum is zero;
/// ADX = EMA(DX, period), undefined on bars where DX is.
pub fn adx_series(prices: &PriceSeries, period: usize) -> AdxSeries {
    let (tr, plus_dm, minus_dm) = directional_movement(prices);

    let smoothed_tr = math::ema(&math::to_series(&tr), period);
    let smoothed_plus = math::ema(&math::to_series(&plus_dm), period);
    let smoothed_minus = math::ema(&math::to_series(&minus_dm), period);

    let plus_di = math::zip_with(&smoothed_plus, &smoothed_tr, |dm, tr| {
        math::safe_div(dm, tr).map(|v| 100.0 * v)
    });
    let minus_di = math::zip_with(&smoothed_minus, &smoothed_tr, |dm, tr| {
        math::safe_div(dm, tr).map(|v| 100.0 * v)
    });

    let dx = math::zip_with(&plus_di, &minus_di, |plus, minus| {
        let (plus, minus) = (plus?, minus?);
        math::safe_div(Some((plus - minus).abs()), Some(plus + minus)).map(|v| 100.0 * v)
    });
    // Smoothing state carries across undefined DX bars, but ADX itself is
    // reported as undefined wherever DX is.
    let adx = math::zip_with(&math::ema(&dx, period), &dx, |adx, dx| dx.and(adx));

    AdxSeries {
        adx,
        plus_di,
        minus_di,
    }
}

/// Calculate ADX with default period (14)
pub fn calculate_adx_default(prices: &PriceSeries) -> AdxSeries {
    adx_series(prices, 14)
}
