//! RSI (Relative Strength Index) indicator

use crate::common::math;
use crate::models::{PriceSeries, Series};

/// Calculate RSI for every bar
///
/// RSI = 100 - (100 / (1 + RS))
/// RS = Average Gain / Average Loss, both simple means over the trailing
/// `period` day-over-day changes. The first bar has no change and counts as 0.
///
/// With no losses in the window RSI saturates at 100; a window with neither
/// gains nor losses is undefined.
pub fn rsi_series(prices: &PriceSeries, period: usize) -> Series {
    let closes = prices.closes();
    let mut gains = Vec::with_capacity(closes.len());
    let mut losses = Vec::with_capacity(closes.len());

    for i in 0..closes.len() {
        let change = if i == 0 { 0.0 } else { closes[i] - closes[i - 1] };
        if change > 0.0 {
            gains.push(Some(change));
            losses.push(Some(0.0));
        } else {
            gains.push(Some(0.0));
            losses.push(Some(change.abs()));
        }
    }

    let avg_gain = math::sma(&gains, period);
    let avg_loss = math::sma(&losses, period);

    math::zip_with(&avg_gain, &avg_loss, |gain, loss| {
        let (gain, loss) = (gain?, loss?);
        if loss == 0.0 {
            return (gain > 0.0).then_some(100.0);
        }
        let rs = gain / loss;
        Some(100.0 - (100.0 / (1.0 + rs)))
    })
}

/// RSI on the latest bar
pub fn calculate_rsi(prices: &PriceSeries, period: usize) -> Option<f64> {
    rsi_series(prices, period).last().copied().flatten()
}
