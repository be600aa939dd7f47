//! Indicator registry: which indicators an engine computes and what they emit.

use serde::{Deserialize, Serialize};

use crate::models::{IndicatorSet, PriceSeries};

use super::{momentum, trend, volatility, volume};

/// Indicator category, used to group the digest sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorCategory {
    Trend,
    Momentum,
    Volatility,
    Volume,
}

impl IndicatorCategory {
    pub fn title(&self) -> &'static str {
        match self {
            IndicatorCategory::Trend => "Trend Indicators",
            IndicatorCategory::Momentum => "Momentum Indicators",
            IndicatorCategory::Volatility => "Volatility Indicators",
            IndicatorCategory::Volume => "Volume Indicators",
        }
    }

    /// Get all categories in digest order
    pub fn all_categories() -> Vec<IndicatorCategory> {
        vec![
            IndicatorCategory::Trend,
            IndicatorCategory::Momentum,
            IndicatorCategory::Volatility,
            IndicatorCategory::Volume,
        ]
    }
}

/// One configured indicator and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IndicatorSpec {
    Ema { period: usize },
    Sma { period: usize },
    Macd { fast: usize, slow: usize, signal: usize },
    Adx { period: usize },
    Rsi { period: usize },
    Returns,
    Bollinger { period: usize, k: f64 },
    ZScore { period: usize },
    Atr { period: usize },
    Obv { ma_period: usize },
    VolumeMomentum { period: usize },
    AverageVolume,
}

impl IndicatorSpec {
    /// Every indicator the default digest renders.
    pub fn standard_set() -> Vec<IndicatorSpec> {
        vec![
            IndicatorSpec::Sma { period: 20 },
            IndicatorSpec::Sma { period: 50 },
            IndicatorSpec::Ema { period: 20 },
            IndicatorSpec::Ema { period: 50 },
            IndicatorSpec::Macd {
                fast: 12,
                slow: 26,
                signal: 9,
            },
            IndicatorSpec::Adx { period: 14 },
            IndicatorSpec::Rsi { period: 14 },
            IndicatorSpec::Rsi { period: 28 },
            IndicatorSpec::Returns,
            IndicatorSpec::Bollinger { period: 20, k: 2.0 },
            IndicatorSpec::ZScore { period: 20 },
            IndicatorSpec::Atr { period: 14 },
            IndicatorSpec::Obv { ma_period: 10 },
            IndicatorSpec::VolumeMomentum { period: 21 },
            IndicatorSpec::AverageVolume,
        ]
    }

    /// The compact set: EMA 8/21/55, ADX, Bollinger Bands, RSI 14/28.
    pub fn classic_set() -> Vec<IndicatorSpec> {
        vec![
            IndicatorSpec::Ema { period: 8 },
            IndicatorSpec::Ema { period: 21 },
            IndicatorSpec::Ema { period: 55 },
            IndicatorSpec::Adx { period: 14 },
            IndicatorSpec::Bollinger { period: 20, k: 2.0 },
            IndicatorSpec::Rsi { period: 14 },
            IndicatorSpec::Rsi { period: 28 },
        ]
    }

    pub fn category(&self) -> IndicatorCategory {
        match self {
            IndicatorSpec::Ema { .. }
            | IndicatorSpec::Sma { .. }
            | IndicatorSpec::Macd { .. }
            | IndicatorSpec::Adx { .. } => IndicatorCategory::Trend,
            IndicatorSpec::Rsi { .. } | IndicatorSpec::Returns => IndicatorCategory::Momentum,
            IndicatorSpec::Bollinger { .. }
            | IndicatorSpec::ZScore { .. }
            | IndicatorSpec::Atr { .. } => IndicatorCategory::Volatility,
            IndicatorSpec::Obv { .. }
            | IndicatorSpec::VolumeMomentum { .. }
            | IndicatorSpec::AverageVolume => IndicatorCategory::Volume,
        }
    }

    /// Names of the series this indicator adds to an [`IndicatorSet`].
    pub fn outputs(&self) -> Vec<String> {
        match self {
            IndicatorSpec::Ema { period } => vec![format!("ema_{}", period)],
            IndicatorSpec::Sma { period } => vec![format!("sma_{}", period)],
            IndicatorSpec::Macd { .. } => names(&["macd", "macd_signal", "macd_diff"]),
            IndicatorSpec::Adx { .. } => names(&["adx", "plus_di", "minus_di"]),
            IndicatorSpec::Rsi { period } => vec![format!("rsi_{}", period)],
            IndicatorSpec::Returns => names(&["return_1m", "return_3m"]),
            IndicatorSpec::Bollinger { .. } => {
                names(&["bb_middle", "bb_upper", "bb_lower", "bb_position"])
            }
            IndicatorSpec::ZScore { period } => vec![format!("zscore_{}", period)],
            IndicatorSpec::Atr { period } => vec![format!("atr_{}", period)],
            IndicatorSpec::Obv { .. } => names(&["obv", "obv_ma"]),
            IndicatorSpec::VolumeMomentum { .. } => names(&["volume_momentum"]),
            IndicatorSpec::AverageVolume => names(&["avg_volume"]),
        }
    }

    /// Compute this indicator over `prices` and store its series in `set`.
    pub fn apply(&self, prices: &PriceSeries, set: &mut IndicatorSet) {
        match *self {
            IndicatorSpec::Ema { period } => {
                set.insert(format!("ema_{}", period), trend::ema_series(prices, period));
            }
            IndicatorSpec::Sma { period } => {
                set.insert(format!("sma_{}", period), trend::sma_series(prices, period));
            }
            IndicatorSpec::Macd { fast, slow, signal } => {
                let macd = trend::macd_series(prices, fast, slow, signal);
                set.insert("macd", macd.macd);
                set.insert("macd_signal", macd.signal);
                set.insert("macd_diff", macd.diff);
            }
            IndicatorSpec::Adx { period } => {
                let adx = trend::adx_series(prices, period);
                set.insert("adx", adx.adx);
                set.insert("plus_di", adx.plus_di);
                set.insert("minus_di", adx.minus_di);
            }
            IndicatorSpec::Rsi { period } => {
                set.insert(format!("rsi_{}", period), momentum::rsi_series(prices, period));
            }
            IndicatorSpec::Returns => {
                set.insert(
                    "return_1m",
                    momentum::period_return_series(prices, momentum::ONE_MONTH_BARS),
                );
                set.insert("return_3m", momentum::window_return_series(prices));
            }
            IndicatorSpec::Bollinger { period, k } => {
                let bands = volatility::bollinger_series(prices, period, k);
                set.insert("bb_middle", bands.middle);
                set.insert("bb_upper", bands.upper);
                set.insert("bb_lower", bands.lower);
                set.insert("bb_position", bands.position);
            }
            IndicatorSpec::ZScore { period } => {
                set.insert(format!("zscore_{}", period), volatility::zscore_series(prices, period));
            }
            IndicatorSpec::Atr { period } => {
                set.insert(format!("atr_{}", period), volatility::atr_series(prices, period));
            }
            IndicatorSpec::Obv { ma_period } => {
                let obv = volume::obv_series(prices, ma_period);
                set.insert("obv", obv.obv);
                set.insert("obv_ma", obv.moving_average);
            }
            IndicatorSpec::VolumeMomentum { period } => {
                set.insert("volume_momentum", volume::volume_momentum_series(prices, period));
            }
            IndicatorSpec::AverageVolume => {
                set.insert("avg_volume", volume::average_volume_series(prices));
            }
        }
    }
}

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
