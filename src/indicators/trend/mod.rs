//! Trend indicators: EMA, SMA, MACD, ADX

pub mod adx;
pub mod ema;
pub mod macd;
pub mod sma;

pub use adx::*;
pub use ema::*;
pub use macd::*;
pub use sma::*;
