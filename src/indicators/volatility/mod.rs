//! Volatility indicators: Bollinger Bands, Z-score, ATR

pub mod atr;
pub mod bollinger;
pub mod zscore;

pub use atr::*;
pub use bollinger::*;
pub use zscore::*;
