//! Momentum indicators: RSI, period returns

pub mod returns;
pub mod rsi;

pub use returns::*;
pub use rsi::*;
