//! Shared data models spanning the engine layers.

pub mod bar;
pub mod indicators;
pub mod insider;

pub use bar::{PriceBar, PriceSeries};
pub use indicators::{IndicatorSet, Series};
pub use insider::InsiderTrade;
