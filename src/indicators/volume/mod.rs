//! Volume indicators: OBV, volume momentum, average volume

pub mod obv;
pub mod volume_momentum;

pub use obv::*;
pub use volume_momentum::*;
