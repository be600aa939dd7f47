//! Technical indicators computed over a [`PriceSeries`](crate::models::PriceSeries).
//!
//! Every indicator produces full series aligned with the input bars using
//! trailing, right-aligned windows. Rounding is left to the renderer.

pub mod registry;

pub mod momentum;
pub mod trend;
pub mod volatility;
pub mod volume;

pub use registry::*;
