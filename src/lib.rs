//! Technical-indicator digests and insider-trade summaries for stock tickers,
//! rendered as prompts for locally hosted language models.

pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod report;
pub mod services;

pub use crate::core::IndicatorEngine;
pub use error::{AnalysisError, Result};
