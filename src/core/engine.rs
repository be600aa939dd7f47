//! Indicator engine: price series in, indicator set and digest out.

use std::collections::BTreeSet;

use tracing::debug;

use crate::config::ReportConfig;
use crate::error::{AnalysisError, Result};
use crate::indicators::IndicatorSpec;
use crate::models::{IndicatorSet, PriceSeries};
use crate::report::digest::render_digest;

/// Computes a configured set of indicators. Stateless: every call starts
/// from scratch.
#[derive(Debug, Clone)]
pub struct IndicatorEngine {
    specs: Vec<IndicatorSpec>,
}

impl IndicatorEngine {
    pub fn new(specs: Vec<IndicatorSpec>) -> Self {
        Self { specs }
    }

    /// Every indicator the default digest renders.
    pub fn standard() -> Self {
        Self::new(IndicatorSpec::standard_set())
    }

    /// The compact set: EMA 8/21/55, ADX, Bollinger Bands, RSI 14/28.
    pub fn classic() -> Self {
        Self::new(IndicatorSpec::classic_set())
    }

    /// Engine for the indicators a report layout declares, checked against
    /// the series the layout reads.
    pub fn from_config(config: &ReportConfig) -> Result<Self> {
        let engine = Self::new(config.indicators.clone());
        engine.check_layout(config)?;
        Ok(engine)
    }

    pub fn specs(&self) -> &[IndicatorSpec] {
        &self.specs
    }

    /// Fail when the layout reads a series none of the configured indicators
    /// produce.
    pub fn check_layout(&self, config: &ReportConfig) -> Result<()> {
        let outputs: BTreeSet<String> = self.specs().iter().flat_map(|s| s.outputs()).collect();

        let mut missing: Vec<&str> = config
            .referenced_keys()
            .into_iter()
            .filter(|key| !outputs.contains(*key))
            .collect();
        missing.dedup();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(AnalysisError::Config(format!(
                "report layout reads series no configured indicator produces: {}",
                missing.join(", ")
            )))
        }
    }

    /// Compute every configured indicator.
    ///
    /// Fails only for an empty series; short histories yield `None` values.
    pub fn compute(&self, prices: &PriceSeries) -> Result<IndicatorSet> {
        if prices.is_empty() {
            return Err(AnalysisError::InsufficientData);
        }

        let mut set = IndicatorSet::new(prices.len());
        for spec in &self.specs {
            spec.apply(prices, &mut set);
        }

        debug!(
            bars = prices.len(),
            series = set.series_count(),
            "Computed indicator set"
        );
        Ok(set)
    }

    /// Compute indicators and render the digest in one step. The layout must
    /// only read series this engine produces.
    pub fn compute_report(
        &self,
        ticker: &str,
        prices: &PriceSeries,
        config: &ReportConfig,
    ) -> Result<String> {
        self.check_layout(config)?;
        let set = self.compute(prices)?;
        render_digest(ticker, prices, &set, config)
    }
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self::standard()
    }
}
