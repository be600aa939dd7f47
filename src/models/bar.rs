//! Daily OHLCV bars and the normalized series the engine consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::warn;

use crate::error::{AnalysisError, Result};

/// One daily price bar as delivered by the data provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceBar {
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(deserialize_with = "deserialize_volume")]
    pub volume: i64,
    #[serde(rename = "time", alias = "timestamp", deserialize_with = "deserialize_date")]
    pub timestamp: NaiveDate,
}

impl PriceBar {
    pub fn new(open: f64, high: f64, low: f64, close: f64, volume: i64, timestamp: NaiveDate) -> Self {
        Self {
            open,
            high,
            low,
            close,
            volume,
            timestamp,
        }
    }

    /// Check the OHLCV invariants.
    pub fn validate(&self) -> Result<()> {
        let malformed = |reason: String| AnalysisError::MalformedRecord {
            date: self.timestamp,
            reason,
        };

        for (field, value) in [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ] {
            if !value.is_finite() {
                return Err(malformed(format!("{} is not a finite number", field)));
            }
        }

        if self.high < self.open.max(self.close).max(self.low) {
            return Err(malformed(format!(
                "high {} is below open/close/low",
                self.high
            )));
        }
        if self.low > self.open.min(self.close).min(self.high) {
            return Err(malformed(format!(
                "low {} is above open/close/high",
                self.low
            )));
        }
        if self.volume < 0 {
            return Err(malformed(format!("negative volume {}", self.volume)));
        }

        Ok(())
    }
}

/// Bars sorted ascending by date with one bar per date.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    bars: Vec<PriceBar>,
}

impl PriceSeries {
    /// Validate, sort and deduplicate. The first malformed bar aborts.
    ///
    /// When two bars share a date, the one appearing later in the input wins.
    pub fn new(bars: Vec<PriceBar>) -> Result<Self> {
        for bar in &bars {
            bar.validate()?;
        }
        Ok(Self::normalize(bars))
    }

    /// Like [`PriceSeries::new`] but drops malformed bars instead of failing.
    pub fn from_lenient(bars: Vec<PriceBar>) -> Self {
        let valid = bars
            .into_iter()
            .filter(|bar| match bar.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(error = %e, "Dropping malformed price bar");
                    false
                }
            })
            .collect();
        Self::normalize(valid)
    }

    fn normalize(mut bars: Vec<PriceBar>) -> Self {
        bars.sort_by_key(|b| b.timestamp);

        let mut deduped: Vec<PriceBar> = Vec::with_capacity(bars.len());
        for bar in bars {
            match deduped.last_mut() {
                Some(last) if last.timestamp == bar.timestamp => *last = bar,
                _ => deduped.push(bar),
            }
        }

        Self { bars: deduped }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[PriceBar] {
        &self.bars
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume as f64).collect()
    }

    /// Most recent bar.
    pub fn latest(&self) -> Option<&PriceBar> {
        self.bars.last()
    }

    /// The bar before the most recent one; needs at least two bars.
    pub fn previous(&self) -> Option<&PriceBar> {
        self.bars.len().checked_sub(2).map(|i| &self.bars[i])
    }
}

fn deserialize_date<'de, D>(deserializer: D) -> std::result::Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

/// Accepts `YYYY-MM-DD` as well as full timestamps, keeping the date part.
pub fn parse_date(raw: &str) -> std::result::Result<NaiveDate, String> {
    let trimmed = raw.trim();
    let date_part = trimmed.get(..10).unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|e| format!("invalid date '{}': {}", raw, e))
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVolume {
    Int(i64),
    Float(f64),
}

fn deserialize_volume<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match RawVolume::deserialize(deserializer)? {
        RawVolume::Int(v) => Ok(v),
        RawVolume::Float(v) if v.is_finite() => Ok(v.trunc() as i64),
        RawVolume::Float(v) => Err(serde::de::Error::custom(format!("invalid volume {}", v))),
    }
}
