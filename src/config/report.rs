//! Report layout: the sections of the technical digest and how each line is
//! formatted.

use std::fs;

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, Result};
use crate::indicators::{IndicatorCategory, IndicatorSpec};

pub const NOT_AVAILABLE: &str = "N/A";

/// How a numeric value is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "decimals", rename_all = "snake_case")]
pub enum ValueFormat {
    /// Fixed number of decimals.
    Decimal(usize),
    /// Fraction rendered as a percentage with a `%` suffix.
    Percent(usize),
    /// Magnitude with a K/M/B/T suffix.
    Volume,
}

/// What a report line shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineKind {
    /// Latest value of one indicator series.
    Value { key: String, format: ValueFormat },
    /// A label that introduces nested lines.
    Group,
    /// Direction of OBV and of the close over the last `lookback` bars.
    ObvTrend { lookback: usize },
    /// Whether the latest `key` is above or below the latest `reference`.
    AboveBelow { key: String, reference: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportLine {
    pub label: String,
    #[serde(default)]
    pub indent: usize,
    #[serde(flatten)]
    pub kind: LineKind,
}

impl ReportLine {
    pub fn value(label: &str, key: &str, format: ValueFormat) -> Self {
        Self {
            label: label.to_string(),
            indent: 0,
            kind: LineKind::Value {
                key: key.to_string(),
                format,
            },
        }
    }

    pub fn group(label: &str) -> Self {
        Self {
            label: label.to_string(),
            indent: 0,
            kind: LineKind::Group,
        }
    }

    pub fn obv_trend(label: &str, lookback: usize) -> Self {
        Self {
            label: label.to_string(),
            indent: 0,
            kind: LineKind::ObvTrend { lookback },
        }
    }

    pub fn above_below(label: &str, key: &str, reference: &str) -> Self {
        Self {
            label: label.to_string(),
            indent: 0,
            kind: LineKind::AboveBelow {
                key: key.to_string(),
                reference: reference.to_string(),
            },
        }
    }

    pub fn nested(mut self) -> Self {
        self.indent += 1;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSection {
    pub title: String,
    pub lines: Vec<ReportLine>,
}

impl ReportSection {
    pub fn new(category: IndicatorCategory, lines: Vec<ReportLine>) -> Self {
        Self {
            title: category.title().to_string(),
            lines,
        }
    }
}

/// The indicators to compute and the digest sections that show them, in
/// render order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default = "IndicatorSpec::standard_set")]
    pub indicators: Vec<IndicatorSpec>,
    pub sections: Vec<ReportSection>,
}

fn default_placeholder() -> String {
    NOT_AVAILABLE.to_string()
}

impl ReportConfig {
    /// Layout matching [`IndicatorEngine::classic`](crate::core::IndicatorEngine::classic).
    pub fn classic() -> Self {
        use ValueFormat::Decimal;

        Self {
            placeholder: default_placeholder(),
            indicators: IndicatorSpec::classic_set(),
            sections: vec![
                ReportSection::new(
                    IndicatorCategory::Trend,
                    vec![
                        ReportLine::value("8-day EMA", "ema_8", Decimal(2)),
                        ReportLine::value("21-day EMA", "ema_21", Decimal(2)),
                        ReportLine::value("55-day EMA", "ema_55", Decimal(2)),
                        ReportLine::value("ADX", "adx", Decimal(2)),
                        ReportLine::value("+DI", "plus_di", Decimal(2)).nested(),
                        ReportLine::value("-DI", "minus_di", Decimal(2)).nested(),
                    ],
                ),
                ReportSection::new(
                    IndicatorCategory::Momentum,
                    vec![
                        ReportLine::value("14-day RSI", "rsi_14", Decimal(2)),
                        ReportLine::value("28-day RSI", "rsi_28", Decimal(2)),
                    ],
                ),
                ReportSection::new(
                    IndicatorCategory::Volatility,
                    vec![
                        ReportLine::group("Bollinger Bands"),
                        ReportLine::value("Upper", "bb_upper", Decimal(2)).nested(),
                        ReportLine::value("Lower", "bb_lower", Decimal(2)).nested(),
                    ],
                ),
            ],
        }
    }

    /// Load a layout from a JSON file.
    pub fn from_json_file(path: &str) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|e| AnalysisError::Config(format!("cannot read {}: {}", path, e)))?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Every series key the layout reads.
    pub fn referenced_keys(&self) -> Vec<&str> {
        self.sections
            .iter()
            .flat_map(|s| s.lines.iter())
            .flat_map(|line| match &line.kind {
                LineKind::Value { key, .. } => vec![key.as_str()],
                LineKind::AboveBelow { key, reference } => vec![key.as_str(), reference.as_str()],
                LineKind::ObvTrend { .. } => vec!["obv"],
                LineKind::Group => Vec::new(),
            })
            .collect()
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        use ValueFormat::{Decimal, Volume};

        Self {
            placeholder: default_placeholder(),
            indicators: IndicatorSpec::standard_set(),
            sections: vec![
                ReportSection::new(
                    IndicatorCategory::Trend,
                    vec![
                        ReportLine::value("SMA (20-day)", "sma_20", Decimal(2)),
                        ReportLine::value("SMA (50-day)", "sma_50", Decimal(2)),
                        ReportLine::value("EMA (20-day)", "ema_20", Decimal(2)),
                        ReportLine::value("EMA (50-day)", "ema_50", Decimal(2)),
                        ReportLine::value("MACD", "macd", Decimal(2)),
                        ReportLine::value("Signal", "macd_signal", Decimal(2)).nested(),
                        ReportLine::value("Diff", "macd_diff", Decimal(2)).nested(),
                        ReportLine::value("ADX (Average Directional Index)", "adx", Decimal(2)),
                        ReportLine::value("+DI", "plus_di", Decimal(2)).nested(),
                        ReportLine::value("-DI", "minus_di", Decimal(2)).nested(),
                    ],
                ),
                ReportSection::new(
                    IndicatorCategory::Momentum,
                    vec![
                        ReportLine::value("RSI (14-day)", "rsi_14", Decimal(1)),
                        ReportLine::value("RSI (28-day)", "rsi_28", Decimal(1)),
                    ],
                ),
                ReportSection::new(
                    IndicatorCategory::Volatility,
                    vec![
                        ReportLine::group("Bollinger Bands"),
                        ReportLine::value("Middle", "bb_middle", Decimal(1)).nested(),
                        ReportLine::value("Upper", "bb_upper", Decimal(1)).nested(),
                        ReportLine::value("Lower", "bb_lower", Decimal(1)).nested(),
                        ReportLine::value("Position within band", "bb_position", Decimal(2))
                            .nested(),
                        ReportLine::value("Z-Score (20-day)", "zscore_20", Decimal(2)),
                        ReportLine::value("ATR (Average True Range)", "atr_14", Decimal(1)),
                    ],
                ),
                ReportSection::new(
                    IndicatorCategory::Volume,
                    vec![
                        ReportLine::value("On-Balance Volume", "obv", Volume),
                        ReportLine::obv_trend("10-day Trend", 10).nested(),
                        ReportLine::above_below("OBV vs 10-day MA", "obv", "obv_ma").nested(),
                        ReportLine::value("Volume Momentum (21-day)", "volume_momentum", Decimal(2)),
                    ],
                ),
            ],
        }
    }
}
