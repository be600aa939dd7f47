//! Fixed-schema text digest of the latest indicator values.

use std::cmp::Ordering;

use crate::config::{LineKind, ReportConfig, ReportLine, ValueFormat};
use crate::error::{AnalysisError, Result};
use crate::indicators::{momentum, volume};
use crate::models::{IndicatorSet, PriceSeries, Series};

use super::format::{format_value, format_volume};

/// Render the key statistics block followed by the configured indicator
/// sections.
///
/// Only an empty price series is an error; every unavailable value renders
/// as the configured placeholder.
pub fn render_digest(
    ticker: &str,
    prices: &PriceSeries,
    indicators: &IndicatorSet,
    config: &ReportConfig,
) -> Result<String> {
    let latest = prices.latest().ok_or(AnalysisError::InsufficientData)?;
    let na = config.placeholder.as_str();
    let show = |value: Option<f64>, format: ValueFormat| -> String {
        value.map_or_else(|| na.to_string(), |v| format_value(v, format))
    };

    let avg_volume = stat(indicators, "avg_volume", || {
        volume::average_volume_series(prices)
    });
    let return_1m = stat(indicators, "return_1m", || {
        momentum::period_return_series(prices, momentum::ONE_MONTH_BARS)
    });
    let return_3m = stat(indicators, "return_3m", || momentum::window_return_series(prices));

    let previous_close = prices
        .previous()
        .map_or_else(|| na.to_string(), |b| b.close.to_string());

    let mut lines = vec![
        format!("{} Stock Analysis", ticker),
        "### Key Statistics".to_string(),
        format!("Date: {}", latest.timestamp.format("%Y-%m-%d")),
        format!("Previous Close: {}", previous_close),
        format!("Open: {}", latest.open),
        format!("Close: {}", latest.close),
        format!("High: {}", latest.high),
        format!("Low: {}", latest.low),
        format!("Volume: {}", format_volume(latest.volume)),
        format!("Average Volume (3M): {}", show(avg_volume, ValueFormat::Volume)),
        format!("1-month return: {}", show(return_1m, ValueFormat::Percent(2))),
        format!("3-month return: {}", show(return_3m, ValueFormat::Percent(2))),
        String::new(),
        "### Technical Indicators".to_string(),
    ];

    for (i, section) in config.sections.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        lines.push(section.title.clone());
        lines.extend(
            section
                .lines
                .iter()
                .map(|line| render_line(line, prices, indicators, na)),
        );
    }

    let mut out = lines.join("\n");
    out.push('\n');
    Ok(out)
}

/// Latest value of `key` from the set, or computed on the spot when the
/// engine was not configured to produce it.
fn stat<F>(indicators: &IndicatorSet, key: &str, compute: F) -> Option<f64>
where
    F: FnOnce() -> Series,
{
    if indicators.contains(key) {
        indicators.latest(key)
    } else {
        compute().last().copied().flatten()
    }
}

fn render_line(line: &ReportLine, prices: &PriceSeries, indicators: &IndicatorSet, na: &str) -> String {
    let prefix = format!("{}- {}", "  ".repeat(line.indent), line.label);

    let value = match &line.kind {
        LineKind::Group => return format!("{}:", prefix),
        LineKind::Value { key, format } => indicators
            .latest(key)
            .map(|v| format_value(v, *format)),
        LineKind::ObvTrend { lookback } => obv_trend(prices, indicators, *lookback),
        LineKind::AboveBelow { key, reference } => {
            match (indicators.latest(key), indicators.latest(reference)) {
                (Some(a), Some(b)) => Some(relation(a, b).to_string()),
                _ => None,
            }
        }
    };

    format!("{}: {}", prefix, value.as_deref().unwrap_or(na))
}

fn obv_trend(prices: &PriceSeries, indicators: &IndicatorSet, lookback: usize) -> Option<String> {
    let obv_now = indicators.latest("obv")?;
    let obv_then = indicators.value_at("obv", lookback)?;

    let closes = prices.closes();
    let close_now = *closes.last()?;
    let close_then = closes[closes.len().checked_sub(lookback + 1)?];

    Some(format!(
        "OBV is {}, while price is {}.",
        direction(obv_now, obv_then),
        direction(close_now, close_then)
    ))
}

fn direction(now: f64, then: f64) -> &'static str {
    match now.partial_cmp(&then) {
        Some(Ordering::Greater) => "rising",
        Some(Ordering::Less) => "falling",
        _ => "flat",
    }
}

fn relation(value: f64, reference: f64) -> &'static str {
    match value.partial_cmp(&reference) {
        Some(Ordering::Greater) => "above",
        Some(Ordering::Less) => "below",
        _ => "at",
    }
}
