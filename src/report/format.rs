//! Number formatting for the rendered reports.

use crate::config::ValueFormat;

const VOLUME_SUFFIXES: [(u64, &str); 4] = [
    (1_000_000_000_000, "T"),
    (1_000_000_000, "B"),
    (1_000_000, "M"),
    (1_000, "K"),
];

/// Render a magnitude with a K/M/B/T suffix using truncating division.
///
/// `1_500_000` → `"1M"`, `999` → `"999"`, `-2_000` → `"-2K"`.
pub fn format_volume(value: i64) -> String {
    let magnitude = value.unsigned_abs();
    let sign = if value < 0 { "-" } else { "" };

    for (threshold, suffix) in VOLUME_SUFFIXES {
        if magnitude >= threshold {
            return format!("{}{}{}", sign, magnitude / threshold, suffix);
        }
    }
    value.to_string()
}

/// [`format_volume`] for a fractional value, truncated toward zero first.
pub fn format_volume_f64(value: f64) -> String {
    format_volume(value.trunc() as i64)
}

/// Format one value per its rule. Rounding happens here and nowhere else.
pub fn format_value(value: f64, format: ValueFormat) -> String {
    match format {
        ValueFormat::Decimal(decimals) => format!("{:.*}", decimals, clean_zero(value, decimals)),
        ValueFormat::Percent(decimals) => {
            format!("{:.*}%", decimals, clean_zero(value * 100.0, decimals))
        }
        ValueFormat::Volume => format_volume_f64(value),
    }
}

/// Avoid printing `-0.00` for tiny negatives that round to zero.
fn clean_zero(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    if (value * scale).round() == 0.0 {
        0.0
    } else {
        value
    }
}
