//! Unit tests for number formatting

use tradelens::config::ValueFormat;
use tradelens::report::{format_value, format_volume, format_volume_f64};

#[test]
fn test_format_volume_suffixes() {
    assert_eq!(format_volume(1_500_000), "1M");
    assert_eq!(format_volume(999), "999");
    assert_eq!(format_volume(-2_000), "-2K");
    assert_eq!(format_volume(0), "0");
    assert_eq!(format_volume(94_123_456), "94M");
    assert_eq!(format_volume(2_999_999_999), "2B");
    assert_eq!(format_volume(7_000_000_000_000), "7T");
    assert_eq!(format_volume(-748_000_000), "-748M");
}

#[test]
fn test_format_volume_f64_truncates() {
    assert_eq!(format_volume_f64(1_999.9), "1K");
    assert_eq!(format_volume_f64(-999.9), "-999");
}

#[test]
fn test_format_value_rules() {
    assert_eq!(format_value(246.987, ValueFormat::Decimal(2)), "246.99");
    assert_eq!(format_value(51.04, ValueFormat::Decimal(1)), "51.0");
    assert_eq!(format_value(-0.0461, ValueFormat::Percent(2)), "-4.61%");
    assert_eq!(format_value(-0.0001, ValueFormat::Decimal(2)), "0.00");
    assert_eq!(format_value(112_000_000.0, ValueFormat::Volume), "112M");
}
