//! Unit tests for the indicator engine

use crate::fixtures::{assert_close, constant_series, golden_series, series_from_closes};
use tradelens::config::ReportConfig;
use tradelens::indicators::IndicatorSpec;
use tradelens::models::PriceSeries;
use tradelens::{AnalysisError, IndicatorEngine};

#[test]
fn test_empty_series_is_insufficient_data() {
    let engine = IndicatorEngine::standard();
    let empty = PriceSeries::new(Vec::new()).unwrap();

    assert!(matches!(engine.compute(&empty), Err(AnalysisError::InsufficientData)));
    assert!(matches!(
        engine.compute_report("TSLA", &empty, &ReportConfig::default()),
        Err(AnalysisError::InsufficientData)
    ));
}

#[test]
fn test_report_for_every_short_length() {
    let engine = IndicatorEngine::standard();
    let config = ReportConfig::default();
    for len in 1..=60 {
        let closes: Vec<f64> = (0..len).map(|i| 50.0 + (i % 7) as f64).collect();
        let report = engine
            .compute_report("ABC", &series_from_closes(&closes), &config)
            .unwrap();
        assert!(!report.is_empty());
        assert!(report.starts_with("ABC Stock Analysis"));
    }
}

#[test]
fn test_golden_values_through_engine() {
    let set = IndicatorEngine::classic().compute(&golden_series()).unwrap();

    assert_eq!(set.len(), 30);
    assert_close(set.latest("ema_8"), 114.5150080673532);
    assert_close(set.latest("rsi_14"), 69.73684210526315);
    assert_close(set.latest("adx"), 42.90543326534625);
    assert_close(set.latest("plus_di"), 33.39223303395833);
    assert_close(set.latest("minus_di"), 10.030311227710985);
    // 55-day EMA has no gating
    assert!(set.latest("ema_55").is_some());
}

#[test]
fn test_standard_set_returns() {
    let set = IndicatorEngine::standard().compute(&golden_series()).unwrap();
    assert_close(set.latest("return_1m"), 0.10849056603773577);
    assert_close(set.latest("return_3m"), 0.17500000000000004);
    assert!(set.latest("sma_50").is_none());
}

#[test]
fn test_repeated_calls_are_identical() {
    let engine = IndicatorEngine::standard();
    let prices = golden_series();
    assert_eq!(engine.compute(&prices).unwrap(), engine.compute(&prices).unwrap());
}

#[test]
fn test_constant_series_rsi_sentinel() {
    let set = IndicatorEngine::standard()
        .compute(&constant_series(40, 20.0))
        .unwrap();
    assert!(set.get("rsi_14").unwrap().iter().all(Option::is_none));
    assert!(set.latest("zscore_20").is_none());
}

#[test]
fn test_layout_with_foreign_keys_is_rejected() {
    let result = IndicatorEngine::standard().compute_report(
        "T",
        &golden_series(),
        &ReportConfig::classic(),
    );
    match result {
        Err(AnalysisError::Config(message)) => {
            assert!(message.contains("ema_8, ema_21, ema_55"), "{}", message);
        }
        other => panic!("expected a config error, got {:?}", other),
    }
}

#[test]
fn test_engine_from_layout() {
    let engine = IndicatorEngine::from_config(&ReportConfig::classic()).unwrap();
    assert_eq!(engine.specs(), IndicatorEngine::classic().specs());

    let report = engine
        .compute_report("T", &golden_series(), &ReportConfig::classic())
        .unwrap();
    assert!(report.contains("- 8-day EMA: 114.52\n"));
    assert!(!report.contains("N/A"));
}

#[test]
fn test_engine_from_json_layout() {
    let layout = r#"{
        "indicators": [{"kind": "ema", "period": 8}, {"kind": "obv", "ma_period": 5}],
        "sections": [{"title": "Trend Indicators", "lines": [
            {"label": "EMA (8-day)", "kind": "value", "key": "ema_8",
             "format": {"type": "decimal", "decimals": 2}},
            {"label": "OBV vs MA", "kind": "above_below", "key": "obv", "reference": "obv_ma"}
        ]}]
    }"#;
    let mut config: ReportConfig = serde_json::from_str(layout).unwrap();

    let engine = IndicatorEngine::from_config(&config).unwrap();
    assert_eq!(
        engine.specs().to_vec(),
        vec![IndicatorSpec::Ema { period: 8 }, IndicatorSpec::Obv { ma_period: 5 }]
    );

    config.indicators.pop();
    assert!(matches!(
        IndicatorEngine::from_config(&config),
        Err(AnalysisError::Config(_))
    ));
}

#[test]
fn test_layout_without_indicators_uses_standard_set() {
    let config: ReportConfig = serde_json::from_str(r#"{"sections": []}"#).unwrap();
    let engine = IndicatorEngine::from_config(&config).unwrap();
    assert_eq!(engine.specs(), IndicatorEngine::standard().specs());
}
