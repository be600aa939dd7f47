//! End-to-end: fetch, compute, render and rate one ticker

use chrono::NaiveDate;
use tradelens::config::ReportConfig;
use tradelens::models::PriceSeries;
use tradelens::report::{build_prompt, render_insider_digest, SYSTEM_PROMPT};
use tradelens::services::{FinancialDatasetsProvider, MarketDataProvider, OllamaClient, Rating};
use tradelens::IndicatorEngine;
use wiremock::MockServer;

use crate::test_utils::{mock_chat, mock_insider_trades, mock_prices};

#[tokio::test]
async fn ticker_pipeline_produces_rating() {
    let data = MockServer::start().await;
    mock_prices(&data, 60).await;
    mock_insider_trades(&data).await;

    let llm = MockServer::start().await;
    mock_chat(&llm, r#"{"reasoning": "Steady uptrend.", "rating": "Strong Buy"}"#).await;

    let provider = FinancialDatasetsProvider::new(&data.uri(), None);
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();

    let bars = provider.get_prices("TSLA", start, end).await.unwrap();
    let prices = PriceSeries::from_lenient(bars);
    let digest = IndicatorEngine::standard()
        .compute_report("TSLA", &prices, &ReportConfig::default())
        .unwrap();

    assert!(digest.starts_with("TSLA Stock Analysis\n"));
    assert!(digest.contains("Date: 2025-03-02\n"));
    assert!(digest.contains("Previous Close: 258\n"));
    assert!(digest.contains("- SMA (50-day): 234.50\n"));
    assert!(digest.contains("- RSI (14-day): 100.0\n"));
    assert!(digest.contains("  - 10-day Trend: OBV is rising, while price is rising.\n"));

    let trades = provider.get_insider_trades("TSLA", start, 50).await.unwrap();
    let insider = render_insider_digest(&trades);
    assert_eq!(insider.matches("Insider Trade #").count(), 1);
    assert!(insider.contains("- Board Director: true"));

    let prompt = build_prompt("TSLA", &digest, &insider);
    let answer = OllamaClient::new(&llm.uri())
        .rate("qwen2.5:7b", SYSTEM_PROMPT, &prompt)
        .await
        .unwrap();
    assert_eq!(answer.rating, Some(Rating::StrongBuy));

    let sent = llm.received_requests().await.unwrap();
    let body = String::from_utf8_lossy(&sent[0].body);
    assert!(body.contains("### Instructions: for stock TSLA"));
}
