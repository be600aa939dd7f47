//! Integration tests for the financialdatasets.ai provider

use std::time::Duration;

use chrono::NaiveDate;
use tradelens::services::{FinancialDatasetsProvider, MarketDataProvider};
use tradelens::AnalysisError;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::test_utils::{insider_payload, mock_insider_trades, mock_prices, price_payload, API_KEY};

fn provider(server: &MockServer) -> FinancialDatasetsProvider {
    FinancialDatasetsProvider::new(&server.uri(), Some(API_KEY.to_string()))
        .with_retry_delay(Duration::from_millis(1))
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[tokio::test]
async fn prices_request_carries_key_and_range() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/prices/"))
        .and(header("X-API-KEY", API_KEY))
        .and(query_param("ticker", "TSLA"))
        .and(query_param("interval", "day"))
        .and(query_param("interval_multiplier", "1"))
        .and(query_param("start_date", "2025-01-01"))
        .and(query_param("end_date", "2025-03-01"))
        .respond_with(ResponseTemplate::new(200).set_body_json(price_payload(3)))
        .expect(1)
        .mount(&server)
        .await;

    let bars = provider(&server)
        .get_prices("TSLA", date(2025, 1, 1), date(2025, 3, 1))
        .await
        .expect("prices fetched");

    assert_eq!(bars.len(), 3);
    assert_eq!(bars[0].timestamp, date(2025, 1, 2));
    assert_eq!(bars[2].close, 202.0);
    assert_eq!(bars[1].volume, 1_010_000);
}

#[tokio::test]
async fn insider_trades_are_parsed() {
    let server = MockServer::start().await;
    mock_insider_trades(&server).await;

    let trades = provider(&server)
        .get_insider_trades("TSLA", date(2025, 1, 1), 50)
        .await
        .expect("trades fetched");

    assert_eq!(trades.len(), 2);
    assert_eq!(trades[0].shares_owned_after, Some(15_000.0));
    assert_eq!(trades[0].is_board_director, Some(true));
    assert!(trades[1].is_no_op());
    assert_eq!(trades, serde_json::from_value::<InsiderList>(insider_payload()).unwrap().insider_trades);
}

#[derive(serde::Deserialize)]
struct InsiderList {
    insider_trades: Vec<tradelens::models::InsiderTrade>,
}

#[tokio::test]
async fn server_errors_are_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/prices/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("busy"))
        .up_to_n_times(2)
        .expect(2)
        .mount(&server)
        .await;
    mock_prices(&server, 5).await;

    let bars = provider(&server)
        .get_prices("TSLA", date(2025, 1, 1), date(2025, 3, 1))
        .await
        .expect("retry succeeds");

    assert_eq!(bars.len(), 5);
}

#[tokio::test]
async fn client_errors_are_not_retried() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/prices/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("unknown ticker"))
        .expect(1)
        .mount(&server)
        .await;

    let err = provider(&server)
        .get_prices("NOPE", date(2025, 1, 1), date(2025, 3, 1))
        .await
        .unwrap_err();

    match err {
        AnalysisError::Api { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "unknown ticker");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn malformed_payload_is_a_json_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/prices/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"prices\": [{\"close\": 1}]}"))
        .mount(&server)
        .await;

    let err = provider(&server)
        .get_prices("TSLA", date(2025, 1, 1), date(2025, 3, 1))
        .await
        .unwrap_err();

    assert!(matches!(err, AnalysisError::Json(_)));
}
