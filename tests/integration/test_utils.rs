//! Mock servers and canned payloads shared by the integration tests

use chrono::{Duration, NaiveDate};
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const API_KEY: &str = "test-key";

pub fn price_payload(count: usize) -> Value {
    let start = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
    let prices: Vec<Value> = (0..count)
        .map(|i| {
            let close = 200.0 + i as f64;
            json!({
                "ticker": "TSLA",
                "open": close - 0.5,
                "high": close + 2.0,
                "low": close - 2.0,
                "close": close,
                "volume": 1_000_000 + 10_000 * i,
                "time": format!("{}T05:00:00Z", start + Duration::days(i as i64)),
            })
        })
        .collect();
    json!({ "ticker": "TSLA", "prices": prices })
}

pub fn insider_payload() -> Value {
    json!({
        "insider_trades": [
            {
                "ticker": "TSLA",
                "issuer": "Tesla, Inc.",
                "name": "Jane Doe",
                "is_board_director": true,
                "transaction_date": "2025-02-01",
                "transaction_shares": -5000.0,
                "transaction_price_per_share": 350.25,
                "shares_owned_before_transaction": 20000.0,
                "shares_owned_after_transaction": 15000.0,
                "security_title": "Common Stock",
                "filing_date": "2025-02-03"
            },
            {
                "ticker": "TSLA",
                "name": "John Roe",
                "transaction_shares": 0.0,
                "shares_owned_before_transaction": 100.0,
                "shares_owned_after_transaction": 100.0,
                "filing_date": "2025-02-04"
            }
        ]
    })
}

pub fn chat_payload(content: &str) -> Value {
    json!({
        "model": "qwen2.5:7b",
        "created_at": "2025-02-05T10:00:00Z",
        "message": { "role": "assistant", "content": content },
        "done": true
    })
}

pub async fn mock_prices(server: &MockServer, count: usize) {
    Mock::given(method("GET"))
        .and(path("/prices/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(price_payload(count)))
        .mount(server)
        .await;
}

pub async fn mock_insider_trades(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/insider-trades/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(insider_payload()))
        .mount(server)
        .await;
}

pub async fn mock_chat(server: &MockServer, content: &str) {
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_payload(content)))
        .mount(server)
        .await;
}
