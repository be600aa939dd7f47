//! financialdatasets.ai REST provider for daily prices and insider trades.

use std::time::Duration;

use async_trait::async_trait;
use backon::{ExponentialBuilder, Retryable};
use chrono::NaiveDate;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::error::{AnalysisError, Result};
use crate::models::{InsiderTrade, PriceBar};
use crate::services::market_data::MarketDataProvider;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const MAX_RETRIES: usize = 3;

#[derive(Debug, Deserialize)]
struct PriceResponse {
    #[serde(default)]
    prices: Vec<PriceBar>,
}

#[derive(Debug, Deserialize)]
struct InsiderTradeResponse {
    #[serde(default)]
    insider_trades: Vec<InsiderTrade>,
}

#[derive(Debug, Clone)]
pub struct FinancialDatasetsProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    min_retry_delay: Duration,
}

impl FinancialDatasetsProvider {
    pub fn new(base_url: &str, api_key: Option<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            min_retry_delay: Duration::from_millis(500),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            &config.financial_datasets_url,
            config.financial_datasets_api_key.clone(),
        )
    }

    /// Override the first retry delay (tests use a tiny one).
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.min_retry_delay = delay;
        self
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let backoff = ExponentialBuilder::default()
            .with_min_delay(self.min_retry_delay)
            .with_max_times(MAX_RETRIES);

        let body = (|| async { self.send(&url, query).await })
            .retry(backoff)
            .when(AnalysisError::is_retryable)
            .notify(|err: &AnalysisError, delay: Duration| {
                warn!(error = %err, delay_ms = delay.as_millis() as u64, url = %url, "Retrying request");
            })
            .await?;

        Ok(serde_json::from_str(&body)?)
    }

    async fn send(&self, url: &str, query: &[(&str, String)]) -> Result<String> {
        let mut request = self.client.get(url).query(query);
        if let Some(key) = &self.api_key {
            request = request.header("X-API-KEY", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl MarketDataProvider for FinancialDatasetsProvider {
    async fn get_prices(
        &self,
        ticker: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceBar>> {
        let query = [
            ("ticker", ticker.to_string()),
            ("interval", "day".to_string()),
            ("interval_multiplier", "1".to_string()),
            ("start_date", start.format("%Y-%m-%d").to_string()),
            ("end_date", end.format("%Y-%m-%d").to_string()),
        ];
        let response: PriceResponse = self.get_json("/prices/", &query).await?;

        info!(ticker = %ticker, bars = response.prices.len(), "Fetched price bars");
        Ok(response.prices)
    }

    async fn get_insider_trades(
        &self,
        ticker: &str,
        since: NaiveDate,
        limit: usize,
    ) -> Result<Vec<InsiderTrade>> {
        let query = [
            ("ticker", ticker.to_string()),
            ("filing_date_gte", since.format("%Y-%m-%d").to_string()),
            ("limit", limit.to_string()),
        ];
        let response: InsiderTradeResponse = self.get_json("/insider-trades/", &query).await?;

        debug!(ticker = %ticker, trades = response.insider_trades.len(), "Fetched insider trades");
        Ok(response.insider_trades)
    }
}
