//! Market data provider interface.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{InsiderTrade, PriceBar};

#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Daily bars for `ticker` between `start` and `end` (inclusive).
    async fn get_prices(&self, ticker: &str, start: NaiveDate, end: NaiveDate)
        -> Result<Vec<PriceBar>>;

    /// Insider filings for `ticker` filed on or after `since`.
    async fn get_insider_trades(
        &self,
        ticker: &str,
        since: NaiveDate,
        limit: usize,
    ) -> Result<Vec<InsiderTrade>>;
}
