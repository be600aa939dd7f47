use serde::{Deserialize, Serialize};

/// One insider transaction filing. Everything except the ticker and the
/// filing date may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsiderTrade {
    pub ticker: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_board_director: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_shares: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_price_per_share: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_value: Option<f64>,
    #[serde(
        default,
        rename = "shares_owned_before_transaction",
        alias = "shares_owned_before",
        skip_serializing_if = "Option::is_none"
    )]
    pub shares_owned_before: Option<f64>,
    #[serde(
        default,
        rename = "shares_owned_after_transaction",
        alias = "shares_owned_after",
        skip_serializing_if = "Option::is_none"
    )]
    pub shares_owned_after: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub security_title: Option<String>,
    pub filing_date: String,
}

impl InsiderTrade {
    pub fn new(ticker: impl Into<String>, filing_date: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            filing_date: filing_date.into(),
            ..Default::default()
        }
    }

    /// A filing that moved no shares and left the holding unchanged.
    pub fn is_no_op(&self) -> bool {
        self.transaction_shares == Some(0.0) && self.shares_owned_before == self.shares_owned_after
    }
}
