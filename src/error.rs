use chrono::NaiveDate;
use thiserror::Error;

/// The unified error type for the `tradelens` crate.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The price series has no bars, so there is no latest row to report on.
    #[error("insufficient data: the price series contains no bars")]
    InsufficientData,

    /// A price bar violates the OHLCV invariants.
    #[error("malformed price bar on {date}: {reason}")]
    MalformedRecord { date: NaiveDate, reason: String },

    /// Transport-level failure talking to a remote service.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// A remote service answered with a non-success status.
    #[error("API error: {status} - {body}")]
    Api { status: u16, body: String },

    /// A payload or model reply could not be interpreted.
    #[error("parse error: {0}")]
    Parse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Missing or invalid configuration.
    #[error("configuration error: {0}")]
    Config(String),
}

impl AnalysisError {
    /// Transient failures worth retrying: transport errors, rate limiting
    /// and server-side errors.
    pub fn is_retryable(&self) -> bool {
        match self {
            AnalysisError::Http(e) => e.is_timeout() || e.is_connect() || e.is_request(),
            AnalysisError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
