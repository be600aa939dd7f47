//! External services: market data and the language models.

pub mod financial_datasets;
pub mod market_data;
pub mod ollama;

pub use financial_datasets::FinancialDatasetsProvider;
pub use market_data::MarketDataProvider;
pub use ollama::{parse_rating, OllamaClient, Rating, RatingResponse};
