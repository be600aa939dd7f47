//! Tradelens Analyst
//!
//! Fetches prices and insider trades for each ticker, renders the analysis
//! prompt and asks every configured Ollama model for a rating.
//!
//! Usage: `analyst TSLA AAPL` or `TICKERS=TSLA,AAPL analyst`.

use chrono::{Duration, Utc};
use dotenvy::dotenv;
use std::env;
use tracing::{error, info, warn};
use tradelens::config::{get_environment, parse_list, AppConfig};
use tradelens::logging;
use tradelens::models::PriceSeries;
use tradelens::report::{build_prompt, render_insider_digest, SYSTEM_PROMPT};
use tradelens::services::{FinancialDatasetsProvider, MarketDataProvider, OllamaClient};
use tradelens::IndicatorEngine;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    logging::init_logging();

    let mut tickers: Vec<String> = env::args().skip(1).map(|t| t.to_uppercase()).collect();
    if tickers.is_empty() {
        tickers = env::var("TICKERS")
            .map(|raw| parse_list(&raw.to_uppercase()))
            .unwrap_or_default();
    }
    if tickers.is_empty() {
        return Err("usage: analyst <TICKER> [<TICKER>...] (or set TICKERS)".into());
    }

    let config = AppConfig::from_env()?;
    info!(environment = %get_environment(), models = ?config.models, "Starting Tradelens Analyst");

    let provider = FinancialDatasetsProvider::from_config(&config);
    let ollama = OllamaClient::new(&config.ollama_url);
    let engine = IndicatorEngine::from_config(&config.report)?;

    let today = Utc::now().date_naive();
    let start = today - Duration::days(config.lookback_days);
    let insider_since = today - Duration::days(config.insider_lookback_days);

    for ticker in &tickers {
        let bars = match provider.get_prices(ticker, start, today).await {
            Ok(bars) => bars,
            Err(e) => {
                error!(ticker = %ticker, error = %e, "Failed to fetch prices");
                continue;
            }
        };
        let prices = PriceSeries::from_lenient(bars);

        let digest = match engine.compute_report(ticker, &prices, &config.report) {
            Ok(digest) => digest,
            Err(e) => {
                error!(ticker = %ticker, error = %e, "Cannot build report");
                continue;
            }
        };

        let insider_digest = match provider
            .get_insider_trades(ticker, insider_since, config.insider_limit)
            .await
        {
            Ok(trades) => render_insider_digest(&trades),
            Err(e) => {
                warn!(ticker = %ticker, error = %e, "Insider trades unavailable");
                render_insider_digest(&[])
            }
        };

        let prompt = build_prompt(ticker, &digest, &insider_digest);

        for model in &config.models {
            match ollama.rate(model, SYSTEM_PROMPT, &prompt).await {
                Ok(answer) => {
                    println!("ticker: {}", ticker);
                    println!("model: {}", model);
                    println!("rating: {}", answer.label());
                    println!("reasoning: {}", answer.reasoning);
                    println!("{}", "-".repeat(60));
                }
                Err(e) => warn!(ticker = %ticker, model = %model, error = %e, "Model rating failed"),
            }
        }
    }

    Ok(())
}
