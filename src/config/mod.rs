//! Environment-driven configuration.
//!
//! Values come from the process environment (optionally seeded from a `.env`
//! file by the binary via `dotenvy`).

pub mod report;

pub use report::*;

use std::env;

use crate::error::{AnalysisError, Result};

pub const DEFAULT_FINANCIAL_DATASETS_URL: &str = "https://api.financialdatasets.ai";
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_MODELS: &[&str] = &["qwen2.5:7b", "llama3.1", "gemma3"];
pub const DEFAULT_LOOKBACK_DAYS: i64 = 180;
pub const DEFAULT_INSIDER_LOOKBACK_DAYS: i64 = 60;
pub const DEFAULT_INSIDER_LIMIT: usize = 50;

/// Deployment environment name (`APP_ENV`), defaults to `sandbox`.
pub fn get_environment() -> String {
    env::var("APP_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Runtime settings for the data source and the language models.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub financial_datasets_url: String,
    pub financial_datasets_api_key: Option<String>,
    pub ollama_url: String,
    pub models: Vec<String>,
    pub lookback_days: i64,
    pub insider_lookback_days: i64,
    pub insider_limit: usize,
    pub report: ReportConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            financial_datasets_url: DEFAULT_FINANCIAL_DATASETS_URL.to_string(),
            financial_datasets_api_key: None,
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            lookback_days: DEFAULT_LOOKBACK_DAYS,
            insider_lookback_days: DEFAULT_INSIDER_LOOKBACK_DAYS,
            insider_limit: DEFAULT_INSIDER_LIMIT,
            report: ReportConfig::default(),
        }
    }
}

impl AppConfig {
    /// Build the configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let models = match env::var("OLLAMA_MODELS") {
            Ok(raw) => parse_list(&raw),
            Err(_) => defaults.models,
        };
        if models.is_empty() {
            return Err(AnalysisError::Config(
                "OLLAMA_MODELS must name at least one model".to_string(),
            ));
        }

        let report = match env::var("REPORT_CONFIG_PATH") {
            Ok(path) => ReportConfig::from_json_file(&path)?,
            Err(_) => defaults.report,
        };

        Ok(Self {
            financial_datasets_url: env::var("FINANCIAL_DATASETS_BASE_URL")
                .unwrap_or(defaults.financial_datasets_url),
            financial_datasets_api_key: env::var("FINANCIAL_DATASETS_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            ollama_url: env::var("OLLAMA_BASE_URL").unwrap_or(defaults.ollama_url),
            models,
            lookback_days: parse_var("LOOKBACK_DAYS", defaults.lookback_days)?,
            insider_lookback_days: parse_var(
                "INSIDER_LOOKBACK_DAYS",
                defaults.insider_lookback_days,
            )?,
            insider_limit: parse_var("INSIDER_LIMIT", defaults.insider_limit)?,
            report,
        })
    }
}

/// Split a comma separated list, dropping blanks.
pub fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> Result<T> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| AnalysisError::Config(format!("{} has an invalid value '{}'", name, raw))),
        Err(_) => Ok(default),
    }
}
