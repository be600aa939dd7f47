//! Ollama chat client and rating reply parsing.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, info};

use crate::error::{AnalysisError, Result};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// Five-level rating over the next five trading days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::StrongBuy => "strong buy",
            Rating::Buy => "buy",
            Rating::Hold => "hold",
            Rating::Sell => "sell",
            Rating::StrongSell => "strong sell",
        }
    }
}

impl FromStr for Rating {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");
        match normalized.split_whitespace().collect::<Vec<_>>().join(" ").as_str() {
            "strong buy" => Ok(Rating::StrongBuy),
            "buy" => Ok(Rating::Buy),
            "hold" => Ok(Rating::Hold),
            "sell" => Ok(Rating::Sell),
            "strong sell" => Ok(Rating::StrongSell),
            _ => Err(format!("Unknown rating: {}", s)),
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn deserialize_rating<'de, D>(deserializer: D) -> std::result::Result<Option<Rating>, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    Rating::from_str(&s).map(Some).map_err(serde::de::Error::custom)
}

/// The JSON object the model is asked to answer with. A reply without a
/// `rating` key parses with `rating: None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingResponse {
    #[serde(default)]
    pub reasoning: String,
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: Option<Rating>,
}

impl RatingResponse {
    /// Rating label, or `unavailable` when the model gave none.
    pub fn label(&self) -> &'static str {
        self.rating.as_ref().map_or("unavailable", Rating::as_str)
    }
}

/// Labels in match order: `strong buy` must be tried before `buy`.
const FALLBACK_LABELS: [Rating; 5] = [
    Rating::StrongBuy,
    Rating::StrongSell,
    Rating::Hold,
    Rating::Buy,
    Rating::Sell,
];

/// Extract the rating object from a model reply.
///
/// `<think>...</think>` blocks are dropped first. The outermost `{ ... }` span
/// of what remains is parsed as JSON; when that fails the text is searched for
/// a literal `"rating": "<label>"` pair.
pub fn parse_rating(reply: &str) -> Result<RatingResponse> {
    let cleaned = strip_think_blocks(reply);

    match parse_json_span(&cleaned) {
        Ok(response) => Ok(response),
        Err(err) => match rating_from_text(&cleaned) {
            Some(rating) => {
                debug!(rating = %rating, error = %err, "Rating recovered from reply text");
                Ok(RatingResponse {
                    reasoning: String::new(),
                    rating: Some(rating),
                })
            }
            None => Err(err),
        },
    }
}

fn parse_json_span(text: &str) -> Result<RatingResponse> {
    let start = text
        .find('{')
        .ok_or_else(|| AnalysisError::Parse("no JSON object in model reply".to_string()))?;
    let end = text
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| AnalysisError::Parse("unterminated JSON object in model reply".to_string()))?;

    serde_json::from_str(&text[start..=end])
        .map_err(|e| AnalysisError::Parse(format!("invalid rating JSON: {}", e)))
}

fn strip_think_blocks(reply: &str) -> String {
    const OPEN: &str = "<think>";
    const CLOSE: &str = "</think>";

    let mut out = String::with_capacity(reply.len());
    let mut rest = reply;
    while let Some(start) = rest.find(OPEN) {
        let Some(close) = rest[start..].find(CLOSE) else {
            break;
        };
        out.push_str(&rest[..start]);
        rest = &rest[start + close + CLOSE.len()..];
    }
    out.push_str(rest);
    out
}

fn rating_from_text(text: &str) -> Option<Rating> {
    let lower = text.to_lowercase();
    FALLBACK_LABELS.into_iter().find(|rating| {
        [": ", ":"]
            .iter()
            .any(|sep| lower.contains(&format!("\"rating\"{}\"{}\"", sep, rating.as_str())))
    })
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: &str) -> Self {
        Self {
            role: "system".to_string(),
            content: content.to_string(),
        }
    }

    pub fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

/// Client for a local Ollama server
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
}

impl OllamaClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// One non-streaming chat turn; returns the assistant's message content.
    pub async fn chat(&self, model: &str, system: &str, user: &str) -> Result<String> {
        let messages = [ChatMessage::system(system), ChatMessage::user(user)];
        let request = ChatRequest {
            model,
            messages: &messages,
            stream: false,
        };

        debug!(model = %model, prompt_chars = user.len(), "Sending chat request");
        let response = self
            .client
            .post(format!("{}/api/chat", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AnalysisError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response.json().await?;
        info!(model = %model, reply_chars = chat.message.content.len(), "Model replied");
        Ok(chat.message.content)
    }

    /// Ask `model` for a rating and parse the reply.
    pub async fn rate(&self, model: &str, system: &str, prompt: &str) -> Result<RatingResponse> {
        let reply = self.chat(model, system, prompt).await?;
        parse_rating(&reply)
    }
}
