//! Anthropic Messages API client.
//!
//! One blocking request per completion: no retry and no streaming. A fixed
//! low temperature keeps the output leaning deterministic; the system
//! message carries the JSON-only persona.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{ModelClient, ModelConfig, ModelError};

/// Fixed sampling temperature for plan generation.
const TEMPERATURE: f64 = 0.2;

/// API version header value required by the Messages API.
const ANTHROPIC_VERSION: &str = "2023-06-01";

pub struct AnthropicClient {
    model: String,
    api_key: String,
    base_url: String,
    max_tokens: u32,
    http: Client,
}

impl AnthropicClient {
    /// Build a client from connection settings.
    ///
    /// The reqwest client carries the request timeout; nothing else bounds
    /// the call.
    pub fn new(config: &ModelConfig) -> Result<Self, ModelError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(ModelError::Network)?;

        Ok(Self {
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            max_tokens: config.max_tokens,
            http,
        })
    }

    /// Request body for one completion call.
    fn request_body(&self, system: &str, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": self.model,
            "max_tokens": self.max_tokens,
            "temperature": TEMPERATURE,
            "system": system,
            "messages": [
                { "role": "user", "content": prompt }
            ],
        })
    }
}

#[async_trait]
impl ModelClient for AnthropicClient {
    fn name(&self) -> &str {
        "anthropic"
    }

    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ModelError> {
        let url = format!("{}/v1/messages", self.base_url);
        let body = self.request_body(system, prompt);

        tracing::debug!(model = %self.model, "sending completion request");

        let response = self
            .http
            .post(&url)
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(ModelError::Network)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: MessagesResponse = response.json().await.map_err(ModelError::Network)?;

        let mut text = String::new();
        for block in parsed.content {
            if let ResponseBlock::Text { text: chunk } = block {
                text.push_str(&chunk);
            }
        }

        if text.is_empty() {
            return Err(ModelError::EmptyResponse);
        }

        tracing::debug!(chars = text.len(), "completion response received");
        Ok(text)
    }
}

// Messages API response types (only what we consume).

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    content: Vec<ResponseBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
enum ResponseBlock {
    #[serde(rename = "text")]
    Text { text: String },
    #[serde(other)]
    Other,
}
