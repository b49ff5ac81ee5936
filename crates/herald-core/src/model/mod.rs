//! The `ModelClient` trait -- the seam to the external LLM collaborator.
//!
//! The orchestrator only ever sees this trait, so tests swap in stub
//! implementations and the fallback path is exercised by passing no client
//! at all. The trait is intentionally object-safe so it can be stored as
//! `Arc<dyn ModelClient>`.

pub mod anthropic;

use async_trait::async_trait;
use thiserror::Error;

pub use anthropic::AnthropicClient;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default Messages API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.anthropic.com";

/// Default response token cap.
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Default request timeout in seconds. The only timeout on the model call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Errors from a model completion call.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("model API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text content")]
    EmptyResponse,
}

/// Connection settings for a model client.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl ModelConfig {
    /// Config with defaults for everything but the credential.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_owned(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Adapter interface for LLM chat-completion services.
///
/// One request, one free-text response. No retries, no streaming, no
/// conversation state -- each error class upstream has exactly one
/// resolution path, so the client never papers over failures itself.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Human-readable client name (e.g. "anthropic").
    fn name(&self) -> &str;

    /// Send one completion request and return the response text.
    async fn complete(&self, system: &str, prompt: &str) -> Result<String, ModelError>;
}

// Compile-time assertion: ModelClient must be object-safe.
const _: () = {
    fn _assert_object_safe(_: &dyn ModelClient) {}
};
