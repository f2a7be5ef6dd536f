//! `ChatModel` trait and the `ApiClient` implementation.
//!
//! `ApiClient` calls any OpenAI-compatible `/v1/chat/completions` endpoint
//! (Groq, OpenAI, Ollama in OpenAI mode, LM Studio, vLLM, ...).
//! All connection details come from [`LlmConfig`]; nothing is hardcoded.

use async_trait::async_trait;
use thiserror::Error;

use crate::config::LlmConfig;

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur while talking to the text-generation service.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API key in config and the named environment variable is unset.
    #[error("no API key: set {0} or llm.api_key")]
    MissingApiKey(String),

    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The request did not complete within the configured timeout.
    #[error("LLM request timed out")]
    Timeout,

    /// The service answered with a non-success HTTP status.
    #[error("LLM service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse LLM response: {0}")]
    Parse(String),

    /// The LLM returned a response with no usable text content.
    #[error("LLM returned an empty response")]
    EmptyResponse,
}

impl LlmError {
    /// Errors that will recur on every request (bad or absent credential).
    pub fn is_fatal(&self) -> bool {
        match self {
            LlmError::MissingApiKey(_) => true,
            LlmError::Status { status, .. } => matches!(status, 401 | 403),
            _ => false,
        }
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// ChatRequest
// ---------------------------------------------------------------------------

/// A role-tagged prompt plus sampling parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    /// System instruction.
    pub system: String,
    /// User instruction.
    pub user: String,
    /// Maximum number of tokens to generate.
    pub max_tokens: u32,
    /// Sampling temperature.
    pub temperature: f32,
}

// ---------------------------------------------------------------------------
// ChatModel trait
// ---------------------------------------------------------------------------

/// Async trait for chat-style text generation.
///
/// Implementors must be `Send + Sync` so they can be shared across tasks
/// (e.g. wrapped in `Arc<dyn ChatModel>`).
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError>;
}

// ---------------------------------------------------------------------------
// ApiClient
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// The API key is resolved on every call, not at construction, so a
/// missing credential surfaces as [`LlmError::MissingApiKey`] at first use.
pub struct ApiClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl ApiClient {
    /// Build an `ApiClient` from application config.
    ///
    /// The HTTP client is pre-configured with the per-request timeout from
    /// `config.timeout_secs`.  A default (no-timeout) client is used if the
    /// builder fails.
    pub fn from_config(config: &LlmConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            config: config.clone(),
        }
    }

    /// `Ok(None)` means "send no Authorization header": `api_key_env` is
    /// empty, which is how local providers such as Ollama are configured.
    fn api_key(&self) -> Result<Option<String>, LlmError> {
        if let Some(key) = self.config.api_key.as_deref().filter(|k| !k.is_empty()) {
            return Ok(Some(key.to_string()));
        }
        if self.config.api_key_env.is_empty() {
            return Ok(None);
        }
        match std::env::var(&self.config.api_key_env) {
            Ok(key) if !key.is_empty() => Ok(Some(key)),
            _ => Err(LlmError::MissingApiKey(self.config.api_key_env.clone())),
        }
    }
}

#[async_trait]
impl ChatModel for ApiClient {
    async fn complete(&self, request: &ChatRequest) -> Result<String, LlmError> {
        let key = self.api_key()?;

        let url = format!(
            "{}/v1/chat/completions",
            self.config.base_url.trim_end_matches('/')
        );

        let body = serde_json::json!({
            "model":       self.config.model,
            "messages": [
                { "role": "system", "content": request.system },
                { "role": "user",   "content": request.user   }
            ],
            "stream":      false,
            "temperature": request.temperature,
            "max_tokens":  request.max_tokens
        });

        let mut req = self.client.post(&url).json(&body);
        if let Some(key) = key {
            req = req.bearer_auth(key);
        }

        log::debug!("llm: POST {url} (model {})", self.config.model);
        let response = req.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(LlmError::EmptyResponse)?
            .trim()
            .to_string();

        if content.is_empty() {
            return Err(LlmError::EmptyResponse);
        }

        Ok(content)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
