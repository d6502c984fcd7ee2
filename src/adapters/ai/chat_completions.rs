//! Shared client for OpenAI-compatible chat-completions endpoints.
//!
//! Groq and OpenAI speak the same wire format, so both providers wrap this
//! client and differ only in base URL, default model and log tag.

use reqwest::{Client, Response};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::ProviderError;

/// Sampling temperature used for every request unless overridden.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Completion token cap used for every request unless overridden.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;

const MAX_BACKOFF_SHIFT: u32 = 5;

/// Connection settings for a chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct ChatCompletionsConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    pub model: String,
    /// Base URL, without the `/chat/completions` suffix.
    pub base_url: String,
    pub temperature: f32,
    pub max_tokens: u32,
    /// Request timeout.
    pub timeout: Duration,
    /// Maximum retries on transient failures.
    pub max_retries: u32,
}

impl ChatCompletionsConfig {
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: model.into(),
            base_url: base_url.into(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(30),
            max_retries: 2,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the maximum retry count.
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// HTTP client for one chat-completions endpoint.
#[derive(Debug, Clone)]
pub struct ChatCompletionsClient {
    config: ChatCompletionsConfig,
    client: Client,
}

impl ChatCompletionsClient {
    pub fn new(config: ChatCompletionsConfig) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ProviderError::invalid_request(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ChatCompletionsConfig {
        &self.config
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.base_url.trim_end_matches('/')
        )
    }

    fn build_request(&self, prompt: &str) -> ChatRequest {
        ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatRequestMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        }
    }

    /// Sends one prompt, retrying transient failures with exponential backoff.
    pub async fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let mut retry_count = 0;

        loop {
            let err = match self.complete_once(prompt).await {
                Ok(text) => return Ok(text),
                Err(err) => err,
            };

            if !err.is_retryable() || retry_count >= self.config.max_retries {
                return Err(err);
            }

            tracing::debug!(
                model = %self.config.model,
                attempt = retry_count + 1,
                error = %err,
                "Retrying chat completion"
            );

            sleep(backoff_delay(retry_count)).await;
            retry_count += 1;
        }
    }

    async fn complete_once(&self, prompt: &str) -> Result<String, ProviderError> {
        let response = self
            .client
            .post(self.completions_url())
            .header("Authorization", format!("Bearer {}", self.config.api_key()))
            .header("Content-Type", "application/json")
            .json(&self.build_request(prompt))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout {
                        timeout_secs: self.config.timeout.as_secs() as u32,
                    }
                } else if e.is_connect() {
                    ProviderError::network(format!("Connection failed: {}", e))
                } else {
                    ProviderError::network(e.to_string())
                }
            })?;

        let response = handle_response_status(response).await?;
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::network(format!("Failed to read body: {}", e)))?;

        extract_content(&body)
    }
}

/// Exponential backoff: 1s, 2s, 4s, ... capped at 32s.
pub(crate) fn backoff_delay(retry_count: u32) -> Duration {
    Duration::from_secs(1u64 << retry_count.min(MAX_BACKOFF_SHIFT))
}

async fn handle_response_status(response: Response) -> Result<Response, ProviderError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let error_body = response.text().await.unwrap_or_default();
    Err(map_error_status(status.as_u16(), &error_body))
}

/// Maps a non-success HTTP status to a provider error.
pub(crate) fn map_error_status(status: u16, error_body: &str) -> ProviderError {
    match status {
        401 => ProviderError::AuthenticationFailed,
        429 => ProviderError::rate_limited(parse_retry_after(error_body)),
        400..=499 => ProviderError::invalid_request(format!("{}: {}", status, error_body)),
        500..=599 => {
            ProviderError::unavailable(format!("Server error {}: {}", status, error_body))
        }
        _ => ProviderError::network(format!("Unexpected status {}: {}", status, error_body)),
    }
}

/// Extracts "try again in Ns" from an error body, defaulting to 30 seconds.
fn parse_retry_after(error_body: &str) -> u32 {
    let message = serde_json::from_str::<serde_json::Value>(error_body)
        .ok()
        .and_then(|v| {
            v.get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
                .map(String::from)
        });

    message
        .as_deref()
        .and_then(|s| s.find("try again in ").map(|idx| &s[idx + 13..]))
        .and_then(|rest| {
            let digits: String = rest.chars().take_while(|c| c.is_ascii_digit()).collect();
            digits.parse::<u32>().ok()
        })
        .unwrap_or(30)
}

/// Pulls the first choice's message content out of a response body.
pub(crate) fn extract_content(body: &str) -> Result<String, ProviderError> {
    let parsed: ChatResponse = serde_json::from_str(body)
        .map_err(|e| ProviderError::parse(format!("Failed to parse response: {}", e)))?;

    parsed
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| ProviderError::parse("No choices in response"))
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatRequestMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatRequestMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    #[serde(default)]
    content: String,
}
