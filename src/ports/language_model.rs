//! Language Model Port - Interface for text-generation providers.
//!
//! The summary pipeline only ever needs one capability: send a prompt, get
//! text back. Providers (Groq, OpenAI, a mock for tests) implement this
//! trait and are chosen once at start-up, so business logic never branches
//! on which provider is active.
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct EchoModel;
//!
//! #[async_trait]
//! impl LanguageModelClient for EchoModel {
//!     async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
//!         Ok(prompt.to_string())
//!     }
//!
//!     fn provider_name(&self) -> &str {
//!         "echo"
//!     }
//! }
//! ```

use async_trait::async_trait;

/// Port for single-shot text generation.
#[async_trait]
pub trait LanguageModelClient: Send + Sync {
    /// Sends one user prompt and returns the model's reply.
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError>;

    /// Short provider tag used in logs (e.g. "groq").
    fn provider_name(&self) -> &str;
}

/// Language model provider errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until retry is allowed.
        retry_after_secs: u32,
    },

    /// API key rejected or missing.
    #[error("authentication failed")]
    AuthenticationFailed,

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Response could not be decoded or had the wrong shape.
    #[error("parse error: {0}")]
    Parse(String),

    /// Request rejected by the provider.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout { timeout_secs: u32 },
}

impl ProviderError {
    pub fn rate_limited(retry_after_secs: u32) -> Self {
        Self::RateLimited { retry_after_secs }
    }

    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::Unavailable {
            message: message.into(),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest(message.into())
    }

    /// Returns true if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ProviderError::RateLimited { .. }
                | ProviderError::Unavailable { .. }
                | ProviderError::Network(_)
                | ProviderError::Timeout { .. }
        )
    }
}
