//! Groq Provider - LanguageModelClient backed by Groq's OpenAI-compatible API.
//!
//! # Configuration
//!
//! ```ignore
//! let provider = GroqProvider::new(
//!     GroqProvider::config(api_key).with_model("llama3-70b-8192"),
//! )?;
//! ```

use async_trait::async_trait;

use super::chat_completions::{ChatCompletionsClient, ChatCompletionsConfig};
use crate::ports::{LanguageModelClient, ProviderError};

pub const GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const GROQ_DEFAULT_MODEL: &str = "llama3-8b-8192";

/// Groq API provider implementation.
#[derive(Debug, Clone)]
pub struct GroqProvider {
    inner: ChatCompletionsClient,
}

impl GroqProvider {
    /// Default Groq settings for the given key.
    pub fn config(api_key: impl Into<String>) -> ChatCompletionsConfig {
        ChatCompletionsConfig::new(api_key, GROQ_BASE_URL, GROQ_DEFAULT_MODEL)
    }

    pub fn new(config: ChatCompletionsConfig) -> Result<Self, ProviderError> {
        Ok(Self {
            inner: ChatCompletionsClient::new(config)?,
        })
    }

    pub fn model(&self) -> &str {
        &self.inner.config().model
    }
}

#[async_trait]
impl LanguageModelClient for GroqProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.inner.complete(prompt).await
    }

    fn provider_name(&self) -> &str {
        "groq"
    }
}
