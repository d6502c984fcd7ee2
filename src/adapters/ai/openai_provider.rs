//! OpenAI Provider - LanguageModelClient backed by OpenAI chat completions.
//!
//! # Configuration
//!
//! ```ignore
//! let provider = OpenAIProvider::new(
//!     OpenAIProvider::config(api_key).with_model("gpt-4o-mini"),
//! )?;
//! ```

use async_trait::async_trait;

use super::chat_completions::{ChatCompletionsClient, ChatCompletionsConfig};
use crate::ports::{LanguageModelClient, ProviderError};

pub const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI API provider implementation.
#[derive(Debug, Clone)]
pub struct OpenAIProvider {
    inner: ChatCompletionsClient,
}

impl OpenAIProvider {
    /// Default OpenAI settings for the given key.
    pub fn config(api_key: impl Into<String>) -> ChatCompletionsConfig {
        ChatCompletionsConfig::new(api_key, OPENAI_BASE_URL, OPENAI_DEFAULT_MODEL)
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
impl LanguageModelClient for OpenAIProvider {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.inner.complete(prompt).await
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}
