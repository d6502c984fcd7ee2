//! Language Model Adapters.
//!
//! Implementations of the LanguageModelClient port.
//!
//! ## Available Adapters
//!
//! - `GroqProvider` - Groq-hosted Llama models
//! - `OpenAIProvider` - OpenAI GPT models
//! - `MockLanguageModel` - Configurable mock for testing
//!
//! [`build_language_model`] picks the provider named in configuration.

mod chat_completions;
mod groq_provider;
mod mock_provider;
mod openai_provider;

pub use chat_completions::{
    ChatCompletionsClient, ChatCompletionsConfig, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE,
};
pub use groq_provider::{GroqProvider, GROQ_BASE_URL, GROQ_DEFAULT_MODEL};
pub use mock_provider::MockLanguageModel;
pub use openai_provider::{OpenAIProvider, OPENAI_BASE_URL, OPENAI_DEFAULT_MODEL};

use std::sync::Arc;

use crate::config::{AiConfig, AiProvider};
use crate::ports::{LanguageModelClient, ProviderError};

/// Builds the configured provider.
///
/// # Errors
///
/// - `AuthenticationFailed` if the selected provider has no API key
/// - `InvalidRequest` if the HTTP client cannot be built
pub fn build_language_model(
    config: &AiConfig,
) -> Result<Arc<dyn LanguageModelClient>, ProviderError> {
    let apply = |base: ChatCompletionsConfig| {
        base.with_temperature(config.temperature)
            .with_max_tokens(config.max_tokens)
            .with_timeout(config.timeout())
            .with_max_retries(config.max_retries)
    };

    let client: Arc<dyn LanguageModelClient> = match config.provider {
        AiProvider::Groq => {
            let key = config
                .groq_api_key
                .as_deref()
                .filter(|k| !k.is_empty())
                .ok_or(ProviderError::AuthenticationFailed)?;
            Arc::new(GroqProvider::new(apply(
                GroqProvider::config(key).with_model(&config.groq_model),
            ))?)
        }
        AiProvider::OpenAI => {
            let key = config
                .openai_api_key
                .as_deref()
                .filter(|k| !k.is_empty())
                .ok_or(ProviderError::AuthenticationFailed)?;
            Arc::new(OpenAIProvider::new(apply(
                OpenAIProvider::config(key).with_model(&config.openai_model),
            ))?)
        }
    };

    tracing::info!(provider = client.provider_name(), "Language model configured");
    Ok(client)
}
