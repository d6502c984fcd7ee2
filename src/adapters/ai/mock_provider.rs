//! Mock language model for testing.
//!
//! Returns queued responses in order and records every prompt it receives,
//! so tests can drive the summary pipeline without a real provider.
//!
//! # Example
//!
//! ```ignore
//! let model = MockLanguageModel::new()
//!     .with_response("A concise summary.")
//!     .with_response("1. MVP\n2. Pilot\n3. Platform");
//!
//! let text = model.generate("summarize").await?;
//! assert_eq!(model.call_count(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{LanguageModelClient, ProviderError};

/// Mock language model for testing.
#[derive(Debug, Clone, Default)]
pub struct MockLanguageModel {
    /// Pre-configured outcomes (consumed in order).
    responses: Arc<Mutex<VecDeque<Result<String, ProviderError>>>>,
    /// Returned once the queue is empty; `None` yields a canned reply.
    exhausted: Option<ProviderError>,
    /// Simulated latency per request.
    delay: Duration,
    /// Prompts received, in order.
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockLanguageModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// A model that fails every call with the given error.
    pub fn failing(error: ProviderError) -> Self {
        Self {
            exhausted: Some(error),
            ..Self::default()
        }
    }

    /// Adds a successful response to the queue.
    pub fn with_response(self, content: impl Into<String>) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(content.into()));
        self
    }

    /// Adds an error to the queue.
    pub fn with_error(self, error: ProviderError) -> Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Returns the number of calls made.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Returns all recorded prompts.
    pub fn get_calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn next_response(&self) -> Result<String, ProviderError> {
        match self.responses.lock().unwrap().pop_front() {
            Some(outcome) => outcome,
            None => match &self.exhausted {
                Some(err) => Err(err.clone()),
                None => Ok("Mock response".to_string()),
            },
        }
    }
}

#[async_trait]
impl LanguageModelClient for MockLanguageModel {
    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        self.calls.lock().unwrap().push(prompt.to_string());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        self.next_response()
    }

    fn provider_name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_queued_responses_in_order() {
        let model = MockLanguageModel::new()
            .with_response("first")
            .with_error(ProviderError::AuthenticationFailed)
            .with_response("third");

        assert_eq!(model.generate("a").await.unwrap(), "first");
        assert_eq!(
            model.generate("b").await.unwrap_err(),
            ProviderError::AuthenticationFailed
        );
        assert_eq!(model.generate("c").await.unwrap(), "third");
        assert_eq!(model.get_calls(), vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn default_reply_when_queue_is_empty() {
        let model = MockLanguageModel::new();
        assert_eq!(model.generate("x").await.unwrap(), "Mock response");
    }

    #[tokio::test]
    async fn failing_model_always_errors() {
        let model = MockLanguageModel::failing(ProviderError::Timeout { timeout_secs: 30 });
        assert!(model.generate("x").await.is_err());
        assert!(model.generate("y").await.is_err());
        assert_eq!(model.call_count(), 2);
    }

    #[tokio::test]
    async fn clones_share_call_history() {
        let model = MockLanguageModel::new();
        let handle = model.clone();
        model.generate("x").await.unwrap();
        assert_eq!(handle.call_count(), 1);
    }
}
