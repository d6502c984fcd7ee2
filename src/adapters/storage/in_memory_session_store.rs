//! In-Memory Session Store Adapter
//!
//! Keeps sessions and transcripts in process memory.
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::{ChatMessage, ChatSession};
use crate::domain::foundation::{DeviceToken, DomainError, ErrorCode, SessionId};
use crate::ports::SessionStore;

/// In-memory storage for chat sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, ChatSession>>>,
    transcripts: Arc<RwLock<HashMap<SessionId, Vec<ChatMessage>>>>,
}

impl InMemorySessionStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the number of stored sessions
    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn create_session(
        &self,
        device_token: Option<DeviceToken>,
    ) -> Result<ChatSession, DomainError> {
        let session = ChatSession::new(SessionId::generate(), device_token);
        self.save_session(&session).await?;
        Ok(session)
    }

    async fn load_session(&self, id: &SessionId) -> Result<Option<ChatSession>, DomainError> {
        Ok(self.sessions.read().await.get(id).cloned())
    }

    async fn save_session(&self, session: &ChatSession) -> Result<(), DomainError> {
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session.clone());
        Ok(())
    }

    async fn append_messages(
        &self,
        id: &SessionId,
        messages: &[ChatMessage],
    ) -> Result<(), DomainError> {
        if !self.sessions.read().await.contains_key(id) {
            return Err(DomainError::new(
                ErrorCode::SessionNotFound,
                format!("Session not found: {}", id),
            ));
        }

        self.transcripts
            .write()
            .await
            .entry(id.clone())
            .or_default()
            .extend_from_slice(messages);
        Ok(())
    }

    async fn recent_messages(
        &self,
        id: &SessionId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let transcripts = self.transcripts.read().await;
        let messages = transcripts.get(id).map(Vec::as_slice).unwrap_or_default();
        let start = messages.len().saturating_sub(limit);
        Ok(messages[start..].to_vec())
    }
}
