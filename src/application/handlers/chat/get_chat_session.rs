//! GetChatSessionHandler - Query handler for a session and its recent transcript.

use std::sync::Arc;

use crate::domain::conversation::{ChatMessage, ChatSession};
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::ports::SessionStore;

/// Query to get a session by id.
#[derive(Debug, Clone)]
pub struct GetChatSessionQuery {
    pub session_id: SessionId,
}

/// A session together with its most recent messages, oldest first.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatSessionView {
    pub session: ChatSession,
    pub messages: Vec<ChatMessage>,
}

/// Handler for reading chat sessions.
pub struct GetChatSessionHandler {
    store: Arc<dyn SessionStore>,
    max_history: usize,
}

impl GetChatSessionHandler {
    pub fn new(store: Arc<dyn SessionStore>, max_history: usize) -> Self {
        Self { store, max_history }
    }

    pub async fn handle(&self, query: GetChatSessionQuery) -> Result<ChatSessionView, DomainError> {
        let session = self
            .store
            .load_session(&query.session_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::SessionNotFound,
                    format!("Session not found: {}", query.session_id),
                )
            })?;

        let messages = self
            .store
            .recent_messages(&session.id, self.max_history)
            .await?;

        Ok(ChatSessionView { session, messages })
    }
}
