//! ProcessChatMessageHandler - Runs one interview turn for a session.

use std::sync::Arc;

use super::session_locks::SessionLocks;
use crate::domain::conversation::{
    ChatMessage, ChatSession, ConversationEngine, ConversationPhase, SummaryResult,
};
use crate::domain::foundation::{DeviceToken, DomainError, SessionId};
use crate::ports::SessionStore;

/// Command carrying one user message.
#[derive(Debug, Clone)]
pub struct ProcessChatMessageCommand {
    pub message: String,
    /// Blank or absent means a new session.
    pub session_id: Option<String>,
    pub device_token: Option<String>,
}

/// Result of a processed turn.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessChatMessageResult {
    pub session_id: SessionId,
    pub message: String,
    pub phase: ConversationPhase,
    pub pending_key: Option<String>,
    pub summary: Option<SummaryResult>,
}

/// Handler for chat turns.
pub struct ProcessChatMessageHandler {
    store: Arc<dyn SessionStore>,
    engine: Arc<ConversationEngine>,
    locks: SessionLocks,
}

impl ProcessChatMessageHandler {
    pub fn new(store: Arc<dyn SessionStore>, engine: Arc<ConversationEngine>) -> Self {
        Self {
            store,
            engine,
            locks: SessionLocks::new(),
        }
    }

    pub async fn handle(
        &self,
        cmd: ProcessChatMessageCommand,
    ) -> Result<ProcessChatMessageResult, DomainError> {
        let device_token = non_blank(cmd.device_token).map(DeviceToken::new).transpose()?;
        let requested_id = non_blank(cmd.session_id).map(SessionId::new).transpose()?;

        // 1. Serialize turns for an existing session id
        let _turn = match &requested_id {
            Some(id) => Some(self.locks.acquire(id).await),
            None => None,
        };

        // 2. Load or create the session
        let mut session = self.load_or_create(requested_id, device_token).await?;

        // 3. Advance the interview
        let outcome = self
            .engine
            .advance(
                session.turn_state.clone(),
                session.brief.clone(),
                &cmd.message,
            )
            .await;

        // 4. Persist state and transcript
        session.apply(&outcome);
        self.store.save_session(&session).await?;
        self.store
            .append_messages(
                &session.id,
                &[
                    ChatMessage::user(cmd.message),
                    ChatMessage::bot(outcome.message.clone()),
                ],
            )
            .await?;

        tracing::info!(
            session_id = %session.id,
            phase = %outcome.state.phase,
            pending_key = outcome.state.pending_key().unwrap_or(""),
            "Chat turn processed"
        );

        Ok(ProcessChatMessageResult {
            session_id: session.id,
            message: outcome.message,
            phase: outcome.state.phase,
            pending_key: outcome.state.pending_key,
            summary: outcome.summary,
        })
    }

    /// A supplied id that is not stored yet becomes the id of the new session.
    async fn load_or_create(
        &self,
        requested_id: Option<SessionId>,
        device_token: Option<DeviceToken>,
    ) -> Result<ChatSession, DomainError> {
        let Some(id) = requested_id else {
            let session = self.store.create_session(device_token).await?;
            tracing::debug!(session_id = %session.id, "Chat session created");
            return Ok(session);
        };

        if let Some(session) = self.store.load_session(&id).await? {
            return Ok(session);
        }

        let session = ChatSession::new(id, device_token);
        self.store.save_session(&session).await?;
        tracing::debug!(session_id = %session.id, "Chat session created with client id");
        Ok(session)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
