//! Session store port.
//!
//! Persists chat sessions (turn state + brief) and their append-only
//! transcript. The engine never touches the store directly; the chat
//! handler loads a session, runs a turn and saves the result.

use async_trait::async_trait;

use crate::domain::conversation::{ChatMessage, ChatSession};
use crate::domain::foundation::{DeviceToken, DomainError, SessionId};

/// Storage port for chat sessions and transcripts.
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Creates and persists a new session with a generated id.
    async fn create_session(
        &self,
        device_token: Option<DeviceToken>,
    ) -> Result<ChatSession, DomainError>;

    /// Find a session by its ID.
    ///
    /// Returns `None` if not found.
    async fn load_session(&self, id: &SessionId) -> Result<Option<ChatSession>, DomainError>;

    /// Inserts or replaces a session.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save_session(&self, session: &ChatSession) -> Result<(), DomainError>;

    /// Appends messages to a session transcript, preserving order.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn append_messages(
        &self,
        id: &SessionId,
        messages: &[ChatMessage],
    ) -> Result<(), DomainError>;

    /// Returns the last `limit` messages, oldest first.
    async fn recent_messages(
        &self,
        id: &SessionId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, DomainError>;
}
