//! PostgreSQL implementation of SessionStore.
//!
//! Sessions live in `chat_sessions` (brief as JSONB), transcripts in
//! `chat_messages` ordered by their serial id.

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use super::db_error;
use crate::domain::brief::BriefState;
use crate::domain::conversation::{
    ChatMessage, ChatSession, ConversationPhase, ConversationTurnState, Role,
};
use crate::domain::foundation::{
    DeviceToken, DomainError, ErrorCode, SessionId, Timestamp,
};
use crate::ports::SessionStore;

/// PostgreSQL implementation of SessionStore.
#[derive(Clone)]
pub struct PostgresSessionStore {
    pool: PgPool,
}

impl PostgresSessionStore {
    /// Creates a new PostgresSessionStore.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionStore for PostgresSessionStore {
    async fn create_session(
        &self,
        device_token: Option<DeviceToken>,
    ) -> Result<ChatSession, DomainError> {
        let session = ChatSession::new(SessionId::generate(), device_token);
        self.save_session(&session).await?;
        Ok(session)
    }

    async fn load_session(&self, id: &SessionId) -> Result<Option<ChatSession>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, device_token, phase, pending_key, brief, created_at, last_activity
            FROM chat_sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch session", e))?;

        row.map(row_to_session).transpose()
    }

    async fn save_session(&self, session: &ChatSession) -> Result<(), DomainError> {
        let brief = serde_json::to_value(&session.brief)?;

        sqlx::query(
            r#"
            INSERT INTO chat_sessions (
                id, device_token, phase, pending_key, brief, created_at, last_activity
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                device_token = EXCLUDED.device_token,
                phase = EXCLUDED.phase,
                pending_key = EXCLUDED.pending_key,
                brief = EXCLUDED.brief,
                last_activity = EXCLUDED.last_activity
            "#,
        )
        .bind(session.id.as_str())
        .bind(session.device_token.as_ref().map(DeviceToken::as_str))
        .bind(session.turn_state.phase.as_str())
        .bind(session.turn_state.pending_key())
        .bind(brief)
        .bind(session.created_at.as_datetime())
        .bind(session.last_activity.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("save session", e))?;

        Ok(())
    }

    async fn append_messages(
        &self,
        id: &SessionId,
        messages: &[ChatMessage],
    ) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| db_error("begin transaction", e))?;

        for message in messages {
            sqlx::query(
                r#"
                INSERT INTO chat_messages (session_id, role, content, created_at)
                VALUES ($1, $2, $3, $4)
                "#,
            )
            .bind(id.as_str())
            .bind(message.role.as_str())
            .bind(&message.content)
            .bind(message.created_at.as_datetime())
            .execute(&mut *tx)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                    DomainError::new(
                        ErrorCode::SessionNotFound,
                        format!("Session not found: {}", id),
                    )
                }
                other => db_error("insert chat message", other),
            })?;
        }

        tx.commit()
            .await
            .map_err(|e| db_error("commit chat messages", e))?;
        Ok(())
    }

    async fn recent_messages(
        &self,
        id: &SessionId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT role, content, created_at FROM (
                SELECT id, role, content, created_at
                FROM chat_messages
                WHERE session_id = $1
                ORDER BY id DESC
                LIMIT $2
            ) recent
            ORDER BY id ASC
            "#,
        )
        .bind(id.as_str())
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch chat messages", e))?;

        rows.into_iter().map(row_to_message).collect()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Helper functions
// ════════════════════════════════════════════════════════════════════════════

fn row_to_session(row: sqlx::postgres::PgRow) -> Result<ChatSession, DomainError> {
    let id: String = row.try_get("id").map_err(|e| db_error("get id", e))?;
    let device_token: Option<String> = row
        .try_get("device_token")
        .map_err(|e| db_error("get device_token", e))?;
    let phase: String = row.try_get("phase").map_err(|e| db_error("get phase", e))?;
    let pending_key: Option<String> = row
        .try_get("pending_key")
        .map_err(|e| db_error("get pending_key", e))?;
    let brief: serde_json::Value = row.try_get("brief").map_err(|e| db_error("get brief", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| db_error("get created_at", e))?;
    let last_activity: chrono::DateTime<chrono::Utc> = row
        .try_get("last_activity")
        .map_err(|e| db_error("get last_activity", e))?;

    Ok(ChatSession {
        id: SessionId::new(id)?,
        device_token: device_token.map(DeviceToken::new).transpose()?,
        turn_state: ConversationTurnState {
            phase: ConversationPhase::from(phase),
            pending_key,
        },
        brief: serde_json::from_value::<BriefState>(brief)?,
        created_at: Timestamp::from_datetime(created_at),
        last_activity: Timestamp::from_datetime(last_activity),
    })
}

fn row_to_message(row: sqlx::postgres::PgRow) -> Result<ChatMessage, DomainError> {
    let role: String = row.try_get("role").map_err(|e| db_error("get role", e))?;
    let content: String = row.try_get("content").map_err(|e| db_error("get content", e))?;
    let created_at: chrono::DateTime<chrono::Utc> = row
        .try_get("created_at")
        .map_err(|e| db_error("get created_at", e))?;

    Ok(ChatMessage {
        role: Role::from_stored(&role),
        content,
        created_at: Timestamp::from_datetime(created_at),
    })
}
