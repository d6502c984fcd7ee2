//! SaveBriefHandler - Persists a project brief.
//!
//! The brief comes either from the client directly or from the answers an
//! interview session has collected.

use std::sync::Arc;

use crate::domain::brief::ProjectBrief;
use crate::domain::foundation::{DeviceToken, DomainError, ErrorCode, SessionId};
use crate::ports::{BriefRepository, SessionStore};

/// Brief fields supplied by a client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BriefDraft {
    pub business_goal: Option<String>,
    pub audience: Option<String>,
    pub use_cases: Vec<String>,
    pub data_sources: Vec<String>,
    pub integrations: Vec<String>,
    pub constraints: Vec<String>,
    pub budget_range: Option<String>,
    pub timeline: Option<String>,
}

impl BriefDraft {
    fn into_brief(self) -> ProjectBrief {
        ProjectBrief {
            business_goal: clean_text(self.business_goal),
            audience: clean_text(self.audience),
            use_cases: clean_list(self.use_cases),
            data_sources: clean_list(self.data_sources),
            integrations: clean_list(self.integrations),
            constraints: clean_list(self.constraints),
            budget_range: clean_text(self.budget_range),
            timeline: clean_text(self.timeline),
            ..ProjectBrief::new()
        }
    }
}

fn clean_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn clean_list(items: Vec<String>) -> Vec<String> {
    items
        .into_iter()
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

/// Command to save a brief. Without a draft, the brief is built from the
/// session named by `session_id`.
#[derive(Debug, Clone, Default)]
pub struct SaveBriefCommand {
    pub draft: Option<BriefDraft>,
    pub device_token: Option<String>,
    pub session_id: Option<String>,
}

/// Result of a saved brief.
#[derive(Debug, Clone)]
pub struct SaveBriefResult {
    pub brief: ProjectBrief,
}

/// Handler for saving briefs.
pub struct SaveBriefHandler {
    repository: Arc<dyn BriefRepository>,
    sessions: Arc<dyn SessionStore>,
}

impl SaveBriefHandler {
    pub fn new(repository: Arc<dyn BriefRepository>, sessions: Arc<dyn SessionStore>) -> Self {
        Self {
            repository,
            sessions,
        }
    }

    pub async fn handle(&self, cmd: SaveBriefCommand) -> Result<SaveBriefResult, DomainError> {
        let device_token = cmd
            .device_token
            .filter(|t| !t.trim().is_empty())
            .map(DeviceToken::new)
            .transpose()?;
        let session_id = cmd
            .session_id
            .filter(|s| !s.trim().is_empty())
            .map(SessionId::new)
            .transpose()?;

        // 1. Build the brief
        let brief = match (cmd.draft, &session_id) {
            (Some(draft), _) => draft
                .into_brief()
                .with_device_token(device_token)
                .with_session_id(session_id),
            (None, Some(id)) => {
                let session = self.sessions.load_session(id).await?.ok_or_else(|| {
                    DomainError::new(
                        ErrorCode::SessionNotFound,
                        format!("Session not found: {}", id),
                    )
                })?;
                ProjectBrief::from_brief_state(&session.brief)
                    .with_device_token(device_token.or(session.device_token))
                    .with_session_id(Some(session.id))
            }
            (None, None) => {
                return Err(DomainError::validation(
                    "Either brief content or a session_id is required",
                ));
            }
        };

        // 2. Persist
        self.repository.save(&brief).await?;

        tracing::info!(brief_id = %brief.id, "Brief saved");
        Ok(SaveBriefResult { brief })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryBriefRepository, InMemorySessionStore};
    use crate::domain::brief::{AnswerValue, BUSINESS_GOAL, USE_CASES};
    use crate::domain::conversation::ChatSession;

    fn handler() -> (SaveBriefHandler, InMemoryBriefRepository, InMemorySessionStore) {
        let repo = InMemoryBriefRepository::new();
        let sessions = InMemorySessionStore::new();
        let handler = SaveBriefHandler::new(Arc::new(repo.clone()), Arc::new(sessions.clone()));
        (handler, repo, sessions)
    }

    #[tokio::test]
    async fn saves_client_draft() {
        let (handler, repo, _) = handler();
        let cmd = SaveBriefCommand {
            draft: Some(BriefDraft {
                business_goal: Some("  Sell more  ".to_string()),
                audience: Some("".to_string()),
                use_cases: vec!["catalog".into(), " ".into(), "cart".into()],
                ..Default::default()
            }),
            device_token: Some("device_1".to_string()),
            session_id: None,
        };

        let result = handler.handle(cmd).await.unwrap();

        let stored = repo.find_by_id(&result.brief.id).await.unwrap().unwrap();
        assert_eq!(stored.business_goal.as_deref(), Some("Sell more"));
        assert_eq!(stored.audience, None);
        assert_eq!(stored.use_cases, vec!["catalog", "cart"]);
        assert_eq!(stored.device_token.unwrap().as_str(), "device_1");
    }

    #[tokio::test]
    async fn builds_brief_from_session_answers() {
        let (handler, repo, sessions) = handler();
        let mut session = ChatSession::new(
            SessionId::new("session_x").unwrap(),
            Some(DeviceToken::new("device_9").unwrap()),
        );
        session.brief.set(BUSINESS_GOAL, AnswerValue::text("Grow"));
        session
            .brief
            .set(USE_CASES, AnswerValue::list(["a", "b"]));
        sessions.save_session(&session).await.unwrap();

        let result = handler
            .handle(SaveBriefCommand {
                session_id: Some("session_x".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let stored = repo.find_by_id(&result.brief.id).await.unwrap().unwrap();
        assert_eq!(stored.business_goal.as_deref(), Some("Grow"));
        assert_eq!(stored.use_cases, vec!["a", "b"]);
        assert_eq!(stored.session_id, Some(session.id));
        assert_eq!(stored.device_token.unwrap().as_str(), "device_9");
    }

    #[tokio::test]
    async fn unknown_session_is_not_found() {
        let (handler, _, _) = handler();

        let err = handler
            .handle(SaveBriefCommand {
                session_id: Some("nope".to_string()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test]
    async fn requires_draft_or_session() {
        let (handler, _, _) = handler();

        let err = handler.handle(SaveBriefCommand::default()).await.unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
