//! HTTP DTOs for chat endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::{ChatSessionView, ProcessChatMessageResult};
use crate::domain::brief::BriefState;
use crate::domain::conversation::ChatMessage;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// One user message.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub device_token: Option<String>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Reply to a chat turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub message: String,
    pub session_id: String,
    /// Phase after the turn: `asking`, `done`, or `intro` after a reset.
    pub step: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

impl From<ProcessChatMessageResult> for ChatResponse {
    fn from(result: ProcessChatMessageResult) -> Self {
        let (summary, suggestions) = match result.summary {
            Some(s) => (Some(s.summary), Some(s.suggestions)),
            None => (None, None),
        };
        Self {
            message: result.message,
            session_id: result.session_id.to_string(),
            step: result.phase.to_string(),
            current_key: result.pending_key,
            suggestions,
            summary,
        }
    }
}

/// A transcript entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessageResponse {
    pub role: String,
    pub content: String,
    pub created_at: String,
}

impl From<ChatMessage> for ChatMessageResponse {
    fn from(message: ChatMessage) -> Self {
        Self {
            role: message.role.as_str().to_string(),
            content: message.content,
            created_at: message.created_at.to_rfc3339(),
        }
    }
}

/// Session state with its recent transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSessionResponse {
    pub session_id: String,
    pub current_step: String,
    pub current_question_key: Option<String>,
    pub brief: BriefState,
    pub created_at: String,
    pub last_activity: String,
    pub messages: Vec<ChatMessageResponse>,
}

impl From<ChatSessionView> for ChatSessionResponse {
    fn from(view: ChatSessionView) -> Self {
        let session = view.session;
        Self {
            session_id: session.id.to_string(),
            current_step: session.turn_state.phase.to_string(),
            current_question_key: session.turn_state.pending_key,
            brief: session.brief,
            created_at: session.created_at.to_rfc3339(),
            last_activity: session.last_activity.to_rfc3339(),
            messages: view.messages.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::{ConversationPhase, SummaryResult};
    use crate::domain::foundation::SessionId;

    #[test]
    fn chat_request_only_needs_message() {
        let req: ChatRequest = serde_json::from_str(r#"{"message": "hi"}"#).unwrap();
        assert_eq!(req.message, "hi");
        assert!(req.session_id.is_none());
        assert!(req.device_token.is_none());
    }

    #[test]
    fn asking_response_omits_summary_fields() {
        let response = ChatResponse::from(ProcessChatMessageResult {
            session_id: SessionId::new("session_1").unwrap(),
            message: "Who is your audience?".to_string(),
            phase: ConversationPhase::Asking,
            pending_key: Some("audience".to_string()),
            summary: None,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["step"], "asking");
        assert_eq!(json["current_key"], "audience");
        assert!(json.get("summary").is_none());
        assert!(json.get("suggestions").is_none());
    }

    #[test]
    fn done_response_carries_summary() {
        let response = ChatResponse::from(ProcessChatMessageResult {
            session_id: SessionId::new("session_1").unwrap(),
            message: "done".to_string(),
            phase: ConversationPhase::Done,
            pending_key: None,
            summary: Some(SummaryResult {
                summary: "Summary".to_string(),
                suggestions: vec!["1".into(), "2".into(), "3".into()],
                is_fallback: false,
            }),
        });

        assert_eq!(response.step, "done");
        assert_eq!(response.summary.as_deref(), Some("Summary"));
        assert_eq!(response.suggestions.unwrap().len(), 3);
    }
}
