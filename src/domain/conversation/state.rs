//! Turn state carried between engine invocations.

use serde::{Deserialize, Serialize};

use super::phase::ConversationPhase;

/// Phase plus the key of the question awaiting an answer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConversationTurnState {
    pub phase: ConversationPhase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_key: Option<String>,
}

impl ConversationTurnState {
    /// State of a brand-new session.
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn asking(key: impl Into<String>) -> Self {
        Self {
            phase: ConversationPhase::Asking,
            pending_key: Some(key.into()),
        }
    }

    pub fn done() -> Self {
        Self {
            phase: ConversationPhase::Done,
            pending_key: None,
        }
    }

    pub fn pending_key(&self) -> Option<&str> {
        self.pending_key.as_deref()
    }
}
