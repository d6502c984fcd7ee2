//! Interview phases.
//!
//! A session moves `Intro` → `Asking` → `Done`, and back to `Asking` on a
//! restart request. Phase strings come back from storage, so a value this
//! build does not know is kept as `Unrecognized` rather than failing to load.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a session is in the interview.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConversationPhase {
    /// Nothing asked yet.
    #[default]
    Intro,
    /// Waiting for the answer to the pending question.
    Asking,
    /// Every question answered and the summary delivered.
    Done,
    /// A persisted phase this build does not understand.
    Unrecognized(String),
}

impl ConversationPhase {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Intro => "intro",
            Self::Asking => "asking",
            Self::Done => "done",
            Self::Unrecognized(raw) => raw,
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }
}

impl From<String> for ConversationPhase {
    fn from(value: String) -> Self {
        match value.as_str() {
            "intro" => Self::Intro,
            "asking" => Self::Asking,
            "done" => Self::Done,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<&str> for ConversationPhase {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<ConversationPhase> for String {
    fn from(phase: ConversationPhase) -> Self {
        match phase {
            ConversationPhase::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for ConversationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_is_intro() {
        assert_eq!(ConversationPhase::default(), ConversationPhase::Intro);
    }

    #[test]
    fn known_phases_serialize_lowercase() {
        assert_eq!(
            serde_json::to_string(&ConversationPhase::Asking).unwrap(),
            "\"asking\""
        );
        let done: ConversationPhase = serde_json::from_str("\"done\"").unwrap();
        assert_eq!(done, ConversationPhase::Done);
    }

    #[test]
    fn unknown_phase_deserializes_as_unrecognized() {
        let phase: ConversationPhase = serde_json::from_str("\"archived\"").unwrap();
        assert_eq!(phase, ConversationPhase::Unrecognized("archived".into()));
        assert_eq!(serde_json::to_string(&phase).unwrap(), "\"archived\"");
    }

    #[test]
    fn only_done_is_done() {
        assert!(ConversationPhase::Done.is_done());
        assert!(!ConversationPhase::Asking.is_done());
    }
}
