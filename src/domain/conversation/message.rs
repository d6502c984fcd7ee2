//! Transcript entries.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::Timestamp;

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Bot,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }

    /// Parses a stored role; anything but "user" is the bot.
    pub fn from_stored(value: &str) -> Self {
        if value == "user" {
            Self::User
        } else {
            Self::Bot
        }
    }
}

/// One immutable line of a session transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub created_at: Timestamp,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn bot(content: impl Into<String>) -> Self {
        Self::new(Role::Bot, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            created_at: Timestamp::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_role() {
        assert_eq!(ChatMessage::user("hi").role, Role::User);
        assert_eq!(ChatMessage::bot("hello").role, Role::Bot);
    }

    #[test]
    fn stored_role_round_trip() {
        assert_eq!(Role::from_stored(Role::User.as_str()), Role::User);
        assert_eq!(Role::from_stored("bot"), Role::Bot);
    }
}
