//! Chat session record.

use serde::{Deserialize, Serialize};

use super::engine::TurnOutcome;
use super::state::ConversationTurnState;
use crate::domain::brief::BriefState;
use crate::domain::foundation::{DeviceToken, SessionId, Timestamp};

/// Everything the interview needs to resume on the next turn.
///
/// The transcript is stored separately and only appended to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: SessionId,
    pub device_token: Option<DeviceToken>,
    pub turn_state: ConversationTurnState,
    pub brief: BriefState,
    pub created_at: Timestamp,
    pub last_activity: Timestamp,
}

impl ChatSession {
    /// Creates a session at the start of the interview.
    pub fn new(id: SessionId, device_token: Option<DeviceToken>) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            device_token,
            turn_state: ConversationTurnState::initial(),
            brief: BriefState::new(),
            created_at: now,
            last_activity: now,
        }
    }

    /// Stores the result of a turn and bumps the activity time.
    pub fn apply(&mut self, outcome: &TurnOutcome) {
        self.turn_state = outcome.state.clone();
        self.brief = outcome.brief.clone();
        self.last_activity = Timestamp::now();
    }
}
