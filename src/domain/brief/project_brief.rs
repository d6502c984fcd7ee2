//! Saved project brief record.

use serde::{Deserialize, Serialize};

use super::question::{
    AUDIENCE, BUDGET_RANGE, BUSINESS_GOAL, DATA_SOURCES, INTEGRATIONS, TIMELINE, USE_CASES,
};
use super::state::BriefState;
use crate::domain::foundation::{BriefId, DeviceToken, SessionId, Timestamp};

/// Key for free-form constraints. Not asked by the interview but accepted
/// from clients that save a brief directly.
pub const CONSTRAINTS: &str = "constraints";

/// A persisted snapshot of the requirements gathered for one project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectBrief {
    pub id: BriefId,
    pub business_goal: Option<String>,
    pub audience: Option<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub data_sources: Vec<String>,
    #[serde(default)]
    pub integrations: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    pub budget_range: Option<String>,
    pub timeline: Option<String>,
    pub device_token: Option<DeviceToken>,
    pub session_id: Option<SessionId>,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

impl ProjectBrief {
    /// Creates an empty brief with a fresh id.
    pub fn new() -> Self {
        Self {
            id: BriefId::new(),
            business_goal: None,
            audience: None,
            use_cases: Vec::new(),
            data_sources: Vec::new(),
            integrations: Vec::new(),
            constraints: Vec::new(),
            budget_range: None,
            timeline: None,
            device_token: None,
            session_id: None,
            created_at: Timestamp::now(),
            updated_at: None,
        }
    }

    /// Builds a brief from interview answers.
    pub fn from_brief_state(state: &BriefState) -> Self {
        let owned = |key: &str| state.scalar(key).map(String::from);
        Self {
            business_goal: owned(BUSINESS_GOAL),
            audience: owned(AUDIENCE),
            use_cases: state.list(USE_CASES),
            data_sources: state.list(DATA_SOURCES),
            integrations: state.list(INTEGRATIONS),
            constraints: state.list(CONSTRAINTS),
            budget_range: owned(BUDGET_RANGE),
            timeline: owned(TIMELINE),
            ..Self::new()
        }
    }

    pub fn with_device_token(mut self, token: Option<DeviceToken>) -> Self {
        self.device_token = token;
        self
    }

    pub fn with_session_id(mut self, session_id: Option<SessionId>) -> Self {
        self.session_id = session_id;
        self
    }

    /// Marks the brief as modified now.
    pub fn touch(&mut self) {
        self.updated_at = Some(Timestamp::now());
    }
}

impl Default for ProjectBrief {
    fn default() -> Self {
        Self::new()
    }
}
