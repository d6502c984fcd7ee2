//! HTTP DTOs for brief endpoints.

use serde::{Deserialize, Serialize};

use crate::application::handlers::BriefDraft;
use crate::domain::brief::ProjectBrief;

/// Brief fields as sent by the client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BriefPayload {
    #[serde(default)]
    pub business_goal: Option<String>,
    #[serde(default)]
    pub audience: Option<String>,
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub data_sources: Vec<String>,
    #[serde(default)]
    pub integrations: Vec<String>,
    #[serde(default)]
    pub constraints: Vec<String>,
    #[serde(default)]
    pub budget_range: Option<String>,
    #[serde(default)]
    pub timeline: Option<String>,
}

impl From<BriefPayload> for BriefDraft {
    fn from(payload: BriefPayload) -> Self {
        Self {
            business_goal: payload.business_goal,
            audience: payload.audience,
            use_cases: payload.use_cases,
            data_sources: payload.data_sources,
            integrations: payload.integrations,
            constraints: payload.constraints,
            budget_range: payload.budget_range,
            timeline: payload.timeline,
        }
    }
}

/// Request to save a brief. Omit `brief` to save the answers of `session_id`.
#[derive(Debug, Clone, Deserialize)]
pub struct BriefSaveRequest {
    #[serde(default)]
    pub brief: Option<BriefPayload>,
    #[serde(default)]
    pub device_token: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefSaveResponse {
    pub success: bool,
    pub brief_id: String,
    pub message: String,
}

/// A saved brief.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefResponse {
    pub id: String,
    #[serde(flatten)]
    pub content: BriefPayload,
    pub device_token: Option<String>,
    pub session_id: Option<String>,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<ProjectBrief> for BriefResponse {
    fn from(brief: ProjectBrief) -> Self {
        Self {
            id: brief.id.to_string(),
            content: BriefPayload {
                business_goal: brief.business_goal,
                audience: brief.audience,
                use_cases: brief.use_cases,
                data_sources: brief.data_sources,
                integrations: brief.integrations,
                constraints: brief.constraints,
                budget_range: brief.budget_range,
                timeline: brief.timeline,
            },
            device_token: brief.device_token.map(|t| t.to_string()),
            session_id: brief.session_id.map(|s| s.to_string()),
            created_at: brief.created_at.to_rfc3339(),
            updated_at: brief.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}
