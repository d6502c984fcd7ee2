//! HTTP DTOs for lead endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::lead::Lead;

/// Request to create a lead.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LeadCreateRequest {
    #[serde(default)]
    pub brief_id: Option<String>,
    #[serde(default)]
    pub contact_info: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadCreateResponse {
    pub success: bool,
    pub lead_id: String,
    pub message: String,
}

/// A stored lead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeadResponse {
    pub id: String,
    pub brief_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub contact_info: serde_json::Value,
    pub notes: Option<String>,
    pub status: String,
    pub priority: String,
    pub created_at: String,
    pub updated_at: Option<String>,
}

impl From<Lead> for LeadResponse {
    fn from(lead: Lead) -> Self {
        Self {
            id: lead.id.to_string(),
            brief_id: lead.brief_id.map(|id| id.to_string()),
            name: lead.name,
            email: lead.email,
            phone: lead.phone,
            company: lead.company,
            contact_info: lead.contact_info,
            notes: lead.notes,
            status: lead.status.to_string(),
            priority: lead.priority.to_string(),
            created_at: lead.created_at.to_rfc3339(),
            updated_at: lead.updated_at.map(|t| t.to_rfc3339()),
        }
    }
}
