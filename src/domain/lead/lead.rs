//! Lead record captured at the end of an interview.

use serde::{Deserialize, Serialize};

use super::status::{LeadPriority, LeadStatus};
use crate::domain::foundation::{BriefId, LeadId, Timestamp};

/// A prospective client who asked to be contacted about a brief.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub brief_id: Option<BriefId>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    /// Free-form contact details supplied by the client.
    #[serde(default = "empty_object")]
    pub contact_info: serde_json::Value,
    pub notes: Option<String>,
    #[serde(default)]
    pub status: LeadStatus,
    #[serde(default)]
    pub priority: LeadPriority,
    pub created_at: Timestamp,
    pub updated_at: Option<Timestamp>,
}

fn empty_object() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}

impl Lead {
    /// Creates a new lead with default status and priority.
    pub fn new() -> Self {
        Self {
            id: LeadId::new(),
            brief_id: None,
            name: None,
            email: None,
            phone: None,
            company: None,
            contact_info: empty_object(),
            notes: None,
            status: LeadStatus::default(),
            priority: LeadPriority::default(),
            created_at: Timestamp::now(),
            updated_at: None,
        }
    }

    pub fn for_brief(mut self, brief_id: Option<BriefId>) -> Self {
        self.brief_id = brief_id;
        self
    }

    /// Sets the contact details. Anything that is not a JSON object is
    /// replaced by an empty object.
    pub fn with_contact_info(mut self, contact_info: serde_json::Value) -> Self {
        self.contact_info = if contact_info.is_object() {
            contact_info
        } else {
            empty_object()
        };
        self
    }

    /// True when at least one way to reach the lead is present.
    pub fn has_contact_channel(&self) -> bool {
        let non_blank = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        non_blank(&self.email)
            || non_blank(&self.phone)
            || self
                .contact_info
                .as_object()
                .is_some_and(|map| !map.is_empty())
    }
}

impl Default for Lead {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_lead_has_intake_defaults() {
        let lead = Lead::new();
        assert_eq!(lead.status, LeadStatus::New);
        assert_eq!(lead.priority, LeadPriority::Medium);
        assert_eq!(lead.contact_info, json!({}));
        assert!(!lead.has_contact_channel());
    }

    #[test]
    fn non_object_contact_info_is_discarded() {
        let lead = Lead::new().with_contact_info(json!(["a@b.c"]));
        assert_eq!(lead.contact_info, json!({}));
    }

    #[test]
    fn email_counts_as_contact_channel() {
        let mut lead = Lead::new();
        lead.email = Some("ana@example.com".into());
        assert!(lead.has_contact_channel());
    }

    #[test]
    fn contact_info_counts_as_contact_channel() {
        let lead = Lead::new().with_contact_info(json!({"whatsapp": "+34 600"}));
        assert!(lead.has_contact_channel());
    }
}
