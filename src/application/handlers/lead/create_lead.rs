//! CreateLeadHandler - Records a prospective client.

use std::sync::Arc;

use crate::domain::foundation::{BriefId, DomainError, ErrorCode};
use crate::domain::lead::Lead;
use crate::ports::{BriefRepository, LeadRepository};

/// Command to create a lead.
#[derive(Debug, Clone, Default)]
pub struct CreateLeadCommand {
    pub brief_id: Option<BriefId>,
    pub contact_info: Option<serde_json::Value>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub company: Option<String>,
    pub notes: Option<String>,
}

/// Result of a created lead.
#[derive(Debug, Clone)]
pub struct CreateLeadResult {
    pub lead: Lead,
}

/// Handler for creating leads.
pub struct CreateLeadHandler {
    leads: Arc<dyn LeadRepository>,
    briefs: Arc<dyn BriefRepository>,
}

impl CreateLeadHandler {
    pub fn new(leads: Arc<dyn LeadRepository>, briefs: Arc<dyn BriefRepository>) -> Self {
        Self { leads, briefs }
    }

    pub async fn handle(&self, cmd: CreateLeadCommand) -> Result<CreateLeadResult, DomainError> {
        // 1. The referenced brief must exist
        if let Some(brief_id) = &cmd.brief_id {
            if self.briefs.find_by_id(brief_id).await?.is_none() {
                return Err(DomainError::new(
                    ErrorCode::BriefNotFound,
                    format!("Brief not found: {}", brief_id),
                ));
            }
        }

        // 2. Build the lead
        let mut lead = Lead::new().for_brief(cmd.brief_id);
        if let Some(contact_info) = cmd.contact_info {
            lead = lead.with_contact_info(contact_info);
        }
        lead.name = clean(cmd.name);
        lead.email = clean(cmd.email);
        lead.phone = clean(cmd.phone);
        lead.company = clean(cmd.company);
        lead.notes = clean(cmd.notes);

        // 3. Persist
        self.leads.save(&lead).await?;

        tracing::info!(
            lead_id = %lead.id,
            has_contact = lead.has_contact_channel(),
            "Lead created"
        );
        Ok(CreateLeadResult { lead })
    }
}

fn clean(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{InMemoryBriefRepository, InMemoryLeadRepository};
    use crate::domain::brief::ProjectBrief;
    use crate::domain::lead::{LeadPriority, LeadStatus};
    use serde_json::json;

    fn handler() -> (CreateLeadHandler, InMemoryLeadRepository, InMemoryBriefRepository) {
        let leads = InMemoryLeadRepository::new();
        let briefs = InMemoryBriefRepository::new();
        let handler = CreateLeadHandler::new(Arc::new(leads.clone()), Arc::new(briefs.clone()));
        (handler, leads, briefs)
    }

    #[tokio::test]
    async fn creates_lead_with_defaults() {
        let (handler, leads, _) = handler();

        let result = handler
            .handle(CreateLeadCommand {
                contact_info: Some(json!({"email": "ana@example.com"})),
                name: Some(" Ana ".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let stored = leads.find_by_id(&result.lead.id).await.unwrap().unwrap();
        assert_eq!(stored.status, LeadStatus::New);
        assert_eq!(stored.priority, LeadPriority::Medium);
        assert_eq!(stored.name.as_deref(), Some("Ana"));
        assert_eq!(stored.contact_info, json!({"email": "ana@example.com"}));
    }

    #[tokio::test]
    async fn links_existing_brief() {
        let (handler, _, briefs) = handler();
        let brief = ProjectBrief::new();
        briefs.save(&brief).await.unwrap();

        let result = handler
            .handle(CreateLeadCommand {
                brief_id: Some(brief.id),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.lead.brief_id, Some(brief.id));
    }

    #[tokio::test]
    async fn unknown_brief_is_rejected() {
        let (handler, _, _) = handler();

        let err = handler
            .handle(CreateLeadCommand {
                brief_id: Some(BriefId::new()),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::BriefNotFound);
    }

    #[tokio::test]
    async fn non_object_contact_info_becomes_empty() {
        let (handler, _, _) = handler();

        let result = handler
            .handle(CreateLeadCommand {
                contact_info: Some(json!(["not", "an", "object"])),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(result.lead.contact_info, json!({}));
    }
}
