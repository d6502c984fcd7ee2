//! GetLeadHandler - Query handler for a lead.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, ErrorCode, LeadId};
use crate::domain::lead::Lead;
use crate::ports::LeadRepository;

/// Query to get a lead by id.
#[derive(Debug, Clone)]
pub struct GetLeadQuery {
    pub lead_id: LeadId,
}

/// Handler for reading leads.
pub struct GetLeadHandler {
    repository: Arc<dyn LeadRepository>,
}

impl GetLeadHandler {
    pub fn new(repository: Arc<dyn LeadRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetLeadQuery) -> Result<Lead, DomainError> {
        self.repository
            .find_by_id(&query.lead_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::LeadNotFound,
                    format!("Lead not found: {}", query.lead_id),
                )
            })
    }
}
