//! In-Memory Lead Repository Adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, LeadId};
use crate::domain::lead::Lead;
use crate::ports::LeadRepository;

/// In-memory storage for leads
#[derive(Debug, Clone, Default)]
pub struct InMemoryLeadRepository {
    leads: Arc<RwLock<HashMap<LeadId, Lead>>>,
}

impl InMemoryLeadRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LeadRepository for InMemoryLeadRepository {
    async fn save(&self, lead: &Lead) -> Result<(), DomainError> {
        self.leads.write().await.insert(lead.id, lead.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &LeadId) -> Result<Option<Lead>, DomainError> {
        Ok(self.leads.read().await.get(id).cloned())
    }
}
