//! In-Memory Brief Repository Adapter

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::brief::ProjectBrief;
use crate::domain::foundation::{BriefId, DomainError};
use crate::ports::BriefRepository;

/// In-memory storage for project briefs
#[derive(Debug, Clone, Default)]
pub struct InMemoryBriefRepository {
    briefs: Arc<RwLock<HashMap<BriefId, ProjectBrief>>>,
}

impl InMemoryBriefRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BriefRepository for InMemoryBriefRepository {
    async fn save(&self, brief: &ProjectBrief) -> Result<(), DomainError> {
        self.briefs.write().await.insert(brief.id, brief.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &BriefId) -> Result<Option<ProjectBrief>, DomainError> {
        Ok(self.briefs.read().await.get(id).cloned())
    }
}
