//! GetBriefHandler - Query handler for a saved brief.

use std::sync::Arc;

use crate::domain::brief::ProjectBrief;
use crate::domain::foundation::{BriefId, DomainError, ErrorCode};
use crate::ports::BriefRepository;

/// Query to get a brief by id.
#[derive(Debug, Clone)]
pub struct GetBriefQuery {
    pub brief_id: BriefId,
}

/// Handler for reading briefs.
pub struct GetBriefHandler {
    repository: Arc<dyn BriefRepository>,
}

impl GetBriefHandler {
    pub fn new(repository: Arc<dyn BriefRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetBriefQuery) -> Result<ProjectBrief, DomainError> {
        self.repository
            .find_by_id(&query.brief_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(
                    ErrorCode::BriefNotFound,
                    format!("Brief not found: {}", query.brief_id),
                )
            })
    }
}
