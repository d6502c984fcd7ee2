//! Brief repository port.

use async_trait::async_trait;

use crate::domain::brief::ProjectBrief;
use crate::domain::foundation::{BriefId, DomainError};

/// Repository port for saved project briefs.
#[async_trait]
pub trait BriefRepository: Send + Sync {
    /// Inserts or replaces a brief.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, brief: &ProjectBrief) -> Result<(), DomainError>;

    /// Find a brief by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &BriefId) -> Result<Option<ProjectBrief>, DomainError>;
}
