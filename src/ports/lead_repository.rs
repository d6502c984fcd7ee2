//! Lead repository port.

use async_trait::async_trait;

use crate::domain::foundation::{DomainError, LeadId};
use crate::domain::lead::Lead;

/// Repository port for sales leads.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// Inserts or replaces a lead.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, lead: &Lead) -> Result<(), DomainError>;

    /// Find a lead by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &LeadId) -> Result<Option<Lead>, DomainError>;
}
