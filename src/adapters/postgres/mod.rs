//! PostgreSQL adapters - Database implementations for storage ports.
//!
//! This module provides adapters for PostgreSQL-backed persistence:
//! - `PostgresSessionStore` - Chat sessions and transcripts
//! - `PostgresBriefRepository` - Saved project briefs
//! - `PostgresLeadRepository` - Sales leads
//!
//! Queries are checked at runtime; the schema lives in `migrations/`.

mod brief_repository;
mod lead_repository;
mod session_store;

pub use brief_repository::PostgresBriefRepository;
pub use lead_repository::PostgresLeadRepository;
pub use session_store::PostgresSessionStore;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Wraps a sqlx error as a `DatabaseError` naming the failed action.
pub(crate) fn db_error(action: &str, err: sqlx::Error) -> DomainError {
    DomainError::new(
        ErrorCode::DatabaseError,
        format!("Failed to {}: {}", action, err),
    )
}
