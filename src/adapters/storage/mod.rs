//! In-memory storage adapters.
//!
//! Used when no database is configured, and by tests.

mod in_memory_brief_repository;
mod in_memory_lead_repository;
mod in_memory_session_store;

pub use in_memory_brief_repository::InMemoryBriefRepository;
pub use in_memory_lead_repository::InMemoryLeadRepository;
pub use in_memory_session_store::InMemorySessionStore;
