//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Model Port
//!
//! - `LanguageModelClient` - Single-shot text generation (Groq, OpenAI, mock)
//!
//! ## Storage Ports
//!
//! - `SessionStore` - Chat sessions and their transcripts
//! - `BriefRepository` - Saved project briefs
//! - `LeadRepository` - Sales leads

mod brief_repository;
mod language_model;
mod lead_repository;
mod session_store;

pub use brief_repository::BriefRepository;
pub use language_model::{LanguageModelClient, ProviderError};
pub use lead_repository::LeadRepository;
pub use session_store::SessionStore;
