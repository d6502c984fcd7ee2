//! Foundation module - Shared domain primitives.
//!
//! Contains identifiers, timestamps and error types that form the
//! vocabulary of the intake domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{generate_fingerprint_salt, BriefId, DeviceToken, LeadId, SessionId};
pub use timestamp::Timestamp;
