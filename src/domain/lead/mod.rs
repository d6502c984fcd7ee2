//! Lead module - Sales follow-up records.

#[allow(clippy::module_inception)]
mod lead;
mod status;

pub use lead::Lead;
pub use status::{LeadPriority, LeadStatus};
