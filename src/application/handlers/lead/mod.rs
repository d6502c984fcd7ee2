//! Lead command and query handlers.

mod create_lead;
mod get_lead;

pub use create_lead::{CreateLeadCommand, CreateLeadHandler, CreateLeadResult};
pub use get_lead::{GetLeadHandler, GetLeadQuery};
