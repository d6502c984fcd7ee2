//! HTTP adapter for leads.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::lead_router;
