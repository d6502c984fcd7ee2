//! HTTP adapter for project briefs.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::brief_router;
