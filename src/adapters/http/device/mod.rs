//! HTTP adapter for anonymous device registration.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::device_router;
