//! HTTP adapter for the chat interview.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use routes::chat_router;
