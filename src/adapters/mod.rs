//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Language model providers (Groq, OpenAI, mock)
//! - `http` - REST API
//! - `postgres` - PostgreSQL storage
//! - `storage` - In-memory storage

pub mod ai;
pub mod http;
pub mod postgres;
pub mod storage;
