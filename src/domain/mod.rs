//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `brief` - Question catalogue, answer parsing and the collected brief
//! - `conversation` - Interview state machine and closing summary
//! - `lead` - Sales follow-up records

pub mod brief;
pub mod conversation;
pub mod foundation;
pub mod lead;
