//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (write) are kept apart from query handlers (read).

pub mod handlers;

pub use handlers::{
    // Chat handlers
    ChatSessionView, GetChatSessionHandler, GetChatSessionQuery, ProcessChatMessageCommand,
    ProcessChatMessageHandler, ProcessChatMessageResult,
    // Brief handlers
    BriefDraft, GetBriefHandler, GetBriefQuery, SaveBriefCommand, SaveBriefHandler,
    SaveBriefResult,
    // Lead handlers
    CreateLeadCommand, CreateLeadHandler, CreateLeadResult, GetLeadHandler, GetLeadQuery,
    // Device handlers
    InitDeviceCommand, InitDeviceHandler, InitDeviceResult,
};
