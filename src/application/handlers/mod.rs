//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod brief;
pub mod chat;
pub mod device;
pub mod lead;

pub use brief::{
    BriefDraft, GetBriefHandler, GetBriefQuery, SaveBriefCommand, SaveBriefHandler,
    SaveBriefResult,
};
pub use chat::{
    ChatSessionView, GetChatSessionHandler, GetChatSessionQuery, ProcessChatMessageCommand,
    ProcessChatMessageHandler, ProcessChatMessageResult, SessionLocks,
};
pub use device::{InitDeviceCommand, InitDeviceHandler, InitDeviceResult};
pub use lead::{
    CreateLeadCommand, CreateLeadHandler, CreateLeadResult, GetLeadHandler, GetLeadQuery,
};
