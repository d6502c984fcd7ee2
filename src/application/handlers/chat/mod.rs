//! Chat command and query handlers.

mod get_chat_session;
mod process_chat_message;
mod session_locks;

pub use get_chat_session::{ChatSessionView, GetChatSessionHandler, GetChatSessionQuery};
pub use process_chat_message::{
    ProcessChatMessageCommand, ProcessChatMessageHandler, ProcessChatMessageResult,
};
pub use session_locks::SessionLocks;
