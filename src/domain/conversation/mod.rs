//! Conversation module - The interview state machine and its summary step.
//!
//! # Turn flow
//!
//! ```text
//! Intro ──any──▶ Asking(first) ──answer──▶ Asking(next unanswered)
//!                                    └──last answer──▶ Done (summary)
//! Done ──"restart"──▶ Asking(first)
//! ```

mod engine;
mod message;
mod phase;
mod session;
mod state;
mod summary;

pub use engine::{ConversationEngine, TurnOutcome};
pub use message::{ChatMessage, Role};
pub use phase::ConversationPhase;
pub use session::ChatSession;
pub use state::ConversationTurnState;
pub use summary::{
    format_suggestions, suggestions_prompt, summary_prompt, SummaryGenerator, SummaryResult,
    SUGGESTION_COUNT,
};
