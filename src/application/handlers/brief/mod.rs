//! Brief command and query handlers.

mod get_brief;
mod save_brief;

pub use get_brief::{GetBriefHandler, GetBriefQuery};
pub use save_brief::{BriefDraft, SaveBriefCommand, SaveBriefHandler, SaveBriefResult};
