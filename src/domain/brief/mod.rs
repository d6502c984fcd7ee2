//! Brief module - The interview catalogue and the answers it collects.

mod answer;
mod project_brief;
mod question;
mod state;

pub use answer::{parse_answer, AnswerValue};
pub use project_brief::{ProjectBrief, CONSTRAINTS};
pub use question::{
    AnswerKind, Question, QuestionBank, AUDIENCE, BUDGET_RANGE, BUSINESS_GOAL, DATA_SOURCES,
    INTEGRATIONS, TIMELINE, USE_CASES,
};
pub use state::BriefState;
