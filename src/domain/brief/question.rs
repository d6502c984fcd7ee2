//! The fixed interview catalogue.
//!
//! Catalogue order is the interview order: the engine always asks the first
//! question whose answer is still missing.

use serde::{Deserialize, Serialize};

use super::state::BriefState;

/// Shape of the value a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    /// A single free-text value.
    Scalar,
    /// A comma-separated list of values.
    List,
}

/// A single interview question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Stable identity, also the key under which the answer is stored.
    pub key: &'static str,
    /// Text shown to the user.
    pub prompt: &'static str,
    /// Short label used when the brief is rendered without a model.
    pub label: &'static str,
    pub kind: AnswerKind,
}

pub const BUSINESS_GOAL: &str = "business_goal";
pub const AUDIENCE: &str = "audience";
pub const USE_CASES: &str = "use_cases";
pub const DATA_SOURCES: &str = "data_sources";
pub const INTEGRATIONS: &str = "integrations";
pub const BUDGET_RANGE: &str = "budget_range";
pub const TIMELINE: &str = "timeline";

const CATALOGUE: [Question; 7] = [
    Question {
        key: BUSINESS_GOAL,
        prompt: "What is the main goal of your project?",
        label: "Goal",
        kind: AnswerKind::Scalar,
    },
    Question {
        key: AUDIENCE,
        prompt: "Who is your target audience?",
        label: "Audience",
        kind: AnswerKind::Scalar,
    },
    Question {
        key: USE_CASES,
        prompt: "Name 2–3 key features you have in mind (separate them with commas).",
        label: "Features",
        kind: AnswerKind::List,
    },
    Question {
        key: DATA_SOURCES,
        prompt: "What data or sources exist today? (CRM, spreadsheets, APIs, etc.)",
        label: "Data sources",
        kind: AnswerKind::List,
    },
    Question {
        key: INTEGRATIONS,
        prompt: "Which systems should it integrate with? (ERP, payment gateways, etc.)",
        label: "Integrations",
        kind: AnswerKind::List,
    },
    Question {
        key: BUDGET_RANGE,
        prompt: "What is your budget range? (<10k, 10–30k, 30–80k, 80k+)",
        label: "Budget",
        kind: AnswerKind::Scalar,
    },
    Question {
        key: TIMELINE,
        prompt: "What is your desired timeline or target date for a first version?",
        label: "Timeline",
        kind: AnswerKind::Scalar,
    },
];

/// Ordered, immutable catalogue of interview questions.
#[derive(Debug, Clone, Copy)]
pub struct QuestionBank {
    questions: &'static [Question],
}

impl QuestionBank {
    /// The business-requirements interview.
    pub fn standard() -> Self {
        Self {
            questions: &CATALOGUE,
        }
    }

    /// The question every interview starts with.
    pub fn first(&self) -> &'static Question {
        // The catalogue is a non-empty constant.
        &CATALOGUE[0]
    }

    /// Looks up a question by key.
    pub fn get(&self, key: &str) -> Option<&'static Question> {
        self.questions.iter().find(|q| q.key == key)
    }

    /// Returns the first question, in catalogue order, with no usable answer.
    pub fn next_unanswered(&self, brief: &BriefState) -> Option<&'static Question> {
        self.questions.iter().find(|q| !brief.is_answered(q.key))
    }

    /// Returns true when every catalogue question has a usable answer.
    pub fn is_complete(&self, brief: &BriefState) -> bool {
        self.next_unanswered(brief).is_none()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Question> {
        self.questions.iter()
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::standard()
    }
}
