//! Summary generation for a completed interview.
//!
//! Two model calls are made: one for a prose summary of the brief and one for
//! three numbered delivery suggestions. If either call fails, or the
//! suggestions come back in an unusable shape, a template summary built
//! only from the brief is returned instead, so the interview always ends
//! with a complete message.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::domain::brief::{
    BriefState, QuestionBank, AUDIENCE, BUDGET_RANGE, BUSINESS_GOAL, DATA_SOURCES, INTEGRATIONS,
    TIMELINE, USE_CASES,
};
use crate::ports::{LanguageModelClient, ProviderError};

/// Number of suggestions every summary carries.
pub const SUGGESTION_COUNT: usize = 3;

const PREAMBLE: &str = "Excellent! We have gathered all the information we need.";
const SUGGESTIONS_HEADER: &str = "**High-level suggestions:**";
const CLOSING: &str =
    "Would you like to schedule a call to review these details and discuss next steps?";
const FALLBACK_CLOSING: &str = "Would you like to schedule a call to review these details?";
const NOT_SPECIFIED: &str = "not specified";

const FALLBACK_SUGGESTIONS: [&str; SUGGESTION_COUNT] = [
    "1. **Basic MVP**: Build the core features with a simple, functional design",
    "2. **Advanced MVP**: Add integrations and advanced capabilities",
    "3. **Complete Solution**: Scalable architecture covering every feature",
];

/// Summary text and suggestions delivered when the interview finishes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub summary: String,
    /// Always exactly [`SUGGESTION_COUNT`] entries.
    pub suggestions: Vec<String>,
    /// True when the template summary was used instead of the model.
    #[serde(skip)]
    pub is_fallback: bool,
}

/// Builds the closing summary, delegating prose to a language model.
#[derive(Clone)]
pub struct SummaryGenerator {
    client: Arc<dyn LanguageModelClient>,
    bank: QuestionBank,
    /// Budget shared by both model calls, retries included.
    deadline: Option<Duration>,
}

impl SummaryGenerator {
    pub fn new(client: Arc<dyn LanguageModelClient>) -> Self {
        Self {
            client,
            bank: QuestionBank::standard(),
            deadline: None,
        }
    }

    /// Bounds the whole model exchange; expiry is treated as a provider timeout.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Produces the outgoing message and the summary. Never fails.
    pub async fn generate(&self, brief: &BriefState) -> (String, SummaryResult) {
        let outcome = match self.deadline {
            Some(deadline) => tokio::time::timeout(deadline, self.generate_with_model(brief))
                .await
                .unwrap_or(Err(ProviderError::Timeout {
                    timeout_secs: deadline.as_secs() as u32,
                })),
            None => self.generate_with_model(brief).await,
        };

        match outcome {
            Ok(result) => (compose_message(&result), result),
            Err(err) => {
                tracing::warn!(
                    provider = self.client.provider_name(),
                    error = %err,
                    "Summary generation failed, using template summary"
                );
                self.fallback(brief)
            }
        }
    }

    async fn generate_with_model(&self, brief: &BriefState) -> Result<SummaryResult, ProviderError> {
        let summary = self.client.generate(&summary_prompt(brief)).await?;
        let raw_suggestions = self.client.generate(&suggestions_prompt(brief)).await?;

        let mut suggestions = format_suggestions(&raw_suggestions);
        if suggestions.len() < SUGGESTION_COUNT {
            return Err(ProviderError::parse(format!(
                "expected {} suggestions, got {}",
                SUGGESTION_COUNT,
                suggestions.len()
            )));
        }
        suggestions.truncate(SUGGESTION_COUNT);

        Ok(SummaryResult {
            summary: summary.trim().to_string(),
            suggestions,
            is_fallback: false,
        })
    }

    /// Template summary built from the brief alone. Deterministic.
    pub fn fallback(&self, brief: &BriefState) -> (String, SummaryResult) {
        let mut summary = String::from("**Project summary:**");
        for question in self.bank.iter() {
            if let Some(value) = brief.get(question.key).filter(|v| v.is_answered()) {
                summary.push_str(&format!(
                    "\n• **{}**: {}",
                    question.label,
                    value.display_text()
                ));
            }
        }

        let result = SummaryResult {
            summary,
            suggestions: FALLBACK_SUGGESTIONS.iter().map(|s| s.to_string()).collect(),
            is_fallback: true,
        };
        let message = format!(
            "{}\n\n{}\n\n{}\n{}\n\n{}",
            PREAMBLE,
            result.summary,
            SUGGESTIONS_HEADER,
            result.suggestions.join("\n"),
            FALLBACK_CLOSING
        );
        (message, result)
    }
}

impl std::fmt::Debug for SummaryGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummaryGenerator")
            .field("provider", &self.client.provider_name())
            .field("deadline", &self.deadline)
            .finish()
    }
}

fn compose_message(result: &SummaryResult) -> String {
    format!(
        "{} Here is your project summary:\n\n{}\n\n{}\n{}\n\n{}",
        PREAMBLE,
        result.summary,
        SUGGESTIONS_HEADER,
        result.suggestions.join("\n"),
        CLOSING
    )
}

fn scalar_or<'a>(brief: &'a BriefState, key: &str, default: &'a str) -> &'a str {
    brief.scalar(key).unwrap_or(default)
}

fn joined(brief: &BriefState, key: &str) -> String {
    brief.list(key).join(", ")
}

/// Prompt asking for a prose summary of every field.
pub fn summary_prompt(brief: &BriefState) -> String {
    format!(
        "Write a professional, concise summary of the following project based on the information gathered:\n\
         \n\
         Goal: {}\n\
         Audience: {}\n\
         Features: {}\n\
         Data sources: {}\n\
         Integrations: {}\n\
         Budget: {}\n\
         Timeline: {}\n\
         \n\
         The summary must be clear, professional and focused on business value.",
        scalar_or(brief, BUSINESS_GOAL, NOT_SPECIFIED),
        scalar_or(brief, AUDIENCE, NOT_SPECIFIED),
        joined(brief, USE_CASES),
        joined(brief, DATA_SOURCES),
        joined(brief, INTEGRATIONS),
        scalar_or(brief, BUDGET_RANGE, NOT_SPECIFIED),
        scalar_or(brief, TIMELINE, NOT_SPECIFIED),
    )
}

/// Prompt asking for exactly three numbered one-line suggestions.
pub fn suggestions_prompt(brief: &BriefState) -> String {
    format!(
        "Based on the project with goal \"{}\" and budget \"{}\", \
         give exactly 3 high-level suggestions for its development.\n\
         \n\
         Each suggestion must fit on one line and include a descriptive title, \
         a short description of the approach and why it suits this project.\n\
         \n\
         Format the answer as a numbered list (1., 2., 3.) with no other text.",
        scalar_or(brief, BUSINESS_GOAL, "the project"),
        scalar_or(brief, BUDGET_RANGE, NOT_SPECIFIED),
    )
}

/// Normalizes raw model output into suggestion lines.
///
/// Numbered and bulleted lines are kept as-is, other non-empty lines are
/// bulleted, and lines starting with `**` are dropped.
pub fn format_suggestions(raw: &str) -> Vec<String> {
    const KEPT_PREFIXES: [&str; 8] = ["1.", "2.", "3.", "1)", "2)", "3)", "•", "-"];

    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| {
            if KEPT_PREFIXES.iter().any(|p| line.starts_with(p)) {
                Some(line.to_string())
            } else if line.starts_with("**") {
                None
            } else {
                Some(format!("• {}", line))
            }
        })
        .collect()
}
