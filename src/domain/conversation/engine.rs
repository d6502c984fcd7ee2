//! Interview state machine.
//!
//! `advance` is a pure transition over owned state: it takes the current
//! turn state, the brief and the user's message, and returns the next turn
//! state, the updated brief and the reply. Every (phase, input) pair has a
//! transition, so a turn never fails.

use super::phase::ConversationPhase;
use super::state::ConversationTurnState;
use super::summary::{SummaryGenerator, SummaryResult};
use crate::domain::brief::{parse_answer, BriefState, QuestionBank};

const GREETING: &str = "Hi! I'm your virtual Business Analyst. 👋\n\n\
    I'll ask you a few questions (5–7) to understand your project and put together \
    a complete brief. Then I'll share some high-level suggestions and you can \
    schedule a call with the team.";

const ALREADY_DONE: &str = "We have already finished gathering the information. \
    Would you like to restart the conversation or schedule a call?";

const RECOVERY: &str =
    "It looks like something went wrong with the conversation flow. Let's start over.";

/// Case-insensitive substrings that reopen a finished interview.
const RESTART_TOKENS: [&str; 3] = ["restart", "start over", "reset"];

/// Result of one conversation turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    pub state: ConversationTurnState,
    pub brief: BriefState,
    pub message: String,
    /// Present only on the turn that completes the interview.
    pub summary: Option<SummaryResult>,
}

impl TurnOutcome {
    fn reply(state: ConversationTurnState, brief: BriefState, message: impl Into<String>) -> Self {
        Self {
            state,
            brief,
            message: message.into(),
            summary: None,
        }
    }
}

/// Drives the interview one message at a time.
#[derive(Debug, Clone)]
pub struct ConversationEngine {
    bank: QuestionBank,
    summarizer: SummaryGenerator,
}

impl ConversationEngine {
    pub fn new(summarizer: SummaryGenerator) -> Self {
        Self {
            bank: QuestionBank::standard(),
            summarizer,
        }
    }

    pub fn question_bank(&self) -> &QuestionBank {
        &self.bank
    }

    /// Applies one user message to the interview.
    pub async fn advance(
        &self,
        state: ConversationTurnState,
        brief: BriefState,
        message: &str,
    ) -> TurnOutcome {
        match (&state.phase, state.pending_key()) {
            (ConversationPhase::Intro, _) | (ConversationPhase::Asking, None) => self.start(brief),
            (ConversationPhase::Asking, Some(key)) => {
                let key = key.to_string();
                self.record_answer(brief, &key, message).await
            }
            (ConversationPhase::Done, _) => {
                if is_restart_request(message) {
                    tracing::info!("Restart requested, reopening interview");
                    self.start(brief)
                } else {
                    TurnOutcome::reply(ConversationTurnState::done(), brief, ALREADY_DONE)
                }
            }
            (ConversationPhase::Unrecognized(raw), _) => {
                tracing::warn!(phase = %raw, "Unrecognized conversation phase, resetting");
                TurnOutcome::reply(ConversationTurnState::initial(), brief, RECOVERY)
            }
        }
    }

    /// Greets and asks the first question. Existing answers are kept.
    fn start(&self, brief: BriefState) -> TurnOutcome {
        let first = self.bank.first();
        TurnOutcome::reply(
            ConversationTurnState::asking(first.key),
            brief,
            format!("{}\n\n{}", GREETING, first.prompt),
        )
    }

    async fn record_answer(&self, mut brief: BriefState, key: &str, message: &str) -> TurnOutcome {
        match self.bank.get(key) {
            Some(question) => {
                let value = parse_answer(question.kind, message);
                tracing::debug!(question = key, answered = value.is_answered(), "Answer recorded");
                brief.set(key, value);
            }
            None => {
                tracing::warn!(pending_key = key, "Pending key not in catalogue, answer discarded");
            }
        }

        match self.bank.next_unanswered(&brief) {
            Some(next) => {
                TurnOutcome::reply(ConversationTurnState::asking(next.key), brief, next.prompt)
            }
            None => {
                let (message, summary) = self.summarizer.generate(&brief).await;
                TurnOutcome {
                    state: ConversationTurnState::done(),
                    brief,
                    message,
                    summary: Some(summary),
                }
            }
        }
    }
}

fn is_restart_request(message: &str) -> bool {
    let lowered = message.to_lowercase();
    RESTART_TOKENS.iter().any(|token| lowered.contains(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockLanguageModel;
    use crate::domain::brief::{
        AnswerValue, AUDIENCE, BUDGET_RANGE, BUSINESS_GOAL, DATA_SOURCES, INTEGRATIONS, TIMELINE,
        USE_CASES,
    };
    use crate::domain::conversation::SUGGESTION_COUNT;
    use crate::ports::ProviderError;
    use proptest::prelude::*;
    use std::sync::Arc;

    fn engine_with(model: MockLanguageModel) -> ConversationEngine {
        ConversationEngine::new(SummaryGenerator::new(Arc::new(model)))
    }

    fn engine() -> ConversationEngine {
        engine_with(MockLanguageModel::new().with_response("Summary").with_response(
            "1. Basic\n2. Advanced\n3. Complete",
        ))
    }

    fn all_answered() -> BriefState {
        let mut brief = BriefState::new();
        for question in QuestionBank::standard().iter() {
            brief.set(question.key, AnswerValue::text("x"));
        }
        brief
    }

    mod intro {
        use super::*;

        #[tokio::test]
        async fn greets_and_asks_first_question() {
            let out = engine()
                .advance(ConversationTurnState::initial(), BriefState::new(), "hi")
                .await;

            assert_eq!(out.state, ConversationTurnState::asking(BUSINESS_GOAL));
            assert!(out.message.starts_with(GREETING));
            assert!(out.message.ends_with("What is the main goal of your project?"));
            assert!(out.brief.is_empty());
            assert!(out.summary.is_none());
        }

        #[tokio::test]
        async fn asking_without_pending_key_behaves_as_intro() {
            let state = ConversationTurnState {
                phase: ConversationPhase::Asking,
                pending_key: None,
            };
            let out = engine().advance(state, BriefState::new(), "hello").await;

            assert_eq!(out.state, ConversationTurnState::asking(BUSINESS_GOAL));
            assert!(out.brief.is_empty());
        }
    }

    mod asking {
        use super::*;

        #[tokio::test]
        async fn records_answer_and_asks_next_question() {
            let out = engine()
                .advance(
                    ConversationTurnState::asking(BUSINESS_GOAL),
                    BriefState::new(),
                    "  Sell more widgets ",
                )
                .await;

            assert_eq!(out.brief.scalar(BUSINESS_GOAL), Some("Sell more widgets"));
            assert_eq!(out.state, ConversationTurnState::asking(AUDIENCE));
            assert_eq!(out.message, "Who is your target audience?");
        }

        #[tokio::test]
        async fn list_question_is_split() {
            let out = engine()
                .advance(
                    ConversationTurnState::asking(USE_CASES),
                    BriefState::new(),
                    "catalog, cart, payments",
                )
                .await;

            assert_eq!(out.brief.list(USE_CASES), vec!["catalog", "cart", "payments"]);
        }

        #[tokio::test]
        async fn blank_answer_reasks_same_question() {
            let out = engine()
                .advance(ConversationTurnState::asking(BUSINESS_GOAL), BriefState::new(), "   ")
                .await;

            assert_eq!(out.state, ConversationTurnState::asking(BUSINESS_GOAL));
        }

        #[tokio::test]
        async fn skips_prepopulated_questions() {
            let mut brief = BriefState::new();
            brief.set(AUDIENCE, AnswerValue::text("SMBs"));
            brief.set(USE_CASES, AnswerValue::list(["catalog"]));

            let out = engine()
                .advance(ConversationTurnState::asking(BUSINESS_GOAL), brief, "Grow")
                .await;

            assert_eq!(out.state, ConversationTurnState::asking(DATA_SOURCES));
        }

        #[tokio::test]
        async fn unknown_pending_key_discards_answer_and_continues() {
            let out = engine()
                .advance(
                    ConversationTurnState::asking("favourite_colour"),
                    BriefState::new(),
                    "blue",
                )
                .await;

            assert!(out.brief.get("favourite_colour").is_none());
            assert_eq!(out.state, ConversationTurnState::asking(BUSINESS_GOAL));
        }

        #[tokio::test]
        async fn last_answer_completes_with_three_suggestions() {
            let mut brief = all_answered();
            brief.set(TIMELINE, AnswerValue::text(""));

            let out = engine()
                .advance(ConversationTurnState::asking(TIMELINE), brief, "6 months")
                .await;

            assert_eq!(out.state, ConversationTurnState::done());
            let summary = out.summary.unwrap();
            assert_eq!(summary.suggestions.len(), SUGGESTION_COUNT);
            assert!(out.message.contains(&summary.summary));
        }

        #[tokio::test]
        async fn completes_with_fallback_when_model_is_down() {
            let mut brief = all_answered();
            brief.set(BUDGET_RANGE, AnswerValue::text(""));
            let engine = engine_with(MockLanguageModel::failing(ProviderError::unavailable(
                "503",
            )));

            let out = engine
                .advance(ConversationTurnState::asking(BUDGET_RANGE), brief, "10-30k")
                .await;

            assert_eq!(out.state, ConversationTurnState::done());
            assert!(out.summary.unwrap().is_fallback);
        }
    }

    mod done {
        use super::*;

        #[tokio::test]
        async fn restart_keeps_answers_and_asks_first_question() {
            let brief = all_answered();
            let out = engine()
                .advance(ConversationTurnState::done(), brief.clone(), "Please RESTART")
                .await;

            assert_eq!(out.state, ConversationTurnState::asking(BUSINESS_GOAL));
            assert_eq!(out.brief, brief);
        }

        #[tokio::test]
        async fn start_over_is_a_restart() {
            let out = engine()
                .advance(ConversationTurnState::done(), all_answered(), "can we start over?")
                .await;
            assert_eq!(out.state.phase, ConversationPhase::Asking);
        }

        #[tokio::test]
        async fn other_messages_stay_done() {
            let out = engine()
                .advance(ConversationTurnState::done(), all_answered(), "thanks!")
                .await;

            assert_eq!(out.state, ConversationTurnState::done());
            assert_eq!(out.message, ALREADY_DONE);
            assert!(out.summary.is_none());
        }
    }

    mod recovery {
        use super::*;

        #[tokio::test]
        async fn unrecognized_phase_resets_to_intro() {
            let state = ConversationTurnState {
                phase: ConversationPhase::from("archived"),
                pending_key: Some(AUDIENCE.to_string()),
            };
            let out = engine().advance(state, all_answered(), "hello").await;

            assert_eq!(out.state, ConversationTurnState::initial());
            assert_eq!(out.message, RECOVERY);
            assert_eq!(out.brief, all_answered());
        }
    }

    #[test]
    fn restart_detection_is_case_insensitive() {
        assert!(is_restart_request("ReSeT please"));
        assert!(!is_restart_request("schedule a call"));
    }

    const KEYS: [&str; 7] = [
        BUSINESS_GOAL,
        AUDIENCE,
        USE_CASES,
        DATA_SOURCES,
        INTEGRATIONS,
        BUDGET_RANGE,
        TIMELINE,
    ];

    proptest! {
        #[test]
        fn next_pending_key_is_first_unanswered(
            answered in proptest::collection::vec(any::<bool>(), 7),
            pending in 0usize..7,
            reply in "[a-z]{1,12}",
        ) {
            let mut brief = BriefState::new();
            for (key, is_answered) in KEYS.iter().zip(&answered) {
                if *is_answered {
                    brief.set(*key, AnswerValue::text("x"));
                }
            }
            // The pending question is by definition still open.
            brief.set(KEYS[pending], AnswerValue::text(""));

            let mut expected_brief = brief.clone();
            expected_brief.set(
                KEYS[pending],
                parse_answer(QuestionBank::standard().get(KEYS[pending]).unwrap().kind, &reply),
            );
            let expected = QuestionBank::standard().next_unanswered(&expected_brief);

            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let out = runtime.block_on(
                engine().advance(ConversationTurnState::asking(KEYS[pending]), brief, &reply),
            );

            match expected {
                Some(question) => {
                    prop_assert_eq!(out.state, ConversationTurnState::asking(question.key));
                }
                None => {
                    prop_assert_eq!(out.state, ConversationTurnState::done());
                    prop_assert_eq!(out.summary.unwrap().suggestions.len(), SUGGESTION_COUNT);
                }
            }
        }
    }
}
