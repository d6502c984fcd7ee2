//! Shared state for every HTTP route.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::storage::{
    InMemoryBriefRepository, InMemoryLeadRepository, InMemorySessionStore,
};
use crate::application::handlers::{
    CreateLeadHandler, GetBriefHandler, GetChatSessionHandler, GetLeadHandler,
    InitDeviceHandler, ProcessChatMessageHandler, SaveBriefHandler,
};
use crate::domain::conversation::{ConversationEngine, SummaryGenerator};
use crate::ports::{BriefRepository, LanguageModelClient, LeadRepository, SessionStore};

/// Ports plus the one handler that must be shared across requests.
#[derive(Clone)]
pub struct AppState {
    pub session_store: Arc<dyn SessionStore>,
    pub brief_repository: Arc<dyn BriefRepository>,
    pub lead_repository: Arc<dyn LeadRepository>,
    language_model: Arc<dyn LanguageModelClient>,
    chat_handler: Arc<ProcessChatMessageHandler>,
    max_history: usize,
}

impl AppState {
    pub fn new(
        session_store: Arc<dyn SessionStore>,
        brief_repository: Arc<dyn BriefRepository>,
        lead_repository: Arc<dyn LeadRepository>,
        language_model: Arc<dyn LanguageModelClient>,
        max_history: usize,
    ) -> Self {
        let chat_handler = chat_handler(
            session_store.clone(),
            SummaryGenerator::new(language_model.clone()),
        );
        Self {
            session_store,
            brief_repository,
            lead_repository,
            language_model,
            chat_handler,
            max_history,
        }
    }

    /// Caps the closing summary so the turn completes inside the request timeout.
    pub fn with_summary_deadline(mut self, deadline: Duration) -> Self {
        self.chat_handler = chat_handler(
            self.session_store.clone(),
            SummaryGenerator::new(self.language_model.clone()).with_deadline(deadline),
        );
        self
    }

    /// State backed by the in-memory adapters.
    pub fn in_memory(language_model: Arc<dyn LanguageModelClient>, max_history: usize) -> Self {
        Self::new(
            Arc::new(InMemorySessionStore::new()),
            Arc::new(InMemoryBriefRepository::new()),
            Arc::new(InMemoryLeadRepository::new()),
            language_model,
            max_history,
        )
    }

    /// Turns for one session are serialized by this handler, so it is shared.
    pub fn process_chat_message_handler(&self) -> Arc<ProcessChatMessageHandler> {
        self.chat_handler.clone()
    }

    pub fn get_chat_session_handler(&self) -> GetChatSessionHandler {
        GetChatSessionHandler::new(self.session_store.clone(), self.max_history)
    }

    pub fn save_brief_handler(&self) -> SaveBriefHandler {
        SaveBriefHandler::new(self.brief_repository.clone(), self.session_store.clone())
    }

    pub fn get_brief_handler(&self) -> GetBriefHandler {
        GetBriefHandler::new(self.brief_repository.clone())
    }

    pub fn create_lead_handler(&self) -> CreateLeadHandler {
        CreateLeadHandler::new(self.lead_repository.clone(), self.brief_repository.clone())
    }

    pub fn get_lead_handler(&self) -> GetLeadHandler {
        GetLeadHandler::new(self.lead_repository.clone())
    }

    pub fn init_device_handler(&self) -> InitDeviceHandler {
        InitDeviceHandler::new()
    }
}

fn chat_handler(
    store: Arc<dyn SessionStore>,
    summarizer: SummaryGenerator,
) -> Arc<ProcessChatMessageHandler> {
    let engine = Arc::new(ConversationEngine::new(summarizer));
    Arc::new(ProcessChatMessageHandler::new(store, engine))
}
