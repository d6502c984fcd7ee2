//! HTTP handlers for chat endpoints.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

use super::dto::{ChatRequest, ChatResponse, ChatSessionResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetChatSessionQuery, ProcessChatMessageCommand};
use crate::domain::foundation::SessionId;

/// POST /chat/stream - Process one interview turn
pub async fn chat_stream(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = ProcessChatMessageCommand {
        message: req.message,
        session_id: req.session_id,
        device_token: req.device_token,
    };

    let result = state.process_chat_message_handler().handle(cmd).await?;

    Ok(Json(ChatResponse::from(result)))
}

/// GET /chat/sessions/:id - Session state and recent transcript
pub async fn get_chat_session(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let session_id =
        SessionId::new(session_id).map_err(|_| ApiError::bad_request("Invalid session ID"))?;

    let view = state
        .get_chat_session_handler()
        .handle(GetChatSessionQuery { session_id })
        .await?;

    Ok(Json(ChatSessionResponse::from(view)))
}
