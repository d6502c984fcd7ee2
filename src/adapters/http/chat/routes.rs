//! Route configuration for chat endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{chat_stream, get_chat_session};
use crate::adapters::http::state::AppState;

/// Creates the chat router.
///
/// Routes:
/// - `POST /chat/stream` - Send a message, receive the next question or summary
/// - `GET /chat/sessions/:id` - Session state and transcript
pub fn chat_router() -> Router<AppState> {
    Router::new()
        .route("/chat/stream", post(chat_stream))
        .route("/chat/sessions/:id", get(get_chat_session))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockLanguageModel;
    use crate::adapters::http::chat::dto::{ChatResponse, ChatSessionResponse};
    use crate::adapters::http::error::ErrorResponse;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde::de::DeserializeOwned;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        chat_router().with_state(AppState::in_memory(Arc::new(MockLanguageModel::new()), 50))
    }

    fn post_json(uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn read_json<T: DeserializeOwned>(response: axum::response::Response) -> T {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn first_message_returns_first_question() {
        let response = app()
            .oneshot(post_json("/chat/stream", serde_json::json!({"message": "hi"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body: ChatResponse = read_json(response).await;
        assert_eq!(body.step, "asking");
        assert_eq!(body.current_key.as_deref(), Some("business_goal"));
        assert!(body.session_id.starts_with("session_"));
    }

    #[tokio::test]
    async fn session_view_follows_turns() {
        let app = app();
        let first = app
            .clone()
            .oneshot(post_json("/chat/stream", serde_json::json!({"message": "hi"})))
            .await
            .unwrap();
        let first: ChatResponse = read_json(first).await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/chat/sessions/{}", first.session_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let view: ChatSessionResponse = read_json(response).await;
        assert_eq!(view.current_step, "asking");
        assert_eq!(view.current_question_key.as_deref(), Some("business_goal"));
        assert_eq!(view.messages.len(), 2);
        assert_eq!(view.messages[0].role, "user");
        assert_eq!(view.messages[1].role, "bot");
    }

    #[tokio::test]
    async fn unknown_session_is_404() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/chat/sessions/session_missing")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: ErrorResponse = read_json(response).await;
        assert_eq!(body.code, "SESSION_NOT_FOUND");
    }

    #[tokio::test]
    async fn missing_message_is_rejected() {
        let response = app()
            .oneshot(post_json("/chat/stream", serde_json::json!({"session_id": "x"})))
            .await
            .unwrap();

        assert!(response.status().is_client_error());
    }
}
