//! Route configuration for lead endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_lead, get_lead};
use crate::adapters::http::state::AppState;

/// Creates the lead router.
///
/// Routes:
/// - `POST /leads/create` - Create a lead, optionally tied to a brief
/// - `GET /leads/:id` - Get a lead
pub fn lead_router() -> Router<AppState> {
    Router::new()
        .route("/leads/create", post(create_lead))
        .route("/leads/:id", get(get_lead))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::MockLanguageModel;
    use crate::adapters::http::lead::dto::{LeadCreateResponse, LeadResponse};
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app() -> Router {
        lead_router().with_state(AppState::in_memory(Arc::new(MockLanguageModel::new()), 50))
    }

    fn create_request(body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/leads/create")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn create_then_fetch() {
        let app = app();
        let created = app
            .clone()
            .oneshot(create_request(serde_json::json!({
                "contact_info": {"email": "ana@example.com"},
                "company": "Acme"
            })))
            .await
            .unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);
        let bytes = axum::body::to_bytes(created.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: LeadCreateResponse = serde_json::from_slice(&bytes).unwrap();

        let fetched = app
            .oneshot(
                Request::builder()
                    .uri(format!("/leads/{}", created.lead_id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(fetched.status(), StatusCode::OK);
        let bytes = axum::body::to_bytes(fetched.into_body(), usize::MAX)
            .await
            .unwrap();
        let lead: LeadResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(lead.company.as_deref(), Some("Acme"));
        assert_eq!(lead.status, "new");
    }

    #[tokio::test]
    async fn unknown_brief_is_404() {
        let response = app()
            .oneshot(create_request(serde_json::json!({
                "brief_id": uuid::Uuid::new_v4().to_string()
            })))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_brief_id_is_400() {
        let response = app()
            .oneshot(create_request(serde_json::json!({"brief_id": "42"})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn malformed_lead_id_is_400() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/leads/abc")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
