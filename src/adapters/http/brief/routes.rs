//! Route configuration for brief endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{get_brief, save_brief};
use crate::adapters::http::state::AppState;

/// Creates the brief router.
///
/// Routes:
/// - `POST /brief/save` - Save a brief from fields or from a session
/// - `GET /brief/:id` - Get a saved brief
pub fn brief_router() -> Router<AppState> {
    Router::new()
        .route("/brief/save", post(save_brief))
        .route("/brief/:id", get(get_brief))
}
