//! Route configuration for device endpoints.

use axum::routing::post;
use axum::Router;

use super::handlers::init_device;
use crate::adapters::http::state::AppState;

/// Creates the device router.
///
/// Routes:
/// - `POST /auth/device/init` - Issue an anonymous device token
pub fn device_router() -> Router<AppState> {
    Router::new().route("/auth/device/init", post(init_device))
}
