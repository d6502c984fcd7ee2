//! HTTP handlers for device endpoints.

use axum::{extract::State, response::IntoResponse, Json};

use super::dto::{DeviceInitRequest, DeviceInitResponse};
use crate::adapters::http::state::AppState;
use crate::application::handlers::InitDeviceCommand;

/// POST /auth/device/init - Issue a device token and fingerprint salt
pub async fn init_device(
    State(state): State<AppState>,
    Json(req): Json<DeviceInitRequest>,
) -> impl IntoResponse {
    let result = state.init_device_handler().handle(InitDeviceCommand {
        device_fingerprint: req.device_fingerprint,
    });

    Json(DeviceInitResponse {
        success: true,
        device_token: result.device_token.to_string(),
        fingerprint_salt: result.fingerprint_salt,
        message: "Device initialized".to_string(),
    })
}
