//! HTTP DTOs for device endpoints.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DeviceInitRequest {
    #[serde(default)]
    pub device_fingerprint: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeviceInitResponse {
    pub success: bool,
    pub device_token: String,
    pub fingerprint_salt: String,
    pub message: String,
}
