//! Error responses shared by every HTTP module.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Standard error body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new("BAD_REQUEST", message)
    }
}

/// API error type that converts domain errors to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    BadRequest(String),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, ErrorResponse::bad_request(message))
            }
            ApiError::Domain(err) => match err.code {
                ErrorCode::ValidationFailed => (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new(err.code.to_string(), err.message),
                ),
                code if code.is_not_found() => (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new(code.to_string(), err.message),
                ),
                code => {
                    // Storage details stay in the log.
                    tracing::error!(code = %code, error = %err.message, "Request failed");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ErrorResponse::new(code.to_string(), "Internal server error"),
                    )
                }
            },
        };
        (status, Json(body)).into_response()
    }
}
