//! HTTP handlers for brief endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::dto::{BriefResponse, BriefSaveRequest, BriefSaveResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{GetBriefQuery, SaveBriefCommand};
use crate::domain::foundation::BriefId;

/// POST /brief/save - Save a project brief
pub async fn save_brief(
    State(state): State<AppState>,
    Json(req): Json<BriefSaveRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let cmd = SaveBriefCommand {
        draft: req.brief.map(Into::into),
        device_token: req.device_token,
        session_id: req.session_id,
    };

    let result = state.save_brief_handler().handle(cmd).await?;

    let response = BriefSaveResponse {
        success: true,
        brief_id: result.brief.id.to_string(),
        message: "Brief saved successfully".to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /brief/:id - Get a saved brief
pub async fn get_brief(
    State(state): State<AppState>,
    Path(brief_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let brief_id = brief_id
        .parse::<BriefId>()
        .map_err(|_| ApiError::bad_request("Invalid brief ID"))?;

    let brief = state
        .get_brief_handler()
        .handle(GetBriefQuery { brief_id })
        .await?;

    Ok(Json(BriefResponse::from(brief)))
}
