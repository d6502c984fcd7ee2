//! HTTP handlers for lead endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use super::dto::{LeadCreateRequest, LeadCreateResponse, LeadResponse};
use crate::adapters::http::error::ApiError;
use crate::adapters::http::state::AppState;
use crate::application::handlers::{CreateLeadCommand, GetLeadQuery};
use crate::domain::foundation::{BriefId, LeadId};

/// POST /leads/create - Record a prospective client
pub async fn create_lead(
    State(state): State<AppState>,
    Json(req): Json<LeadCreateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let brief_id = req
        .brief_id
        .filter(|id| !id.trim().is_empty())
        .map(|id| id.trim().parse::<BriefId>())
        .transpose()
        .map_err(|_| ApiError::bad_request("Invalid brief ID"))?;

    let cmd = CreateLeadCommand {
        brief_id,
        contact_info: req.contact_info,
        name: req.name,
        email: req.email,
        phone: req.phone,
        company: req.company,
        notes: req.notes,
    };

    let result = state.create_lead_handler().handle(cmd).await?;

    let response = LeadCreateResponse {
        success: true,
        lead_id: result.lead.id.to_string(),
        message: "Lead created successfully. We will contact you soon.".to_string(),
    };
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /leads/:id - Get a lead
pub async fn get_lead(
    State(state): State<AppState>,
    Path(lead_id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let lead_id = lead_id
        .parse::<LeadId>()
        .map_err(|_| ApiError::bad_request("Invalid lead ID"))?;

    let lead = state
        .get_lead_handler()
        .handle(GetLeadQuery { lead_id })
        .await?;

    Ok(Json(LeadResponse::from(lead)))
}
