//! Verification log endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};

use super::super::error::{ApiError, ErrorDetail};
use super::super::AppState;
use super::api_types::VerificationResponse;
use crate::models::VerificationCreate;

/// Record a verification and stamp the resource.
#[utoipa::path(
    post,
    path = "/api/resources/{resource_id}/verifications",
    params(("resource_id" = i32, Path, description = "Resource ID")),
    request_body = VerificationCreate,
    responses(
        (status = 201, description = "Verification recorded", body = VerificationResponse),
        (status = 404, description = "Resource not found", body = ErrorDetail),
        (status = 422, description = "Invalid payload", body = ErrorDetail)
    ),
    tag = "Verifications"
)]
pub async fn create_verification(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<VerificationCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<VerificationResponse>), ApiError> {
    let Path(resource_id) = path?;
    let Json(input) = payload?;
    input.validate()?;

    match state.verification_repo.record(resource_id, &input).await {
        Ok(Some(log)) => Ok((StatusCode::CREATED, Json(log.into()))),
        Ok(None) => Err(ApiError::NotFound("Resource not found")),
        Err(e) => Err(ApiError::write_failed("recording verification", e)),
    }
}

#[utoipa::path(
    get,
    path = "/api/resources/{resource_id}/verifications",
    params(("resource_id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Verification history, newest first", body = Vec<VerificationResponse>),
        (status = 404, description = "Resource not found", body = ErrorDetail)
    ),
    tag = "Verifications"
)]
pub async fn list_verifications(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<VerificationResponse>>, ApiError> {
    let Path(resource_id) = path?;

    if !state.resource_repo.exists_active(resource_id).await? {
        return Err(ApiError::NotFound("Resource not found"));
    }

    let logs = state.verification_repo.list_for_resource(resource_id).await?;
    Ok(Json(logs.into_iter().map(Into::into).collect()))
}
