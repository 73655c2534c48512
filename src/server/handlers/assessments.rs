//! Risk assessment result endpoints.

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
use super::api_types::AssessmentResponse;
use crate::models::AssessmentCreate;

#[utoipa::path(
    post,
    path = "/api/assessments/",
    request_body = AssessmentCreate,
    responses(
        (status = 201, description = "Assessment stored", body = AssessmentResponse),
        (status = 422, description = "Invalid payload", body = ErrorDetail)
    ),
    tag = "Assessments"
)]
pub async fn create_assessment(
    State(state): State<AppState>,
    payload: Result<Json<AssessmentCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<AssessmentResponse>), ApiError> {
    let Json(input) = payload?;
    input.validate()?;

    let assessment = state
        .assessment_repo
        .create(&input)
        .await
        .map_err(|e| ApiError::write_failed("creating assessment", e))?;

    Ok((StatusCode::CREATED, Json(assessment.into())))
}

#[utoipa::path(
    get,
    path = "/api/assessments/{assessment_id}",
    params(("assessment_id" = i32, Path, description = "Assessment ID")),
    responses(
        (status = 200, description = "Assessment", body = AssessmentResponse),
        (status = 404, description = "Assessment not found", body = ErrorDetail)
    ),
    tag = "Assessments"
)]
pub async fn get_assessment(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<AssessmentResponse>, ApiError> {
    let Path(assessment_id) = path?;

    match state.assessment_repo.get(assessment_id).await? {
        Some(assessment) => Ok(Json(assessment.into())),
        None => Err(ApiError::NotFound("Assessment not found")),
    }
}
