//! Community report endpoints.

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
use super::api_types::CommunityReportResponse;
use crate::models::CommunityReportCreate;

/// File a report about an active resource.
#[utoipa::path(
    post,
    path = "/api/reports/",
    request_body = CommunityReportCreate,
    responses(
        (status = 201, description = "Report filed", body = CommunityReportResponse),
        (status = 404, description = "Resource not found", body = ErrorDetail),
        (status = 422, description = "Invalid payload", body = ErrorDetail)
    ),
    tag = "Reports"
)]
pub async fn create_report(
    State(state): State<AppState>,
    payload: Result<Json<CommunityReportCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<CommunityReportResponse>), ApiError> {
    let Json(input) = payload?;
    let report_type = input.validate()?;

    if !state.resource_repo.exists_active(input.resource_id).await? {
        return Err(ApiError::NotFound("Resource not found"));
    }

    let report = state
        .report_repo
        .create(input.resource_id, report_type, input.details.as_deref())
        .await
        .map_err(|e| ApiError::write_failed("creating report", e))?;

    Ok((StatusCode::CREATED, Json(report.into())))
}

#[utoipa::path(
    get,
    path = "/api/reports/{report_id}",
    params(("report_id" = i32, Path, description = "Report ID")),
    responses(
        (status = 200, description = "Report", body = CommunityReportResponse),
        (status = 404, description = "Report not found", body = ErrorDetail)
    ),
    tag = "Reports"
)]
pub async fn get_report(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<CommunityReportResponse>, ApiError> {
    let Path(report_id) = path?;

    match state.report_repo.get(report_id).await? {
        Some(report) => Ok(Json(report.into())),
        None => Err(ApiError::NotFound("Report not found")),
    }
}

/// Reports for an active resource, newest first.
#[utoipa::path(
    get,
    path = "/api/resources/{resource_id}/reports",
    params(("resource_id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Reports", body = Vec<CommunityReportResponse>),
        (status = 404, description = "Resource not found", body = ErrorDetail)
    ),
    tag = "Reports"
)]
pub async fn list_resource_reports(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<CommunityReportResponse>>, ApiError> {
    let Path(resource_id) = path?;

    if !state.resource_repo.exists_active(resource_id).await? {
        return Err(ApiError::NotFound("Resource not found"));
    }

    let reports = state.report_repo.list_for_resource(resource_id).await?;
    Ok(Json(reports.into_iter().map(Into::into).collect()))
}
