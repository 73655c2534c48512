//! Resource tag endpoints.

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
use super::api_types::TagResponse;
use crate::models::TagCreate;

#[utoipa::path(
    get,
    path = "/api/resources/{resource_id}/tags",
    params(("resource_id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Tags, alphabetical", body = Vec<TagResponse>),
        (status = 404, description = "Resource not found", body = ErrorDetail)
    ),
    tag = "Tags"
)]
pub async fn list_tags(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<Vec<TagResponse>>, ApiError> {
    let Path(resource_id) = path?;

    if !state.resource_repo.exists_active(resource_id).await? {
        return Err(ApiError::NotFound("Resource not found"));
    }

    let tags = state.tag_repo.list_for_resource(resource_id).await?;
    Ok(Json(tags.into_iter().map(Into::into).collect()))
}

/// Tag a resource. Tags are trimmed and lowercased.
#[utoipa::path(
    post,
    path = "/api/resources/{resource_id}/tags",
    params(("resource_id" = i32, Path, description = "Resource ID")),
    request_body = TagCreate,
    responses(
        (status = 201, description = "Tag attached", body = TagResponse),
        (status = 404, description = "Resource not found", body = ErrorDetail),
        (status = 422, description = "Invalid tag", body = ErrorDetail)
    ),
    tag = "Tags"
)]
pub async fn add_tag(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<TagCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<TagResponse>), ApiError> {
    let Path(resource_id) = path?;
    let Json(input) = payload?;
    let tag = input.normalized()?;

    if !state.resource_repo.exists_active(resource_id).await? {
        return Err(ApiError::NotFound("Resource not found"));
    }

    let tag = state
        .tag_repo
        .add(resource_id, &tag)
        .await
        .map_err(|e| ApiError::write_failed("adding tag", e))?;

    Ok((StatusCode::CREATED, Json(tag.into())))
}
