//! Resource directory endpoints.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::super::error::{ApiError, ErrorDetail};
use super::super::AppState;
use super::api_types::{ResourceListResponse, ResourceResponse};
use crate::models::{
    check_latitude, check_longitude, check_range_f64, ResourceCategory, ResourceCreate,
    ResourceUpdate, ValidationError,
};
use crate::repository::{
    NearPoint, ResourceFilter, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, MAX_RADIUS_MILES,
};

/// Query parameters for listing resources.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ResourceQuery {
    /// Resource category (food, shelter, propane, ...)
    pub resource_type: Option<String>,
    /// Case-insensitive substring of the county name
    pub county: Option<String>,
    /// Search center latitude (-90..=90)
    pub latitude: Option<f64>,
    /// Search center longitude (-180..=180)
    pub longitude: Option<f64>,
    /// Search radius in miles (0 < r <= 100); needs latitude and longitude
    pub radius_miles: Option<f64>,
    /// Only resources open (or closed) in winter
    pub seasonal_winter: Option<bool>,
    /// Page size (1..=100, default 50)
    pub limit: Option<i64>,
    /// Rows to skip (default 0)
    pub offset: Option<i64>,
}

impl ResourceQuery {
    /// Validate and convert into a repository filter.
    ///
    /// Proximity filtering applies only when latitude, longitude and radius
    /// are all present; any subset is ignored.
    pub fn into_filter(self) -> Result<ResourceFilter, ValidationError> {
        let resource_type = match self.resource_type.as_deref().filter(|s| !s.is_empty()) {
            Some(s) => Some(ResourceCategory::from_str(s).ok_or_else(|| {
                ValidationError::new("resource_type", format!("unknown resource type '{}'", s))
            })?),
            None => None,
        };

        check_latitude("latitude", self.latitude)?;
        check_longitude("longitude", self.longitude)?;
        if let Some(radius) = self.radius_miles {
            check_range_f64("radius_miles", radius, 0.0, MAX_RADIUS_MILES)?;
            if radius == 0.0 {
                return Err(ValidationError::new(
                    "radius_miles",
                    "must be greater than 0",
                ));
            }
        }

        let limit = self.limit.unwrap_or(DEFAULT_PAGE_SIZE);
        if !(1..=MAX_PAGE_SIZE).contains(&limit) {
            return Err(ValidationError::new(
                "limit",
                format!("must be between 1 and {}", MAX_PAGE_SIZE),
            ));
        }
        let offset = self.offset.unwrap_or(0);
        if offset < 0 {
            return Err(ValidationError::new(
                "offset",
                "must be greater than or equal to 0",
            ));
        }

        let near = match (self.latitude, self.longitude, self.radius_miles) {
            (Some(latitude), Some(longitude), Some(radius_miles)) => Some(NearPoint {
                latitude,
                longitude,
                radius_miles,
            }),
            _ => None,
        };

        Ok(ResourceFilter {
            resource_type,
            county: self.county.filter(|c| !c.is_empty()),
            near,
            seasonal_winter: self.seasonal_winter,
            limit,
            offset,
        })
    }
}

/// Create a resource.
#[utoipa::path(
    post,
    path = "/api/resources/",
    request_body = ResourceCreate,
    responses(
        (status = 201, description = "Created resource", body = ResourceResponse),
        (status = 400, description = "Database rejected the row", body = ErrorDetail),
        (status = 422, description = "Invalid payload", body = ErrorDetail)
    ),
    tag = "Resources"
)]
pub async fn create_resource(
    State(state): State<AppState>,
    payload: Result<Json<ResourceCreate>, JsonRejection>,
) -> Result<(StatusCode, Json<ResourceResponse>), ApiError> {
    let Json(input) = payload?;
    input.validate()?;

    let resource = state
        .resource_repo
        .create(&input)
        .await
        .map_err(|e| ApiError::write_failed("creating resource", e))?;

    Ok((StatusCode::CREATED, Json(resource.into())))
}

/// List active resources with optional filters and proximity search.
#[utoipa::path(
    get,
    path = "/api/resources/",
    params(ResourceQuery),
    responses(
        (status = 200, description = "Page of resources", body = ResourceListResponse),
        (status = 422, description = "Invalid query parameter", body = ErrorDetail)
    ),
    tag = "Resources"
)]
pub async fn list_resources(
    State(state): State<AppState>,
    query: Result<Query<ResourceQuery>, QueryRejection>,
) -> Result<Json<ResourceListResponse>, ApiError> {
    let Query(params) = query?;
    let filter = params.into_filter()?;

    let page = state.resource_repo.list(&filter).await?;

    Ok(Json(ResourceListResponse {
        total: page.total,
        items: page.items.into_iter().map(ResourceResponse::from).collect(),
        limit: filter.limit,
        offset: filter.offset,
    }))
}

/// Get one active resource.
#[utoipa::path(
    get,
    path = "/api/resources/{resource_id}",
    params(("resource_id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 200, description = "Resource", body = ResourceResponse),
        (status = 404, description = "Resource not found", body = ErrorDetail)
    ),
    tag = "Resources"
)]
pub async fn get_resource(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<Json<ResourceResponse>, ApiError> {
    let Path(resource_id) = path?;

    match state.resource_repo.get_active(resource_id).await? {
        Some(resource) => Ok(Json(resource.into())),
        None => Err(ApiError::NotFound("Resource not found")),
    }
}

/// Partially update an active resource.
#[utoipa::path(
    put,
    path = "/api/resources/{resource_id}",
    params(("resource_id" = i32, Path, description = "Resource ID")),
    request_body = ResourceUpdate,
    responses(
        (status = 200, description = "Updated resource", body = ResourceResponse),
        (status = 400, description = "Database rejected the update", body = ErrorDetail),
        (status = 404, description = "Resource not found", body = ErrorDetail),
        (status = 422, description = "Invalid payload", body = ErrorDetail)
    ),
    tag = "Resources"
)]
pub async fn update_resource(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
    payload: Result<Json<ResourceUpdate>, JsonRejection>,
) -> Result<Json<ResourceResponse>, ApiError> {
    let Path(resource_id) = path?;
    let Json(update) = payload?;
    update.validate()?;

    match state.resource_repo.update(resource_id, &update).await {
        Ok(Some(resource)) => Ok(Json(resource.into())),
        Ok(None) => Err(ApiError::NotFound("Resource not found")),
        Err(e) => Err(ApiError::write_failed("updating resource", e)),
    }
}

/// Soft-delete a resource.
#[utoipa::path(
    delete,
    path = "/api/resources/{resource_id}",
    params(("resource_id" = i32, Path, description = "Resource ID")),
    responses(
        (status = 204, description = "Resource deactivated"),
        (status = 404, description = "Resource not found", body = ErrorDetail)
    ),
    tag = "Resources"
)]
pub async fn delete_resource(
    State(state): State<AppState>,
    path: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(resource_id) = path?;

    match state.resource_repo.deactivate(resource_id).await {
        Ok(true) => Ok(StatusCode::NO_CONTENT),
        Ok(false) => Err(ApiError::NotFound("Resource not found")),
        Err(e) => Err(ApiError::write_failed("deleting resource", e)),
    }
}

/// Counties that have active resources.
#[utoipa::path(
    get,
    path = "/api/resources/counties/list",
    responses((status = 200, description = "County names, ascending", body = Vec<String>)),
    tag = "Resources"
)]
pub async fn list_counties(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.resource_repo.list_counties().await?))
}

/// Resource types that have active resources.
#[utoipa::path(
    get,
    path = "/api/resources/types/list",
    responses((status = 200, description = "Resource type names", body = Vec<String>)),
    tag = "Resources"
)]
pub async fn list_types(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.resource_repo.list_types().await?))
}
