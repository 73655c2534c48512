//! Service banner and health check.

use axum::{extract::State, Json};
use chrono::Utc;

use super::super::AppState;
use super::api_types::{HealthResponse, RootResponse};

pub const SERVICE_NAME: &str = "Northwoods Housing Security Resource API";

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = RootResponse)),
    tag = "Health"
)]
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        status: "healthy".to_string(),
        message: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Report database connectivity. Always 200; `status` carries the result.
#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Health status", body = HealthResponse)),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = state.db.check_connection().await;

    Json(HealthResponse {
        status: if connected { "healthy" } else { "degraded" }.to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
        timestamp: Utc::now(),
    })
}
