//! Router configuration for the web server.

use axum::http::HeaderValue;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
///
/// Collection routes answer with and without a trailing slash.
pub fn create_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Banner, health, API description
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .route("/openapi.json", get(handlers::openapi_spec))
        // Resources
        .route(
            "/api/resources",
            get(handlers::list_resources).post(handlers::create_resource),
        )
        .route(
            "/api/resources/",
            get(handlers::list_resources).post(handlers::create_resource),
        )
        .route("/api/resources/counties/list", get(handlers::list_counties))
        .route("/api/resources/types/list", get(handlers::list_types))
        .route(
            "/api/resources/:resource_id",
            get(handlers::get_resource)
                .put(handlers::update_resource)
                .delete(handlers::delete_resource),
        )
        .route(
            "/api/resources/:resource_id/reports",
            get(handlers::list_resource_reports),
        )
        .route(
            "/api/resources/:resource_id/verifications",
            get(handlers::list_verifications).post(handlers::create_verification),
        )
        .route(
            "/api/resources/:resource_id/tags",
            get(handlers::list_tags).post(handlers::add_tag),
        )
        // Community reports
        .route("/api/reports", post(handlers::create_report))
        .route("/api/reports/", post(handlers::create_report))
        .route("/api/reports/:report_id", get(handlers::get_report))
        // Assessments
        .route("/api/assessments", post(handlers::create_assessment))
        .route("/api/assessments/", post(handlers::create_assessment))
        .route("/api/assessments/:assessment_id", get(handlers::get_assessment))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// CORS policy for a list of allowed origins. Empty or `*` allows any origin.
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() || origins.iter().any(|o| o == "*") {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
