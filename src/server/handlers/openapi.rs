//! OpenAPI spec generation and serving.

use axum::{http::StatusCode, response::IntoResponse};
use utoipa::OpenApi;

use super::super::error;
use super::api_types;
use super::assessments;
use super::health;
use super::reports;
use super::resources;
use super::tags;
use super::verifications;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Northwoods Housing Security Resource API",
        description = "Directory of housing-security resources across Northern Michigan"
    ),
    paths(
        // Health
        health::root,
        health::health,
        // Resources
        resources::create_resource,
        resources::list_resources,
        resources::get_resource,
        resources::update_resource,
        resources::delete_resource,
        resources::list_counties,
        resources::list_types,
        // Reports
        reports::create_report,
        reports::get_report,
        reports::list_resource_reports,
        // Assessments
        assessments::create_assessment,
        assessments::get_assessment,
        // Verifications
        verifications::create_verification,
        verifications::list_verifications,
        // Tags
        tags::list_tags,
        tags::add_tag,
    ),
    components(schemas(
        error::ErrorDetail,
        models::ResourceCategory,
        models::AccessTier,
        models::Location,
        models::ReportType,
        models::ReportStatus,
        models::VerificationMethod,
        models::ResourceCreate,
        models::ResourceUpdate,
        models::CommunityReportCreate,
        models::AssessmentCreate,
        models::VerificationCreate,
        models::TagCreate,
        api_types::ResourceResponse,
        api_types::ResourceListResponse,
        api_types::CommunityReportResponse,
        api_types::AssessmentResponse,
        api_types::VerificationResponse,
        api_types::TagResponse,
        api_types::RootResponse,
        api_types::HealthResponse,
    )),
    tags(
        (name = "Health", description = "Service banner and database health"),
        (name = "Resources", description = "Resource directory and proximity search"),
        (name = "Reports", description = "Community status reports"),
        (name = "Assessments", description = "Anonymous risk assessment results"),
        (name = "Verifications", description = "Resource verification history"),
        (name = "Tags", description = "Free-form resource tags"),
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI spec as JSON.
pub async fn openapi_spec() -> Result<impl IntoResponse, error::ApiError> {
    let spec = ApiDoc::openapi().to_json().map_err(|e| {
        error::ApiError::Internal(format!("Failed to render OpenAPI document: {}", e))
    })?;
    Ok((StatusCode::OK, [("content-type", "application/json")], spec))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_lists_resource_paths() {
        let json = ApiDoc::openapi().to_json().unwrap();
        let spec: serde_json::Value = serde_json::from_str(&json).unwrap();
        let paths = spec["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/resources/"));
        assert!(paths.contains_key("/api/resources/{resource_id}"));
        assert!(paths.contains_key("/api/resources/counties/list"));
        assert!(paths.contains_key("/health"));
        assert!(spec["components"]["schemas"]
            .as_object()
            .unwrap()
            .contains_key("ResourceResponse"));
    }
}
