//! HTTP handlers, grouped by resource.

pub mod api_types;
mod assessments;
mod health;
mod openapi;
mod reports;
mod resources;
mod tags;
mod verifications;

pub use assessments::{create_assessment, get_assessment};
pub use health::{health, root};
pub use openapi::{openapi_spec, ApiDoc};
pub use reports::{create_report, get_report, list_resource_reports};
pub use resources::{
    create_resource, delete_resource, get_resource, list_counties, list_resources, list_types,
    update_resource,
};
pub use tags::{add_tag, list_tags};
pub use verifications::{create_verification, list_verifications};
