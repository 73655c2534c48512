//! Repository layer for database persistence.
//!
//! All database access goes through Diesel on a pooled diesel-async
//! PostgreSQL connection. Spatial predicates are raw PostGIS fragments.

pub mod context;
pub mod migrations;
pub mod models;
pub mod pg_tls;
pub mod pool;
pub mod util;

mod assessment;
mod report;
mod resource;
mod tag;
mod verification;

pub use assessment::AssessmentRepository;
pub use context::DbContext;
pub use pool::{DbError, PgPool};
pub use report::ReportRepository;
pub use resource::{
    NearPoint, ResourceFilter, ResourcePage, ResourceRepository, DEFAULT_PAGE_SIZE,
    MAX_PAGE_SIZE, MAX_RADIUS_MILES, METERS_PER_MILE,
};
pub use tag::TagRepository;
pub use verification::VerificationRepository;
