//! Database context for managing connections and repository access.
//!
//! The DbContext holds the connection pool and hands out repositories that
//! share it.

use super::assessment::AssessmentRepository;
use super::migrations;
use super::pool::{DbError, PgPool, DEFAULT_POOL_SIZE};
use super::report::ReportRepository;
use super::resource::ResourceRepository;
use super::tag::TagRepository;
use super::verification::VerificationRepository;

/// Database context that manages the connection pool and provides repository access.
///
/// # Example
/// ```ignore
/// let ctx = DbContext::from_url("postgres://localhost/northwoods_housing", false)?;
/// let counties = ctx.resources().list_counties().await?;
/// ```
#[derive(Clone)]
pub struct DbContext {
    pool: PgPool,
}

impl DbContext {
    /// Create a context with the default pool size.
    pub fn from_url(url: &str, no_tls: bool) -> Result<Self, DbError> {
        Self::with_pool_size(url, DEFAULT_POOL_SIZE, no_tls)
    }

    pub fn with_pool_size(url: &str, pool_size: usize, no_tls: bool) -> Result<Self, DbError> {
        Ok(Self {
            pool: PgPool::new(url, pool_size, no_tls)?,
        })
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn resources(&self) -> ResourceRepository {
        ResourceRepository::new(self.pool.clone())
    }

    pub fn reports(&self) -> ReportRepository {
        ReportRepository::new(self.pool.clone())
    }

    pub fn assessments(&self) -> AssessmentRepository {
        AssessmentRepository::new(self.pool.clone())
    }

    pub fn verifications(&self) -> VerificationRepository {
        VerificationRepository::new(self.pool.clone())
    }

    pub fn tags(&self) -> TagRepository {
        TagRepository::new(self.pool.clone())
    }

    /// Whether the database answers a trivial query.
    pub async fn check_connection(&self) -> bool {
        match self.pool.ping().await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Database check failed: {}", e);
                false
            }
        }
    }

    /// Apply pending schema migrations.
    pub async fn run_migrations(&self) -> Result<Vec<String>, DbError> {
        migrations::run_migrations(self.pool.database_url(), self.pool.no_tls()).await
    }
}
