//! Community report repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::info;

use super::models::{CommunityReportRecord, NewCommunityReport};
use super::pool::{DbError, PgPool};
use crate::models::{CommunityReport, ReportStatus, ReportType};
use crate::schema::community_reports;

impl From<CommunityReportRecord> for CommunityReport {
    fn from(record: CommunityReportRecord) -> Self {
        CommunityReport {
            id: record.id,
            resource_id: record.resource_id,
            report_type: ReportType::from_str(&record.report_type).unwrap_or(ReportType::Other),
            details: record.details,
            created_at: record.created_at,
            status: ReportStatus::from_str(&record.status).unwrap_or_default(),
        }
    }
}

#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// File a new report in `pending` state.
    pub async fn create(
        &self,
        resource_id: i32,
        report_type: ReportType,
        details: Option<&str>,
    ) -> Result<CommunityReport, DbError> {
        let mut conn = self.pool.get().await?;

        let record: CommunityReportRecord = diesel::insert_into(community_reports::table)
            .values(&NewCommunityReport {
                resource_id,
                report_type: report_type.as_str(),
                details,
                status: ReportStatus::Pending.as_str(),
            })
            .get_result(&mut conn)
            .await?;

        info!(id = record.id, resource_id, report_type = report_type.as_str(), "Filed community report");
        Ok(record.into())
    }

    pub async fn get(&self, id: i32) -> Result<Option<CommunityReport>, DbError> {
        let mut conn = self.pool.get().await?;

        community_reports::table
            .find(id)
            .first::<CommunityReportRecord>(&mut conn)
            .await
            .optional()
            .map(|opt| opt.map(CommunityReport::from))
    }

    /// Reports for one resource, newest first.
    pub async fn list_for_resource(&self, resource_id: i32) -> Result<Vec<CommunityReport>, DbError> {
        let mut conn = self.pool.get().await?;

        let records = community_reports::table
            .filter(community_reports::resource_id.eq(resource_id))
            .order((community_reports::created_at.desc(), community_reports::id.desc()))
            .load::<CommunityReportRecord>(&mut conn)
            .await?;

        Ok(records.into_iter().map(CommunityReport::from).collect())
    }
}
