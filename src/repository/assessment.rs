//! Assessment result repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::info;

use super::models::{AssessmentRecord, NewAssessment};
use super::pool::{DbError, PgPool};
use crate::models::{Assessment, AssessmentCreate};
use crate::schema::assessment_results;

impl From<AssessmentRecord> for Assessment {
    fn from(record: AssessmentRecord) -> Self {
        Assessment {
            id: record.id,
            risk_score: record.risk_score,
            risk_tier: record.risk_tier,
            county: record.county,
            age_range: record.age_range,
            household_size: record.household_size,
            housing_situation: record.housing_situation,
            created_at: record.created_at,
        }
    }
}

#[derive(Clone)]
pub struct AssessmentRepository {
    pool: PgPool,
}

impl AssessmentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, input: &AssessmentCreate) -> Result<Assessment, DbError> {
        let mut conn = self.pool.get().await?;

        let record: AssessmentRecord = diesel::insert_into(assessment_results::table)
            .values(&NewAssessment {
                risk_score: input.risk_score,
                risk_tier: &input.risk_tier,
                county: input.county.as_deref(),
                age_range: input.age_range.as_deref(),
                household_size: input.household_size,
                housing_situation: input.housing_situation.as_deref(),
            })
            .get_result(&mut conn)
            .await?;

        info!(id = record.id, risk_tier = %record.risk_tier, "Stored assessment result");
        Ok(record.into())
    }

    pub async fn get(&self, id: i32) -> Result<Option<Assessment>, DbError> {
        let mut conn = self.pool.get().await?;

        assessment_results::table
            .find(id)
            .first::<AssessmentRecord>(&mut conn)
            .await
            .optional()
            .map(|opt| opt.map(Assessment::from))
    }
}
