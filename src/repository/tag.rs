//! Resource tag repository.

use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::info;

use super::models::{NewResourceTag, ResourceTagRecord};
use super::pool::{DbError, PgPool};
use crate::models::ResourceTag;
use crate::schema::resource_tags;

impl From<ResourceTagRecord> for ResourceTag {
    fn from(record: ResourceTagRecord) -> Self {
        ResourceTag {
            id: record.id,
            resource_id: record.resource_id,
            tag: record.tag,
            created_at: record.created_at,
        }
    }
}

#[derive(Clone)]
pub struct TagRepository {
    pool: PgPool,
}

impl TagRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Tags for one resource, alphabetical.
    pub async fn list_for_resource(&self, resource_id: i32) -> Result<Vec<ResourceTag>, DbError> {
        let mut conn = self.pool.get().await?;

        let records = resource_tags::table
            .filter(resource_tags::resource_id.eq(resource_id))
            .order(resource_tags::tag.asc())
            .load::<ResourceTagRecord>(&mut conn)
            .await?;

        Ok(records.into_iter().map(ResourceTag::from).collect())
    }

    /// Attach a tag. Adding a tag the resource already has returns the
    /// existing row.
    pub async fn add(&self, resource_id: i32, tag: &str) -> Result<ResourceTag, DbError> {
        let mut conn = self.pool.get().await?;

        let inserted = diesel::insert_into(resource_tags::table)
            .values(&NewResourceTag { resource_id, tag })
            .on_conflict((resource_tags::resource_id, resource_tags::tag))
            .do_nothing()
            .get_result::<ResourceTagRecord>(&mut conn)
            .await
            .optional()?;

        let record = match inserted {
            Some(record) => {
                info!(resource_id, tag, "Tagged resource");
                record
            }
            None => {
                resource_tags::table
                    .filter(resource_tags::resource_id.eq(resource_id))
                    .filter(resource_tags::tag.eq(tag))
                    .first::<ResourceTagRecord>(&mut conn)
                    .await?
            }
        };

        Ok(record.into())
    }
}
