//! Diesel-based resource repository.
//!
//! Listing builds one boxed predicate per request and reuses it for both the
//! page query and the total count, so `total` always describes the same rows
//! the page was cut from.

use chrono::{DateTime, Utc};
use diesel::dsl::{count_star, exists, sql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Bool, Double};
use diesel_async::RunQueryDsl;
use tracing::{debug, info};

use super::models::{NewResource, ResourceChangeset, ResourceRecord};
use super::pool::{DbError, PgPool};
use crate::models::{
    AccessTier, Location, Resource, ResourceCategory, ResourceCreate, ResourceUpdate,
};
use crate::schema::resources;

/// Conversion factor used for radius searches.
pub const METERS_PER_MILE: f64 = 1609.34;

pub const DEFAULT_PAGE_SIZE: i64 = 50;
pub const MAX_PAGE_SIZE: i64 = 100;
pub const MAX_RADIUS_MILES: f64 = 100.0;

/// Center point and radius for a proximity search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub radius_miles: f64,
}

impl NearPoint {
    pub fn radius_meters(&self) -> f64 {
        self.radius_miles * METERS_PER_MILE
    }
}

/// Listing filters. Every `Some` narrows the result set.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceFilter {
    pub resource_type: Option<ResourceCategory>,
    /// Case-insensitive substring of the county name.
    pub county: Option<String>,
    pub near: Option<NearPoint>,
    pub seasonal_winter: Option<bool>,
    pub limit: i64,
    pub offset: i64,
}

impl Default for ResourceFilter {
    fn default() -> Self {
        Self {
            resource_type: None,
            county: None,
            near: None,
            seasonal_winter: None,
            limit: DEFAULT_PAGE_SIZE,
            offset: 0,
        }
    }
}

/// One page of listing results.
#[derive(Debug, Clone)]
pub struct ResourcePage {
    /// Matching rows before pagination.
    pub total: i64,
    pub items: Vec<Resource>,
}

type ResourcePredicate = Box<dyn BoxableExpression<resources::table, Pg, SqlType = Bool>>;

/// Build the WHERE clause for a listing.
fn filter_predicate(filter: &ResourceFilter) -> ResourcePredicate {
    let mut predicate: ResourcePredicate = Box::new(resources::is_active.eq(true));

    if let Some(category) = filter.resource_type {
        predicate = Box::new(predicate.and(resources::resource_type.eq(category.as_str())));
    }
    if let Some(county) = &filter.county {
        predicate = Box::new(predicate.and(resources::county.ilike(format!("%{}%", county))));
    }
    if let Some(near) = filter.near {
        let within = sql::<Bool>("ST_DWithin(location, ST_SetSRID(ST_MakePoint(")
            .bind::<Double, _>(near.longitude)
            .sql(", ")
            .bind::<Double, _>(near.latitude)
            .sql("), 4326)::geography, ")
            .bind::<Double, _>(near.radius_meters())
            .sql(")");
        predicate = Box::new(predicate.and(within));
    }
    if let Some(winter) = filter.seasonal_winter {
        predicate = Box::new(predicate.and(resources::seasonal_availability_winter.eq(winter)));
    }

    predicate
}

/// Page query: nearest first for proximity searches, otherwise by name.
pub(crate) fn list_query(filter: &ResourceFilter) -> resources::BoxedQuery<'static, Pg> {
    let query = resources::table
        .into_boxed()
        .filter(filter_predicate(filter));

    let query = match filter.near {
        Some(near) => query.order(
            sql::<Double>("ST_Distance(location, ST_SetSRID(ST_MakePoint(")
                .bind::<Double, _>(near.longitude)
                .sql(", ")
                .bind::<Double, _>(near.latitude)
                .sql("), 4326)::geography)"),
        ),
        None => query.order(resources::name.asc()),
    };

    query
        .then_order_by(resources::id.asc())
        .limit(filter.limit)
        .offset(filter.offset)
}

pub(crate) fn count_query(filter: &ResourceFilter) -> resources::BoxedQuery<'static, Pg, BigInt> {
    resources::table
        .select(count_star())
        .into_boxed()
        .filter(filter_predicate(filter))
}

/// Changeset for a partial update.
///
/// Outer `None` skips a column, `Some(None)` writes NULL. Coordinates change
/// only as a pair.
pub(crate) fn update_changeset(update: &ResourceUpdate, now: DateTime<Utc>) -> ResourceChangeset<'_> {
    fn text(field: &Option<Option<String>>) -> Option<Option<&str>> {
        field.as_ref().map(|v| v.as_deref())
    }

    let location = update.location();
    ResourceChangeset {
        name: update.name.as_deref(),
        description: text(&update.description),
        address: text(&update.address),
        phone: text(&update.phone),
        email: text(&update.email),
        website: text(&update.website),
        hours_of_operation: text(&update.hours_of_operation),
        seasonal_availability_summer: update.seasonal_availability_summer,
        seasonal_availability_winter: update.seasonal_availability_winter,
        restrictions: text(&update.restrictions),
        capacity: update.capacity,
        cost_info: text(&update.cost_info),
        dump_station_fee: update.dump_station_fee,
        propane_price_per_gallon: update.propane_price_per_gallon,
        camping_nightly_rate: update.camping_nightly_rate,
        latitude: location.map(|l| l.latitude),
        longitude: location.map(|l| l.longitude),
        updated_at: now,
    }
}

fn new_resource(input: &ResourceCreate) -> NewResource<'_> {
    let location = input.location();
    NewResource {
        resource_type: input.resource_type.as_str(),
        name: &input.name,
        description: input.description.as_deref(),
        address: input.address.as_deref(),
        latitude: location.map(|l| l.latitude),
        longitude: location.map(|l| l.longitude),
        county: &input.county,
        town: input.town.as_deref(),
        phone: input.phone.as_deref(),
        email: input.email.as_deref(),
        website: input.website.as_deref(),
        hours_of_operation: input.hours_of_operation.as_deref(),
        seasonal_availability_summer: input.seasonal_availability_summer,
        seasonal_availability_winter: input.seasonal_availability_winter,
        restrictions: input.restrictions.as_deref(),
        access_tier: input.access_tier.as_str(),
        capacity: input.capacity,
        cost_info: input.cost_info.as_deref(),
        languages_supported: input.languages_supported.as_ref(),
        dump_station_fee: input.dump_station_fee,
        propane_price_per_gallon: input.propane_price_per_gallon,
        camping_nightly_rate: input.camping_nightly_rate,
    }
}

impl From<ResourceRecord> for Resource {
    fn from(record: ResourceRecord) -> Self {
        Resource {
            id: record.id,
            resource_type: ResourceCategory::from_str(&record.resource_type)
                .unwrap_or(ResourceCategory::Other),
            name: record.name,
            description: record.description,
            address: record.address,
            location: Location::from_parts(record.latitude, record.longitude),
            county: record.county,
            town: record.town,
            phone: record.phone,
            email: record.email,
            website: record.website,
            hours_of_operation: record.hours_of_operation,
            seasonal_availability_summer: record.seasonal_availability_summer,
            seasonal_availability_winter: record.seasonal_availability_winter,
            restrictions: record.restrictions,
            access_tier: AccessTier::from_str(&record.access_tier).unwrap_or_default(),
            last_verified_date: record.last_verified_date,
            verification_source: record.verification_source,
            verification_confidence: record.verification_confidence,
            created_at: record.created_at,
            updated_at: record.updated_at,
            created_by: record.created_by,
            is_active: record.is_active,
            capacity: record.capacity,
            cost_info: record.cost_info,
            languages_supported: record.languages_supported,
            dump_station_fee: record.dump_station_fee,
            propane_price_per_gallon: record.propane_price_per_gallon,
            camping_nightly_rate: record.camping_nightly_rate,
        }
    }
}

/// Resource repository.
#[derive(Clone)]
pub struct ResourceRepository {
    pool: PgPool,
}

impl ResourceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a resource and return the stored row.
    pub async fn create(&self, input: &ResourceCreate) -> Result<Resource, DbError> {
        let mut conn = self.pool.get().await?;

        let record: ResourceRecord = diesel::insert_into(resources::table)
            .values(&new_resource(input))
            .get_result(&mut conn)
            .await?;

        info!(id = record.id, resource_type = %record.resource_type, "Created resource");
        Ok(record.into())
    }

    /// One page of active resources plus the total match count.
    pub async fn list(&self, filter: &ResourceFilter) -> Result<ResourcePage, DbError> {
        let mut conn = self.pool.get().await?;

        let total: i64 = count_query(filter).get_result(&mut conn).await?;
        let records: Vec<ResourceRecord> = list_query(filter).load(&mut conn).await?;

        debug!(total, returned = records.len(), "Listed resources");
        Ok(ResourcePage {
            total,
            items: records.into_iter().map(Resource::from).collect(),
        })
    }

    /// Fetch an active resource.
    pub async fn get_active(&self, id: i32) -> Result<Option<Resource>, DbError> {
        let mut conn = self.pool.get().await?;

        resources::table
            .filter(resources::id.eq(id))
            .filter(resources::is_active.eq(true))
            .first::<ResourceRecord>(&mut conn)
            .await
            .optional()
            .map(|opt| opt.map(Resource::from))
    }

    pub async fn exists_active(&self, id: i32) -> Result<bool, DbError> {
        let mut conn = self.pool.get().await?;

        diesel::select(exists(
            resources::table
                .filter(resources::id.eq(id))
                .filter(resources::is_active.eq(true)),
        ))
        .get_result(&mut conn)
        .await
    }

    /// Apply a partial update to an active resource.
    ///
    /// Returns `None` when no active resource has this id.
    pub async fn update(
        &self,
        id: i32,
        update: &ResourceUpdate,
    ) -> Result<Option<Resource>, DbError> {
        let mut conn = self.pool.get().await?;

        let changeset = update_changeset(update, Utc::now());
        let record = diesel::update(
            resources::table
                .filter(resources::id.eq(id))
                .filter(resources::is_active.eq(true)),
        )
        .set(&changeset)
        .get_result::<ResourceRecord>(&mut conn)
        .await
        .optional()?;

        if record.is_some() {
            info!(id, "Updated resource");
        }
        Ok(record.map(Resource::from))
    }

    /// Soft delete. Matches the row whether or not it is already inactive.
    ///
    /// Returns `false` when no row has this id.
    pub async fn deactivate(&self, id: i32) -> Result<bool, DbError> {
        let mut conn = self.pool.get().await?;

        let rows = diesel::update(resources::table.find(id))
            .set((
                resources::is_active.eq(false),
                resources::updated_at.eq(Utc::now()),
            ))
            .execute(&mut conn)
            .await?;

        if rows > 0 {
            info!(id, "Deactivated resource");
        }
        Ok(rows > 0)
    }

    /// Distinct counties with at least one active resource, ascending.
    pub async fn list_counties(&self) -> Result<Vec<String>, DbError> {
        let mut conn = self.pool.get().await?;

        resources::table
            .filter(resources::is_active.eq(true))
            .select(resources::county)
            .distinct()
            .order(resources::county.asc())
            .load(&mut conn)
            .await
    }

    /// Distinct resource types with at least one active resource.
    pub async fn list_types(&self) -> Result<Vec<String>, DbError> {
        let mut conn = self.pool.get().await?;

        resources::table
            .filter(resources::is_active.eq(true))
            .select(resources::resource_type)
            .distinct()
            .order(resources::resource_type.asc())
            .load(&mut conn)
            .await
    }
}
