//! Diesel ORM records for database tables.
//!
//! Records mirror table rows exactly. Enum columns are plain strings here and
//! become typed enums in the domain models.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use crate::schema;

/// Resource row. Field order follows `schema::resources`.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::resources)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ResourceRecord {
    pub id: i32,
    pub resource_type: String,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub county: String,
    pub town: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub hours_of_operation: Option<String>,
    pub seasonal_availability_summer: bool,
    pub seasonal_availability_winter: bool,
    pub restrictions: Option<String>,
    pub access_tier: String,
    pub last_verified_date: Option<DateTime<Utc>>,
    pub verification_source: Option<String>,
    pub verification_confidence: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub created_by: Option<i32>,
    pub is_active: bool,
    pub capacity: Option<i32>,
    pub cost_info: Option<String>,
    pub languages_supported: Option<Vec<String>>,
    pub dump_station_fee: Option<f64>,
    pub propane_price_per_gallon: Option<f64>,
    pub camping_nightly_rate: Option<f64>,
}

/// New resource for insertion. Timestamps, confidence and `is_active` use
/// column defaults.
#[derive(Insertable, Debug)]
#[diesel(table_name = schema::resources)]
pub struct NewResource<'a> {
    pub resource_type: &'a str,
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub address: Option<&'a str>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub county: &'a str,
    pub town: Option<&'a str>,
    pub phone: Option<&'a str>,
    pub email: Option<&'a str>,
    pub website: Option<&'a str>,
    pub hours_of_operation: Option<&'a str>,
    pub seasonal_availability_summer: bool,
    pub seasonal_availability_winter: bool,
    pub restrictions: Option<&'a str>,
    pub access_tier: &'a str,
    pub capacity: Option<i32>,
    pub cost_info: Option<&'a str>,
    pub languages_supported: Option<&'a Vec<String>>,
    pub dump_station_fee: Option<f64>,
    pub propane_price_per_gallon: Option<f64>,
    pub camping_nightly_rate: Option<f64>,
}

/// Partial resource update. `None` fields are left out of the SET clause;
/// `updated_at` is always present so the changeset is never empty.
#[derive(AsChangeset, Debug)]
#[diesel(table_name = schema::resources)]
pub struct ResourceChangeset<'a> {
    pub name: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub address: Option<Option<&'a str>>,
    pub phone: Option<Option<&'a str>>,
    pub email: Option<Option<&'a str>>,
    pub website: Option<Option<&'a str>>,
    pub hours_of_operation: Option<Option<&'a str>>,
    pub seasonal_availability_summer: Option<bool>,
    pub seasonal_availability_winter: Option<bool>,
    pub restrictions: Option<Option<&'a str>>,
    pub capacity: Option<Option<i32>>,
    pub cost_info: Option<Option<&'a str>>,
    pub dump_station_fee: Option<Option<f64>>,
    pub propane_price_per_gallon: Option<Option<f64>>,
    pub camping_nightly_rate: Option<Option<f64>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

/// Community report row.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::community_reports)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CommunityReportRecord {
    pub id: i32,
    pub resource_id: i32,
    pub reported_by: Option<i32>,
    pub report_type: String,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub reviewed_by: Option<i32>,
    pub reviewed_at: Option<DateTime<Utc>>,
    pub admin_notes: Option<String>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = schema::community_reports)]
pub struct NewCommunityReport<'a> {
    pub resource_id: i32,
    pub report_type: &'a str,
    pub details: Option<&'a str>,
    pub status: &'a str,
}

/// Assessment result row.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::assessment_results)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct AssessmentRecord {
    pub id: i32,
    pub risk_score: i32,
    pub risk_tier: String,
    pub county: Option<String>,
    pub age_range: Option<String>,
    pub household_size: Option<i32>,
    pub housing_situation: Option<String>,
    pub created_at: DateTime<Utc>,
    pub session_id: Option<String>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = schema::assessment_results)]
pub struct NewAssessment<'a> {
    pub risk_score: i32,
    pub risk_tier: &'a str,
    pub county: Option<&'a str>,
    pub age_range: Option<&'a str>,
    pub household_size: Option<i32>,
    pub housing_situation: Option<&'a str>,
}

/// Verification log row.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::verification_logs)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct VerificationLogRecord {
    pub id: i32,
    pub resource_id: i32,
    pub verified_by: Option<i32>,
    pub verification_method: String,
    pub verified_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub confidence_score: Option<i32>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = schema::verification_logs)]
pub struct NewVerificationLog<'a> {
    pub resource_id: i32,
    pub verification_method: &'a str,
    pub verified_at: DateTime<Utc>,
    pub notes: Option<&'a str>,
    pub confidence_score: Option<i32>,
}

/// Resource tag row.
#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = schema::resource_tags)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ResourceTagRecord {
    pub id: i32,
    pub resource_id: i32,
    pub tag: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = schema::resource_tags)]
pub struct NewResourceTag<'a> {
    pub resource_id: i32,
    pub tag: &'a str,
}
