//! Typed API response bodies.
//!
//! Each derives `ToSchema` for the OpenAPI document and `Deserialize` so
//! clients (and tests) can read them back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{
    AccessTier, Assessment, CommunityReport, Location, ReportStatus, ReportType, Resource,
    ResourceCategory, ResourceTag, VerificationLog, VerificationMethod,
};

/// A resource as returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResourceResponse {
    pub id: i32,
    pub resource_type: ResourceCategory,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub county: String,
    pub town: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub hours_of_operation: Option<String>,
    pub seasonal_availability_summer: bool,
    pub seasonal_availability_winter: bool,
    pub restrictions: Option<String>,
    pub access_tier: AccessTier,
    pub capacity: Option<i32>,
    pub cost_info: Option<String>,
    pub languages_supported: Option<Vec<String>>,
    pub dump_station_fee: Option<f64>,
    pub propane_price_per_gallon: Option<f64>,
    pub camping_nightly_rate: Option<f64>,
    pub location: Option<Location>,
    pub last_verified_date: Option<DateTime<Utc>>,
    pub verification_confidence: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_active: bool,
}

impl From<Resource> for ResourceResponse {
    fn from(r: Resource) -> Self {
        Self {
            id: r.id,
            resource_type: r.resource_type,
            name: r.name,
            description: r.description,
            address: r.address,
            county: r.county,
            town: r.town,
            phone: r.phone,
            email: r.email,
            website: r.website,
            hours_of_operation: r.hours_of_operation,
            seasonal_availability_summer: r.seasonal_availability_summer,
            seasonal_availability_winter: r.seasonal_availability_winter,
            restrictions: r.restrictions,
            access_tier: r.access_tier,
            capacity: r.capacity,
            cost_info: r.cost_info,
            languages_supported: r.languages_supported,
            dump_station_fee: r.dump_station_fee,
            propane_price_per_gallon: r.propane_price_per_gallon,
            camping_nightly_rate: r.camping_nightly_rate,
            location: r.location,
            last_verified_date: r.last_verified_date,
            verification_confidence: r.verification_confidence,
            created_at: r.created_at,
            updated_at: r.updated_at,
            is_active: r.is_active,
        }
    }
}

/// One page of resources.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ResourceListResponse {
    /// Matching resources before `limit`/`offset` are applied.
    pub total: i64,
    pub items: Vec<ResourceResponse>,
    pub limit: i64,
    pub offset: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CommunityReportResponse {
    pub id: i32,
    pub resource_id: i32,
    pub report_type: ReportType,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
}

impl From<CommunityReport> for CommunityReportResponse {
    fn from(r: CommunityReport) -> Self {
        Self {
            id: r.id,
            resource_id: r.resource_id,
            report_type: r.report_type,
            details: r.details,
            created_at: r.created_at,
            status: r.status,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssessmentResponse {
    pub id: i32,
    pub risk_score: i32,
    pub risk_tier: String,
    pub county: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Assessment> for AssessmentResponse {
    fn from(a: Assessment) -> Self {
        Self {
            id: a.id,
            risk_score: a.risk_score,
            risk_tier: a.risk_tier,
            county: a.county,
            created_at: a.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VerificationResponse {
    pub id: i32,
    pub resource_id: i32,
    pub verification_method: VerificationMethod,
    pub verified_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub confidence_score: Option<i32>,
}

impl From<VerificationLog> for VerificationResponse {
    fn from(v: VerificationLog) -> Self {
        Self {
            id: v.id,
            resource_id: v.resource_id,
            verification_method: v.verification_method,
            verified_at: v.verified_at,
            notes: v.notes,
            confidence_score: v.confidence_score,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagResponse {
    pub id: i32,
    pub resource_id: i32,
    pub tag: String,
    pub created_at: DateTime<Utc>,
}

impl From<ResourceTag> for TagResponse {
    fn from(t: ResourceTag) -> Self {
        Self {
            id: t.id,
            resource_id: t.resource_id,
            tag: t.tag,
            created_at: t.created_at,
        }
    }
}

/// Service banner.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub status: String,
    pub message: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` or `degraded`.
    pub status: String,
    /// `connected` or `disconnected`.
    pub database: String,
    pub timestamp: DateTime<Utc>,
}
