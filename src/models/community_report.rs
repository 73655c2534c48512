//! Community-submitted status reports about a resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::ValidationError;

/// What the reporter observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    StillOpen,
    Closed,
    ChangedHours,
    ChangedServices,
    NotHelpful,
    SafetyConcern,
    NewRestrictions,
    Other,
}

impl ReportType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StillOpen => "still_open",
            Self::Closed => "closed",
            Self::ChangedHours => "changed_hours",
            Self::ChangedServices => "changed_services",
            Self::NotHelpful => "not_helpful",
            Self::SafetyConcern => "safety_concern",
            Self::NewRestrictions => "new_restrictions",
            Self::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "still_open" => Some(Self::StillOpen),
            "closed" => Some(Self::Closed),
            "changed_hours" => Some(Self::ChangedHours),
            "changed_services" => Some(Self::ChangedServices),
            "not_helpful" => Some(Self::NotHelpful),
            "safety_concern" => Some(Self::SafetyConcern),
            "new_restrictions" => Some(Self::NewRestrictions),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Review state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    #[default]
    Pending,
    Reviewed,
    Resolved,
    Dismissed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Reviewed => "reviewed",
            Self::Resolved => "resolved",
            Self::Dismissed => "dismissed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(Self::Pending),
            "reviewed" => Some(Self::Reviewed),
            "resolved" => Some(Self::Resolved),
            "dismissed" => Some(Self::Dismissed),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommunityReport {
    pub id: i32,
    pub resource_id: i32,
    pub report_type: ReportType,
    pub details: Option<String>,
    pub created_at: DateTime<Utc>,
    pub status: ReportStatus,
}

/// Payload for filing a report.
///
/// `report_type` is taken as a plain string so an unknown value produces a
/// field-level validation message instead of a body parse failure.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CommunityReportCreate {
    pub resource_id: i32,
    pub report_type: String,
    #[serde(default)]
    pub details: Option<String>,
}

impl CommunityReportCreate {
    pub fn validate(&self) -> Result<ReportType, ValidationError> {
        ReportType::from_str(&self.report_type).ok_or_else(|| {
            ValidationError::new(
                "report_type",
                format!("unknown report type '{}'", self.report_type),
            )
        })
    }
}
