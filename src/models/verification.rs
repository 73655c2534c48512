//! Verification log entries for resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{check_range_i32, ValidationError};

/// How a resource's details were confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum VerificationMethod {
    ManualPhysical,
    ManualPhone,
    AutomatedWeb,
    CommunityReport,
    PartnerVerified,
}

impl VerificationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ManualPhysical => "manual_physical",
            Self::ManualPhone => "manual_phone",
            Self::AutomatedWeb => "automated_web",
            Self::CommunityReport => "community_report",
            Self::PartnerVerified => "partner_verified",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "manual_physical" => Some(Self::ManualPhysical),
            "manual_phone" => Some(Self::ManualPhone),
            "automated_web" => Some(Self::AutomatedWeb),
            "community_report" => Some(Self::CommunityReport),
            "partner_verified" => Some(Self::PartnerVerified),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VerificationLog {
    pub id: i32,
    pub resource_id: i32,
    pub verification_method: VerificationMethod,
    pub verified_at: DateTime<Utc>,
    pub notes: Option<String>,
    pub confidence_score: Option<i32>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct VerificationCreate {
    pub verification_method: VerificationMethod,
    #[serde(default)]
    pub confidence_score: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl VerificationCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        match self.confidence_score {
            Some(score) => check_range_i32("confidence_score", score, 0, 100),
            None => Ok(()),
        }
    }
}
