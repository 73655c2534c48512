//! Data models for the housing resource directory.

mod assessment;
mod community_report;
mod resource;
mod tag;
mod validation;
mod verification;

pub use assessment::{Assessment, AssessmentCreate};
pub use community_report::{CommunityReport, CommunityReportCreate, ReportStatus, ReportType};
pub use resource::{
    AccessTier, Location, Resource, ResourceCategory, ResourceCreate, ResourceUpdate,
};
pub use tag::{ResourceTag, TagCreate};
pub use validation::ValidationError;
pub use verification::{VerificationCreate, VerificationLog, VerificationMethod};

pub(crate) use validation::{check_latitude, check_longitude, check_range_f64};
