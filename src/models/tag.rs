//! Free-form tags attached to resources.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{check_length, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceTag {
    pub id: i32,
    pub resource_id: i32,
    pub tag: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct TagCreate {
    pub tag: String,
}

impl TagCreate {
    /// Trimmed, lowercased tag text.
    pub fn normalized(&self) -> Result<String, ValidationError> {
        let tag = self.tag.trim().to_lowercase();
        check_length("tag", &tag, 1, 100)?;
        Ok(tag)
    }
}
