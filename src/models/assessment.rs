//! Anonymous housing-risk assessment results.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{check_length, check_optional_length, check_range_i32, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assessment {
    pub id: i32,
    pub risk_score: i32,
    pub risk_tier: String,
    pub county: Option<String>,
    pub age_range: Option<String>,
    pub household_size: Option<i32>,
    pub housing_situation: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct AssessmentCreate {
    pub risk_score: i32,
    pub risk_tier: String,
    #[serde(default)]
    pub county: Option<String>,
    #[serde(default)]
    pub age_range: Option<String>,
    #[serde(default)]
    pub household_size: Option<i32>,
    #[serde(default)]
    pub housing_situation: Option<String>,
}

impl AssessmentCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_range_i32("risk_score", self.risk_score, 0, 100)?;
        check_length("risk_tier", &self.risk_tier, 1, 20)?;
        check_optional_length("county", self.county.as_deref(), 0, 100)?;
        check_optional_length("age_range", self.age_range.as_deref(), 0, 20)?;
        check_optional_length(
            "housing_situation",
            self.housing_situation.as_deref(),
            0,
            100,
        )?;
        if let Some(size) = self.household_size {
            if size < 1 {
                return Err(ValidationError::new(
                    "household_size",
                    "must be greater than or equal to 1",
                ));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> AssessmentCreate {
        AssessmentCreate {
            risk_score: 72,
            risk_tier: "high".to_string(),
            county: Some("Marquette".to_string()),
            age_range: Some("25-34".to_string()),
            household_size: Some(3),
            housing_situation: Some("doubled_up".to_string()),
        }
    }

    #[test]
    fn test_valid_assessment() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn test_risk_score_bounds() {
        let a = AssessmentCreate {
            risk_score: 101,
            ..sample()
        };
        assert_eq!(a.validate().unwrap_err().field, "risk_score");
        let a = AssessmentCreate {
            risk_score: -1,
            ..sample()
        };
        assert!(a.validate().is_err());
    }

    #[test]
    fn test_household_size_minimum() {
        let a = AssessmentCreate {
            household_size: Some(0),
            ..sample()
        };
        assert_eq!(a.validate().unwrap_err().field, "household_size");
    }

    #[test]
    fn test_empty_tier_rejected() {
        let a = AssessmentCreate {
            risk_tier: String::new(),
            ..sample()
        };
        assert_eq!(a.validate().unwrap_err().field, "risk_tier");
    }
}
