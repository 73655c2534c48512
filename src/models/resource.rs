//! Housing-security resource models.
//!
//! A resource is a single service location (food pantry, shelter, dump
//! station, ...) listed in the directory. Rows are never removed by the
//! API; deletion flips `is_active`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::{
    check_email, check_latitude, check_length, check_longitude, check_optional_length,
    ValidationError,
};

/// Kind of service a resource provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResourceCategory {
    Food,
    Shelter,
    Healthcare,
    WasteDisposal,
    Propane,
    Camping,
    DayCenter,
    Hygiene,
    MailAddress,
    WifiCharging,
    CaseManagement,
    Transportation,
    AssistanceProgram,
    LandOpportunity,
    LegalAid,
    Employment,
    Education,
    Veterans,
    Other,
}

impl ResourceCategory {
    pub const ALL: [ResourceCategory; 19] = [
        Self::Food,
        Self::Shelter,
        Self::Healthcare,
        Self::WasteDisposal,
        Self::Propane,
        Self::Camping,
        Self::DayCenter,
        Self::Hygiene,
        Self::MailAddress,
        Self::WifiCharging,
        Self::CaseManagement,
        Self::Transportation,
        Self::AssistanceProgram,
        Self::LandOpportunity,
        Self::LegalAid,
        Self::Employment,
        Self::Education,
        Self::Veterans,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Shelter => "shelter",
            Self::Healthcare => "healthcare",
            Self::WasteDisposal => "waste_disposal",
            Self::Propane => "propane",
            Self::Camping => "camping",
            Self::DayCenter => "day_center",
            Self::Hygiene => "hygiene",
            Self::MailAddress => "mail_address",
            Self::WifiCharging => "wifi_charging",
            Self::CaseManagement => "case_management",
            Self::Transportation => "transportation",
            Self::AssistanceProgram => "assistance_program",
            Self::LandOpportunity => "land_opportunity",
            Self::LegalAid => "legal_aid",
            Self::Employment => "employment",
            Self::Education => "education",
            Self::Veterans => "veterans",
            Self::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

/// Access level. Stored on resources and users; not enforced anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessTier {
    #[default]
    Public,
    VerifiedUser,
    TrustedVerifier,
    Admin,
}

impl AccessTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::VerifiedUser => "verified_user",
            Self::TrustedVerifier => "trusted_verifier",
            Self::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "public" => Some(Self::Public),
            "verified_user" => Some(Self::VerifiedUser),
            "trusted_verifier" => Some(Self::TrustedVerifier),
            "admin" => Some(Self::Admin),
            _ => None,
        }
    }
}

/// WGS84 point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    /// A point exists only when both coordinates are known.
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Some(Self {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }
}

/// A directory entry as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resource {
    pub id: i32,
    pub resource_type: ResourceCategory,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub location: Option<Location>,
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

fn default_true() -> bool {
    true
}

/// Payload for creating a resource.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ResourceCreate {
    pub resource_type: ResourceCategory,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    pub county: String,
    #[serde(default)]
    pub town: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub hours_of_operation: Option<String>,
    #[serde(default = "default_true")]
    pub seasonal_availability_summer: bool,
    #[serde(default = "default_true")]
    pub seasonal_availability_winter: bool,
    #[serde(default)]
    pub restrictions: Option<String>,
    #[serde(default)]
    pub access_tier: AccessTier,
    #[serde(default)]
    pub capacity: Option<i32>,
    #[serde(default)]
    pub cost_info: Option<String>,
    #[serde(default)]
    pub languages_supported: Option<Vec<String>>,
    #[serde(default)]
    pub dump_station_fee: Option<f64>,
    #[serde(default)]
    pub propane_price_per_gallon: Option<f64>,
    #[serde(default)]
    pub camping_nightly_rate: Option<f64>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl ResourceCreate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_length("name", &self.name, 1, 255)?;
        check_length("county", &self.county, 1, 100)?;
        check_email("email", self.email.as_deref())?;
        check_latitude("latitude", self.latitude)?;
        check_longitude("longitude", self.longitude)?;
        Ok(())
    }

    pub fn location(&self) -> Option<Location> {
        Location::from_parts(self.latitude, self.longitude)
    }
}

/// Deserialize a field that may be absent, `null`, or a value.
///
/// Paired with `#[serde(default)]`: absent gives `None`, `null` gives
/// `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Partial update.
///
/// For nullable columns, `Some(Some(v))` sets, `Some(None)` clears and `None`
/// leaves the column alone. `null` for a required column (name, seasonal
/// flags) or for a coordinate is treated as absent.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct ResourceUpdate {
    pub name: Option<String>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub address: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub phone: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub email: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub website: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub hours_of_operation: Option<Option<String>>,
    pub seasonal_availability_summer: Option<bool>,
    pub seasonal_availability_winter: Option<bool>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub restrictions: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<i32>)]
    pub capacity: Option<Option<i32>>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub cost_info: Option<Option<String>>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub dump_station_fee: Option<Option<f64>>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub propane_price_per_gallon: Option<Option<f64>>,
    #[serde(deserialize_with = "present")]
    #[schema(value_type = Option<f64>)]
    pub camping_nightly_rate: Option<Option<f64>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl ResourceUpdate {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_optional_length("name", self.name.as_deref(), 1, 255)?;
        check_email("email", self.email.as_ref().and_then(|e| e.as_deref()))?;
        check_latitude("latitude", self.latitude)?;
        check_longitude("longitude", self.longitude)?;
        Ok(())
    }

    /// New location, only when both coordinates were supplied.
    pub fn location(&self) -> Option<Location> {
        Location::from_parts(self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_payload() -> serde_json::Value {
        serde_json::json!({
            "resource_type": "food",
            "name": "Alger County Food Pantry",
            "county": "Alger",
            "latitude": 46.4117,
            "longitude": -86.6479
        })
    }

    #[test]
    fn test_category_round_trip() {
        for category in ResourceCategory::ALL {
            assert_eq!(ResourceCategory::from_str(category.as_str()), Some(category));
        }
        assert_eq!(ResourceCategory::from_str("casino"), None);
    }

    #[test]
    fn test_category_serializes_snake_case() {
        let json = serde_json::to_string(&ResourceCategory::WifiCharging).unwrap();
        assert_eq!(json, "\"wifi_charging\"");
        let parsed: ResourceCategory = serde_json::from_str("\"legal_aid\"").unwrap();
        assert_eq!(parsed, ResourceCategory::LegalAid);
    }

    #[test]
    fn test_access_tier_parse() {
        assert_eq!(AccessTier::from_str("trusted_verifier"), Some(AccessTier::TrustedVerifier));
        assert_eq!(AccessTier::from_str("root"), None);
        assert_eq!(AccessTier::default(), AccessTier::Public);
    }

    #[test]
    fn test_create_defaults() {
        let create: ResourceCreate = serde_json::from_value(create_payload()).unwrap();
        assert!(create.seasonal_availability_summer);
        assert!(create.seasonal_availability_winter);
        assert_eq!(create.access_tier, AccessTier::Public);
        assert!(create.validate().is_ok());
        assert_eq!(
            create.location(),
            Some(Location {
                latitude: 46.4117,
                longitude: -86.6479
            })
        );
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let mut payload = create_payload();
        payload["resource_type"] = "casino".into();
        assert!(serde_json::from_value::<ResourceCreate>(payload).is_err());
    }

    #[test]
    fn test_create_validation() {
        let mut create: ResourceCreate = serde_json::from_value(create_payload()).unwrap();
        create.name = String::new();
        assert_eq!(create.validate().unwrap_err().field, "name");

        let mut create: ResourceCreate = serde_json::from_value(create_payload()).unwrap();
        create.county = "c".repeat(101);
        assert_eq!(create.validate().unwrap_err().field, "county");

        let mut create: ResourceCreate = serde_json::from_value(create_payload()).unwrap();
        create.email = Some("pantry at alger".to_string());
        assert_eq!(create.validate().unwrap_err().field, "email");

        let mut create: ResourceCreate = serde_json::from_value(create_payload()).unwrap();
        create.latitude = Some(91.0);
        assert_eq!(create.validate().unwrap_err().field, "latitude");
    }

    #[test]
    fn test_single_coordinate_has_no_location() {
        let mut create: ResourceCreate = serde_json::from_value(create_payload()).unwrap();
        create.longitude = None;
        assert!(create.location().is_none());

        let update = ResourceUpdate {
            latitude: Some(46.0),
            ..Default::default()
        };
        assert!(update.location().is_none());
    }

    #[test]
    fn test_update_distinguishes_null_from_absent() {
        let update: ResourceUpdate = serde_json::from_value(serde_json::json!({
            "name": null,
            "phone": "906-555-0100",
            "website": null,
            "capacity": null,
            "latitude": null
        }))
        .unwrap();
        assert!(update.name.is_none());
        assert_eq!(update.phone, Some(Some("906-555-0100".to_string())));
        assert_eq!(update.website, Some(None));
        assert_eq!(update.capacity, Some(None));
        assert!(update.email.is_none());
        assert!(update.latitude.is_none());
        assert!(update.validate().is_ok());
    }

    #[test]
    fn test_update_email_checked_only_when_set() {
        let update: ResourceUpdate =
            serde_json::from_value(serde_json::json!({"email": null})).unwrap();
        assert!(update.validate().is_ok());

        let update: ResourceUpdate =
            serde_json::from_value(serde_json::json!({"email": "nowhere"})).unwrap();
        assert_eq!(update.validate().unwrap_err().field, "email");
    }

    #[test]
    fn test_update_validation() {
        let update = ResourceUpdate {
            name: Some(String::new()),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = ResourceUpdate {
            longitude: Some(200.0),
            ..Default::default()
        };
        assert_eq!(update.validate().unwrap_err().field, "longitude");
    }
}
