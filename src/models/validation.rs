//! Field-level validation shared by request payloads.

use thiserror::Error;

/// A request field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Check a string's length in characters against an inclusive range.
pub fn check_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min {
        return Err(ValidationError::new(
            field,
            format!("must be at least {} character{}", min, plural(min)),
        ));
    }
    if len > max {
        return Err(ValidationError::new(
            field,
            format!("must be at most {} character{}", max, plural(max)),
        ));
    }
    Ok(())
}

pub fn check_optional_length(
    field: &'static str,
    value: Option<&str>,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    match value {
        Some(v) => check_length(field, v, min, max),
        None => Ok(()),
    }
}

/// Check a float lies in `[min, max]`. NaN is rejected.
pub fn check_range_f64(
    field: &'static str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("must be between {} and {}", min, max),
        ))
    }
}

pub fn check_range_i32(
    field: &'static str,
    value: i32,
    min: i32,
    max: i32,
) -> Result<(), ValidationError> {
    if (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            format!("must be between {} and {}", min, max),
        ))
    }
}

pub fn check_latitude(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| check_range_f64(field, v, -90.0, 90.0))
}

pub fn check_longitude(field: &'static str, value: Option<f64>) -> Result<(), ValidationError> {
    value.map_or(Ok(()), |v| check_range_f64(field, v, -180.0, 180.0))
}

/// Syntactic email check: one `@`, a non-empty local part and a dotted domain.
pub fn check_email(field: &'static str, value: Option<&str>) -> Result<(), ValidationError> {
    let Some(email) = value else {
        return Ok(());
    };
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(ValidationError::new(
            field,
            "value is not a valid email address",
        ))
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.len() > 254 || email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || local.len() > 64 || domain.contains('@') {
        return false;
    }
    if local.starts_with('.') || local.ends_with('.') || local.contains("..") {
        return false;
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }
    labels.iter().all(|label| {
        !label.is_empty()
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_alphanumeric() || c == '-')
    })
}

fn plural(n: usize) -> &'static str {
    if n == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_length() {
        assert!(check_length("name", "Food Pantry", 1, 255).is_ok());
        let err = check_length("name", "", 1, 255).unwrap_err();
        assert_eq!(err.field, "name");
        assert_eq!(err.to_string(), "name: must be at least 1 character");
        assert!(check_length("county", &"x".repeat(101), 1, 100).is_err());
        // Counted in characters, not bytes
        assert!(check_length("county", &"é".repeat(100), 1, 100).is_ok());
    }

    #[test]
    fn test_coordinate_ranges() {
        assert!(check_latitude("latitude", Some(46.41)).is_ok());
        assert!(check_latitude("latitude", Some(90.0)).is_ok());
        assert!(check_latitude("latitude", Some(90.5)).is_err());
        assert!(check_latitude("latitude", Some(f64::NAN)).is_err());
        assert!(check_latitude("latitude", None).is_ok());
        assert!(check_longitude("longitude", Some(-86.65)).is_ok());
        assert!(check_longitude("longitude", Some(-180.1)).is_err());
    }

    #[test]
    fn test_check_email() {
        assert!(check_email("email", Some("help@alger-pantry.org")).is_ok());
        assert!(check_email("email", Some("first.last@mail.example.com")).is_ok());
        assert!(check_email("email", None).is_ok());
        assert!(check_email("email", Some("not-an-email")).is_err());
        assert!(check_email("email", Some("a@b")).is_err());
        assert!(check_email("email", Some("@example.com")).is_err());
        assert!(check_email("email", Some("a b@example.com")).is_err());
        assert!(check_email("email", Some("a@@example.com")).is_err());
        assert!(check_email("email", Some("a@example..com")).is_err());
    }

    #[test]
    fn test_check_range_i32() {
        assert!(check_range_i32("risk_score", 0, 0, 100).is_ok());
        assert!(check_range_i32("risk_score", 100, 0, 100).is_ok());
        assert!(check_range_i32("risk_score", 101, 0, 100).is_err());
    }
}
