//! Input validation for API requests.
//!
//! Validators return `Result<(), String>`; handlers map failures into
//! `ApiError::validation` so every rejection carries the standard envelope.

use crate::db::models::common::normalize_date;

pub const GENDERS: [&str; 3] = ["male", "female", "other"];
pub const MEMBER_STATUSES: [&str; 2] = ["active", "inactive"];
pub const USER_ROLES: [&str; 3] = ["admin", "staff", "trainer"];
pub const ENROLLMENT_STATUSES: [&str; 4] = ["enrolled", "cancelled", "attended", "missed"];
pub const SUBSCRIPTION_STATUSES: [&str; 4] = ["active", "expired", "paused", "cancelled"];

/// Borrow a request field as a non-empty string, treating `None` and `""`
/// alike.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// Validate that a value belongs to a fixed set.
pub fn validate_one_of(value: &str, field: &str, allowed: &[&str]) -> Result<(), String> {
    if allowed.contains(&value) {
        Ok(())
    } else {
        Err(format!(
            "Invalid {}. Must be one of: {}",
            field,
            allowed.join(", ")
        ))
    }
}

/// Validate that a value parses as an RFC 3339 timestamp or a plain date.
pub fn validate_datetime(value: &str, field: &str) -> Result<(), String> {
    if normalize_date(value).is_some() {
        Ok(())
    } else {
        Err(format!("Invalid {} format", field))
    }
}
