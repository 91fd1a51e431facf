//! Test data factories for creating valid test fixtures.
//!
//! Each factory function creates a complete, valid object with sensible defaults.
//! Use the closure parameter to override specific fields as needed.

use chrono::NaiveDateTime;

use crate::use_cases::contacts::NewContactSubmission;

/// Create a contact-form input with sensible defaults.
pub fn create_test_contact_input(
    overrides: impl FnOnce(&mut NewContactSubmission),
) -> NewContactSubmission {
    let mut input = NewContactSubmission {
        first_name: "Dana".to_string(),
        last_name: "Reyes".to_string(),
        email: "dana@dailynews.com".to_string(),
        phone: Some("+1 555 0100".to_string()),
        organization: "Daily News".to_string(),
        website_url: "https://dailynews.com".to_string(),
        interests: vec!["Content licensing".to_string()],
        message: Some("Interested in licensing our archive.".to_string()),
        receive_updates: true,
    };
    overrides(&mut input);
    input
}

/// Fixed base timestamp the in-memory repos count up from, so ordering
/// assertions are deterministic.
pub fn test_datetime() -> NaiveDateTime {
    NaiveDateTime::parse_from_str("2024-01-15 12:00:00", "%Y-%m-%d %H:%M:%S").unwrap()
}
