use chrono::NaiveDateTime;
use serde::Serialize;
use uuid::Uuid;

/// The fixed set of interest checkboxes on the contact form. Submissions may
/// only carry labels from this list.
pub const INTEREST_LABELS: &[&str] = &[
    "Content licensing",
    "Gist Ads (marketers)",
    "Gist Ads (publishers)",
    "Gist Answers",
    "Gist Attribution",
    "Other",
];

pub fn is_known_interest(label: &str) -> bool {
    INTEREST_LABELS.contains(&label)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactSubmission {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: String,
    pub website_url: String,
    pub interests: Vec<String>,
    pub message: Option<String>,
    pub receive_updates: bool,
    pub created_at: NaiveDateTime,
}
