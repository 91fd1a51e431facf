use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::domain::entities::contact::{ContactSubmission, is_known_interest};

/// User-facing message returned when an email has already been through the
/// contact form.
pub const CONTACT_DUPLICATE_MESSAGE: &str = "This email has already submitted a contact form!";

#[async_trait]
pub trait ContactRepo: Send + Sync {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<ContactSubmission>>;
    async fn insert(&self, submission: &NewContactSubmission) -> AppResult<ContactSubmission>;
    async fn list_newest_first(&self) -> AppResult<Vec<ContactSubmission>>;
    async fn count(&self) -> AppResult<i64>;
}

#[derive(Debug, Clone)]
pub struct NewContactSubmission {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub organization: String,
    pub website_url: String,
    pub interests: Vec<String>,
    pub message: Option<String>,
    pub receive_updates: bool,
}

#[derive(Clone)]
pub struct ContactUseCases {
    repo: Arc<dyn ContactRepo>,
}

impl ContactUseCases {
    pub fn new(repo: Arc<dyn ContactRepo>) -> Self {
        Self { repo }
    }

    /// Stores the submission unless the email has already sent one. Contact
    /// submissions are sales leads, not signups, so nothing is emailed or
    /// announced here.
    #[instrument(skip(self, submission))]
    pub async fn submit(
        &self,
        mut submission: NewContactSubmission,
    ) -> AppResult<ContactSubmission> {
        submission.email = submission.email.trim().to_string();
        if submission.email.is_empty() {
            return Err(AppError::InvalidInput("Email is required".into()));
        }
        submission.interests = normalize_interests(submission.interests)?;

        if self
            .repo
            .find_by_email(&submission.email)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateEmail(CONTACT_DUPLICATE_MESSAGE.into()));
        }

        self.repo.insert(&submission).await
    }

    pub async fn submissions(&self) -> AppResult<Vec<ContactSubmission>> {
        self.repo.list_newest_first().await
    }

    pub async fn count(&self) -> AppResult<i64> {
        self.repo.count().await
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<ContactSubmission>> {
        self.repo.find_by_email(email.trim()).await
    }
}

/// Rejects labels outside the fixed interest list and drops repeats while
/// keeping submission order. An empty selection is allowed.
fn normalize_interests(interests: Vec<String>) -> AppResult<Vec<String>> {
    let mut kept: Vec<String> = Vec::with_capacity(interests.len());
    for label in interests {
        if !is_known_interest(&label) {
            return Err(AppError::InvalidInput(format!("Unknown interest: {label}")));
        }
        if !kept.contains(&label) {
            kept.push(label);
        }
    }
    Ok(kept)
}
