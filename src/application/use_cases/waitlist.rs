use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use crate::app_error::{AppError, AppResult};
use crate::application::use_cases::notifications::{SignupEvent, SignupNotifier};
use crate::domain::entities::waitlist::{SignupSource, WaitlistCollection, WaitlistEntry};

/// User-facing message returned when an email is already on a waitlist.
pub const WAITLIST_DUPLICATE_MESSAGE: &str = "This email is already on the waitlist!";

#[async_trait]
pub trait WaitlistRepo: Send + Sync {
    async fn find_by_email(
        &self,
        collection: WaitlistCollection,
        email: &str,
    ) -> AppResult<Option<WaitlistEntry>>;
    async fn insert(
        &self,
        collection: WaitlistCollection,
        signup: &NewSignup,
    ) -> AppResult<WaitlistEntry>;
    async fn list_newest_first(
        &self,
        collection: WaitlistCollection,
    ) -> AppResult<Vec<WaitlistEntry>>;
    async fn count(&self, collection: WaitlistCollection) -> AppResult<i64>;
}

/// A signup about to be stored. Name and avatar are only present for
/// federated signups; the form collects just the email address.
#[derive(Debug, Clone)]
pub struct NewSignup {
    pub email: String,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub source: SignupSource,
}

impl NewSignup {
    pub fn form(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: None,
            avatar_url: None,
            source: SignupSource::Form,
        }
    }
}

#[derive(Clone)]
pub struct WaitlistUseCases {
    repo: Arc<dyn WaitlistRepo>,
    notifier: SignupNotifier,
}

impl WaitlistUseCases {
    pub fn new(repo: Arc<dyn WaitlistRepo>, notifier: SignupNotifier) -> Self {
        Self { repo, notifier }
    }

    /// Stores the signup unless the email is already in the collection.
    ///
    /// The duplicate check runs before the insert so callers get the friendly
    /// message; the unique index underneath catches the race where two
    /// requests pass the check at once.
    #[instrument(skip(self, signup))]
    pub async fn submit(
        &self,
        collection: WaitlistCollection,
        mut signup: NewSignup,
    ) -> AppResult<WaitlistEntry> {
        signup.email = signup.email.trim().to_string();
        if signup.email.is_empty() {
            return Err(AppError::InvalidInput("Email is required".into()));
        }

        if self
            .repo
            .find_by_email(collection, &signup.email)
            .await?
            .is_some()
        {
            return Err(AppError::DuplicateEmail(WAITLIST_DUPLICATE_MESSAGE.into()));
        }

        self.repo.insert(collection, &signup).await
    }

    /// Full signup flow: store the entry, then fan out notifications. By the
    /// time the notifier runs the entry is committed, so notification
    /// failures never surface to the caller.
    #[instrument(skip(self, signup))]
    pub async fn join(
        &self,
        collection: WaitlistCollection,
        signup: NewSignup,
    ) -> AppResult<WaitlistEntry> {
        let source = signup.source;
        let entry = self.submit(collection, signup).await?;

        let total_signups = match self.repo.count(collection).await {
            Ok(count) => Some(count),
            Err(err) => {
                tracing::warn!(error = %err, "signup count unavailable for announcement");
                None
            }
        };

        self.notifier.dispatch(SignupEvent {
            collection,
            email: entry.email.clone(),
            name: entry.name.clone(),
            source,
            created_at: entry.created_at,
            total_signups,
        });

        Ok(entry)
    }

    pub async fn entries(&self, collection: WaitlistCollection) -> AppResult<Vec<WaitlistEntry>> {
        self.repo.list_newest_first(collection).await
    }

    pub async fn count(&self, collection: WaitlistCollection) -> AppResult<i64> {
        self.repo.count(collection).await
    }
}
