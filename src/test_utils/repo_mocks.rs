//! In-memory mock implementations of the repository traits.
//!
//! Inserts stamp strictly increasing `created_at` values and enforce the
//! same per-email uniqueness the real schema does, so duplicate and
//! ordering behavior matches PostgreSQL.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use async_trait::async_trait;
use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::{
    app_error::{AppError, AppResult},
    application::use_cases::contacts::{
        CONTACT_DUPLICATE_MESSAGE, ContactRepo, NewContactSubmission,
    },
    application::use_cases::waitlist::{NewSignup, WAITLIST_DUPLICATE_MESSAGE, WaitlistRepo},
    domain::entities::contact::ContactSubmission,
    domain::entities::waitlist::{WaitlistCollection, WaitlistEntry},
    test_utils::test_datetime,
};

/// In-memory implementation of WaitlistRepo for testing.
#[derive(Default)]
pub struct InMemoryWaitlistRepo {
    entries: Mutex<Vec<WaitlistEntry>>,
    clock: AtomicI64,
    fail_counts: AtomicBool,
}

impl InMemoryWaitlistRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `count` call fail, to exercise the paths that
    /// tolerate an unavailable running total.
    pub fn fail_counts(&self) {
        self.fail_counts.store(true, Ordering::Relaxed);
    }

    fn next_created_at(&self) -> NaiveDateTime {
        let tick = self.clock.fetch_add(1, Ordering::Relaxed);
        test_datetime() + chrono::Duration::seconds(tick)
    }
}

#[async_trait]
impl WaitlistRepo for InMemoryWaitlistRepo {
    async fn find_by_email(
        &self,
        collection: WaitlistCollection,
        email: &str,
    ) -> AppResult<Option<WaitlistEntry>> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .find(|e| e.collection == collection && e.email == email)
            .cloned())
    }

    async fn insert(
        &self,
        collection: WaitlistCollection,
        signup: &NewSignup,
    ) -> AppResult<WaitlistEntry> {
        let mut entries = self.entries.lock().unwrap();

        if entries
            .iter()
            .any(|e| e.collection == collection && e.email == signup.email)
        {
            return Err(AppError::DuplicateEmail(WAITLIST_DUPLICATE_MESSAGE.into()));
        }

        let entry = WaitlistEntry {
            id: Uuid::new_v4(),
            collection,
            email: signup.email.clone(),
            name: signup.name.clone(),
            avatar_url: signup.avatar_url.clone(),
            is_oauth: signup.source.is_oauth(),
            created_at: self.next_created_at(),
        };
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn list_newest_first(
        &self,
        collection: WaitlistCollection,
    ) -> AppResult<Vec<WaitlistEntry>> {
        let mut entries: Vec<WaitlistEntry> = self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.collection == collection)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(entries)
    }

    async fn count(&self, collection: WaitlistCollection) -> AppResult<i64> {
        if self.fail_counts.load(Ordering::Relaxed) {
            return Err(AppError::Database("Database operation failed".into()));
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.collection == collection)
            .count() as i64)
    }
}

/// In-memory implementation of ContactRepo for testing.
#[derive(Default)]
pub struct InMemoryContactRepo {
    submissions: Mutex<Vec<ContactSubmission>>,
    clock: AtomicI64,
}

impl InMemoryContactRepo {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_created_at(&self) -> NaiveDateTime {
        let tick = self.clock.fetch_add(1, Ordering::Relaxed);
        test_datetime() + chrono::Duration::seconds(tick)
    }
}

#[async_trait]
impl ContactRepo for InMemoryContactRepo {
    async fn find_by_email(&self, email: &str) -> AppResult<Option<ContactSubmission>> {
        Ok(self
            .submissions
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.email == email)
            .cloned())
    }

    async fn insert(&self, submission: &NewContactSubmission) -> AppResult<ContactSubmission> {
        let mut submissions = self.submissions.lock().unwrap();

        if submissions.iter().any(|s| s.email == submission.email) {
            return Err(AppError::DuplicateEmail(CONTACT_DUPLICATE_MESSAGE.into()));
        }

        let stored = ContactSubmission {
            id: Uuid::new_v4(),
            first_name: submission.first_name.clone(),
            last_name: submission.last_name.clone(),
            email: submission.email.clone(),
            phone: submission.phone.clone(),
            organization: submission.organization.clone(),
            website_url: submission.website_url.clone(),
            interests: submission.interests.clone(),
            message: submission.message.clone(),
            receive_updates: submission.receive_updates,
            created_at: self.next_created_at(),
        };
        submissions.push(stored.clone());
        Ok(stored)
    }

    async fn list_newest_first(&self) -> AppResult<Vec<ContactSubmission>> {
        let mut submissions: Vec<ContactSubmission> =
            self.submissions.lock().unwrap().iter().cloned().collect();
        submissions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(submissions)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self.submissions.lock().unwrap().len() as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn waitlist_insert_assigns_increasing_timestamps() {
        let repo = InMemoryWaitlistRepo::new();

        let first = repo
            .insert(WaitlistCollection::GistAnswers, &NewSignup::form("a@x.com"))
            .await
            .unwrap();
        let second = repo
            .insert(WaitlistCollection::GistAnswers, &NewSignup::form("b@x.com"))
            .await
            .unwrap();

        assert!(second.created_at > first.created_at);
    }

    #[tokio::test]
    async fn waitlist_insert_enforces_uniqueness_per_collection() {
        let repo = InMemoryWaitlistRepo::new();

        repo.insert(WaitlistCollection::GistAnswers, &NewSignup::form("a@x.com"))
            .await
            .unwrap();

        let dup = repo
            .insert(WaitlistCollection::GistAnswers, &NewSignup::form("a@x.com"))
            .await;
        assert!(matches!(dup, Err(AppError::DuplicateEmail(_))));

        // Same email in the other collection stays allowed.
        repo.insert(WaitlistCollection::AskAnything, &NewSignup::form("a@x.com"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn failing_counts_only_affects_count() {
        let repo = InMemoryWaitlistRepo::new();
        repo.fail_counts();

        repo.insert(WaitlistCollection::GistAnswers, &NewSignup::form("a@x.com"))
            .await
            .unwrap();

        assert!(repo.count(WaitlistCollection::GistAnswers).await.is_err());
        assert!(
            repo.find_by_email(WaitlistCollection::GistAnswers, "a@x.com")
                .await
                .unwrap()
                .is_some()
        );
    }
}
