//! Test app state builder for HTTP-level integration testing.
//!
//! Builds a minimal `AppState` over the in-memory repos, a stub identity
//! verifier, and (optionally) a recording notifier.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::HeaderValue;
use secrecy::SecretString;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::use_cases::identity::{IdTokenVerifier, VerifiedIdentity},
    infra::config::AppConfig,
    test_utils::{
        InMemoryContactRepo, InMemoryWaitlistRepo, SentEmail, null_notifier, recording_notifier,
    },
    use_cases::{
        contacts::ContactUseCases,
        notifications::{SignupEvent, SignupNotifier},
        waitlist::WaitlistUseCases,
    },
};

/// Stub verifier: rejects every credential unless primed with an identity,
/// in which case any credential resolves to that identity.
pub struct StubIdTokenVerifier {
    identity: Option<VerifiedIdentity>,
}

#[async_trait]
impl IdTokenVerifier for StubIdTokenVerifier {
    async fn verify(&self, _credential: &str) -> AppResult<VerifiedIdentity> {
        self.identity.clone().ok_or(AppError::InvalidCredentials)
    }
}

/// Builder for creating `AppState` with in-memory mocks for testing.
///
/// # Example
///
/// ```ignore
/// let builder = TestAppStateBuilder::new().with_identity(identity);
/// let repo = builder.waitlist_repo();
/// let server = TestServer::new(router().with_state(builder.build())).unwrap();
/// ```
pub struct TestAppStateBuilder {
    waitlist_repo: Arc<InMemoryWaitlistRepo>,
    contact_repo: Arc<InMemoryContactRepo>,
    identity: Option<VerifiedIdentity>,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            waitlist_repo: Arc::new(InMemoryWaitlistRepo::new()),
            contact_repo: Arc::new(InMemoryContactRepo::new()),
            identity: None,
        }
    }

    /// Handle on the waitlist repo, for seeding or asserting past the HTTP
    /// surface. Grab it before `build()` consumes the builder.
    pub fn waitlist_repo(&self) -> Arc<InMemoryWaitlistRepo> {
        self.waitlist_repo.clone()
    }

    pub fn contact_repo(&self) -> Arc<InMemoryContactRepo> {
        self.contact_repo.clone()
    }

    /// Make the identity verifier accept any credential as this identity.
    pub fn with_identity(mut self, identity: VerifiedIdentity) -> Self {
        self.identity = Some(identity);
        self
    }

    /// Build the AppState with a notifier whose side effects go nowhere.
    pub fn build(self) -> AppState {
        self.build_with_notifier(null_notifier())
    }

    /// Build with a recording notifier.
    /// Returns (AppState, captured emails, captured announcements).
    pub fn build_with_recording_notifier(
        self,
    ) -> (
        AppState,
        Arc<Mutex<Vec<SentEmail>>>,
        Arc<Mutex<Vec<SignupEvent>>>,
    ) {
        let (notifier, sent, seen) = recording_notifier();
        (self.build_with_notifier(notifier), sent, seen)
    }

    fn build_with_notifier(self, notifier: SignupNotifier) -> AppState {
        let waitlist_use_cases = Arc::new(WaitlistUseCases::new(self.waitlist_repo, notifier));
        let contact_use_cases = Arc::new(ContactUseCases::new(self.contact_repo));
        let identity_verifier: Arc<dyn IdTokenVerifier> = Arc::new(StubIdTokenVerifier {
            identity: self.identity,
        });

        AppState {
            config: Arc::new(test_config()),
            waitlist_use_cases,
            contact_use_cases,
            identity_verifier,
        }
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal config for handler tests; nothing in it reaches the network.
pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: String::new(),
        bind_addr: "127.0.0.1:3001".parse::<SocketAddr>().unwrap(),
        cors_origin: HeaderValue::from_static("http://localhost:3000"),
        resend_api_key: SecretString::new("test_resend_key".into()),
        email_from: "Gist Answers <onboarding@resend.dev>".to_string(),
        slack_webhook_url: None,
        google_client_id: "test-client-id.apps.googleusercontent.com".to_string(),
    }
}
