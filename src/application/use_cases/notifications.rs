use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::app_error::AppResult;
use crate::application::email_templates;
use crate::domain::entities::waitlist::{SignupSource, WaitlistCollection};

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()>;
}

#[async_trait]
pub trait SignupAnnouncer: Send + Sync {
    async fn announce(&self, event: &SignupEvent) -> AppResult<()>;
}

/// Snapshot of a signup handed to the notifier. Owned data only, so the
/// spawned tasks outlive the request that produced it.
#[derive(Debug, Clone)]
pub struct SignupEvent {
    pub collection: WaitlistCollection,
    pub email: String,
    pub name: Option<String>,
    pub source: SignupSource,
    pub created_at: NaiveDateTime,
    /// Collection size including this signup, when the count was available.
    pub total_signups: Option<i64>,
}

/// Fans a signup out to the confirmation email and the team chat channel.
///
/// Both side effects run in detached tasks and each failure is contained to
/// its own task: the signup itself has already been stored and must not be
/// rolled back or re-reported because a notification bounced.
#[derive(Clone)]
pub struct SignupNotifier {
    email: Arc<dyn EmailSender>,
    announcer: Arc<dyn SignupAnnouncer>,
}

impl SignupNotifier {
    pub fn new(email: Arc<dyn EmailSender>, announcer: Arc<dyn SignupAnnouncer>) -> Self {
        Self { email, announcer }
    }

    pub fn dispatch(&self, event: SignupEvent) {
        let email = self.email.clone();
        let email_event = event.clone();
        tokio::spawn(async move {
            send_confirmation(email.as_ref(), email_event).await;
        });

        let announcer = self.announcer.clone();
        tokio::spawn(async move {
            announce_signup(announcer.as_ref(), event).await;
        });
    }
}

pub(crate) async fn send_confirmation(email: &dyn EmailSender, event: SignupEvent) {
    let (subject, html) = email_templates::waitlist_confirmation_email(event.collection);
    if let Err(err) = email.send(&event.email, &subject, &html).await {
        tracing::error!(error = %err, to = %event.email, "failed to send waitlist confirmation email");
    }
}

pub(crate) async fn announce_signup(announcer: &dyn SignupAnnouncer, event: SignupEvent) {
    if let Err(err) = announcer.announce(&event).await {
        tracing::error!(error = %err, "failed to announce waitlist signup");
    }
}
