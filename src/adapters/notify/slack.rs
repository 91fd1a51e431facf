use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;

use crate::app_error::{AppError, AppResult};
use crate::use_cases::notifications::{SignupAnnouncer, SignupEvent};

/// Posts signup announcements to a Slack incoming webhook.
///
/// The webhook URL is optional on purpose: environments without one (local
/// dev, previews) skip the announcement with a log line instead of failing.
#[derive(Clone)]
pub struct SlackAnnouncer {
    client: Client,
    webhook_url: Option<secrecy::SecretString>,
}

impl SlackAnnouncer {
    pub fn new(client: Client, webhook_url: Option<secrecy::SecretString>) -> Self {
        Self {
            client,
            webhook_url,
        }
    }
}

fn format_signup_message(event: &SignupEvent) -> String {
    let name = event.name.as_deref().unwrap_or("Not provided");
    let time = event.created_at.format("%b %-d, %Y, %-I:%M %p");
    let total = match event.total_signups {
        Some(count) => count.to_string(),
        None => "unknown".to_string(),
    };

    format!(
        "🎉 New Waitlist Signup!\n\n\
         📧 Email: {email}\n\
         👤 Name: {name}\n\
         🔐 Source: {source}\n\
         ⏰ Time: {time} UTC\n\
         📊 Total Signups: {total}",
        email = event.email,
        source = event.source.label(),
    )
}

#[async_trait]
impl SignupAnnouncer for SlackAnnouncer {
    async fn announce(&self, event: &SignupEvent) -> AppResult<()> {
        let Some(webhook_url) = &self.webhook_url else {
            tracing::warn!("SLACK_WEBHOOK_URL not configured, skipping signup announcement");
            return Ok(());
        };

        let body = serde_json::json!({ "text": format_signup_message(event) });
        self.client
            .post(webhook_url.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(())
    }
}
