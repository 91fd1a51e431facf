use async_trait::async_trait;
use reqwest::Client;
use secrecy::ExposeSecret;
use serde::Serialize;

use crate::app_error::{AppError, AppResult};
use crate::use_cases::notifications::EmailSender;

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Clone)]
pub struct ResendEmailSender {
    client: Client,
    endpoint: String,
    api_key: secrecy::SecretString,
    from: String,
}

impl ResendEmailSender {
    pub fn new(client: Client, api_key: secrecy::SecretString, from: String) -> Self {
        Self {
            client,
            endpoint: RESEND_ENDPOINT.to_string(),
            api_key,
            from,
        }
    }

    #[cfg(test)]
    fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }
}

#[derive(Serialize)]
struct ResendReq<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[async_trait]
impl EmailSender for ResendEmailSender {
    async fn send(&self, to: &str, subject: &str, html: &str) -> AppResult<()> {
        let body = ResendReq {
            from: &self.from,
            to: [to],
            subject,
            html,
        };
        self.client
            .post(&self.endpoint)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(())
    }
}
