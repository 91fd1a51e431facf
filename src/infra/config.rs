use std::env;
use std::net::SocketAddr;

use axum::http::HeaderValue;
use secrecy::SecretString;
use url::Url;

pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: HeaderValue,
    pub resend_api_key: SecretString,
    /// Sender shown on confirmation emails, e.g. `Gist Answers <onboarding@resend.dev>`.
    pub email_from: String,
    /// Incoming-webhook URL for signup announcements. Absent means the
    /// announcement step is skipped.
    pub slack_webhook_url: Option<SecretString>,
    /// OAuth client ID that incoming Google ID tokens must be issued for.
    pub google_client_id: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let bind_addr: SocketAddr = env::var("BIND_ADDR")
            .unwrap_or("127.0.0.1:3001".to_string())
            .parse()
            .expect("BIND_ADDR must be a valid socket address");

        let cors_origin: HeaderValue = env::var("CORS_ORIGIN")
            .unwrap_or("http://localhost:3000".to_string())
            .parse()
            .expect("CORS_ORIGIN must be a valid header value");

        let resend_api_key: SecretString =
            SecretString::new(env::var("RESEND_API_KEY").expect("RESEND_API_KEY must be set").into());

        let email_from = env::var("EMAIL_FROM")
            .unwrap_or("Gist Answers <onboarding@resend.dev>".to_string());

        // An empty value reads the same as an unset one so a blank line in
        // .env does not produce a webhook target of "".
        let slack_webhook_url: Option<SecretString> = env::var("SLACK_WEBHOOK_URL")
            .ok()
            .filter(|url| !url.is_empty())
            .map(|url| {
                Url::parse(&url).expect("SLACK_WEBHOOK_URL must be a valid URL");
                SecretString::new(url.into())
            });

        let google_client_id = env::var("GOOGLE_CLIENT_ID").expect("GOOGLE_CLIENT_ID must be set");

        Self {
            database_url,
            bind_addr,
            cors_origin,
            resend_api_key,
            email_from,
            slack_webhook_url,
            google_client_id,
        }
    }
}
