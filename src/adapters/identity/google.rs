use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::warn;

use crate::app_error::{AppError, AppResult};
use crate::use_cases::identity::{IdTokenVerifier, VerifiedIdentity};

const TOKENINFO_ENDPOINT: &str = "https://oauth2.googleapis.com/tokeninfo";

/// Validates Google ID tokens against Google's tokeninfo endpoint.
///
/// The endpoint checks the signature and expiry for us; what remains here is
/// making sure the token was minted for our client id and that Google has
/// verified the email.
#[derive(Clone)]
pub struct GoogleTokenVerifier {
    client: Client,
    endpoint: String,
    client_id: String,
}

impl GoogleTokenVerifier {
    pub fn new(client: Client, client_id: String) -> Self {
        Self {
            client,
            endpoint: TOKENINFO_ENDPOINT.to_string(),
            client_id,
        }
    }

    #[cfg(test)]
    fn with_endpoint(mut self, endpoint: String) -> Self {
        self.endpoint = endpoint;
        self
    }
}

/// Claims returned by the tokeninfo endpoint. Everything comes back as a
/// string, including booleans.
#[derive(Debug, Deserialize)]
struct TokenInfo {
    aud: String,
    email: String,
    #[serde(default)]
    email_verified: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    picture: Option<String>,
}

#[async_trait]
impl IdTokenVerifier for GoogleTokenVerifier {
    async fn verify(&self, credential: &str) -> AppResult<VerifiedIdentity> {
        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("id_token", credential)])
            .send()
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        if !response.status().is_success() {
            warn!(status = %response.status(), "tokeninfo rejected the credential");
            return Err(AppError::InvalidCredentials);
        }

        let info: TokenInfo = response
            .json()
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?;

        if info.aud != self.client_id {
            warn!("credential was issued for a different client id");
            return Err(AppError::InvalidCredentials);
        }
        if info.email_verified != "true" {
            warn!("credential carries an unverified email");
            return Err(AppError::InvalidCredentials);
        }

        Ok(VerifiedIdentity {
            email: info.email,
            name: info.name,
            picture: info.picture,
        })
    }
}
