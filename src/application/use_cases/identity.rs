use async_trait::async_trait;

use crate::app_error::AppResult;

/// Claims taken from a federated sign-in credential after it passed
/// verification.
#[derive(Debug, Clone, PartialEq)]
pub struct VerifiedIdentity {
    pub email: String,
    pub name: Option<String>,
    pub picture: Option<String>,
}

#[async_trait]
pub trait IdTokenVerifier: Send + Sync {
    /// Checks the raw credential against the identity provider and returns
    /// its claims. Any verification failure maps to `InvalidCredentials`.
    async fn verify(&self, credential: &str) -> AppResult<VerifiedIdentity>;
}
