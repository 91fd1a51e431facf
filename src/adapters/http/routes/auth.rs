use axum::{
    Json, Router,
    extract::State,
    response::IntoResponse,
    routing::post,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    domain::entities::waitlist::{SignupSource, WaitlistCollection},
    use_cases::waitlist::NewSignup,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/google/complete", post(complete_google_sign_in))
}

#[derive(Deserialize)]
struct CompletePayload {
    credential: String,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum CompleteResponse {
    Joined { id: Uuid, email: String },
    AlreadyJoined { email: String },
}

/// POST /api/auth/google/complete
/// Finishes a Google sign-in started on the site: verifies the ID token the
/// provider issued, then puts the account on the Ask Anything waitlist.
///
/// Signing in with an email that already joined is normal (people click the
/// button twice), so that case answers 200 instead of the usual 409, and
/// nothing is re-sent.
async fn complete_google_sign_in(
    State(app_state): State<AppState>,
    Json(payload): Json<CompletePayload>,
) -> AppResult<impl IntoResponse> {
    let identity = app_state
        .identity_verifier
        .verify(&payload.credential)
        .await?;

    let signup = NewSignup {
        email: identity.email.clone(),
        name: identity.name,
        avatar_url: identity.picture,
        source: SignupSource::GoogleOauth,
    };

    match app_state
        .waitlist_use_cases
        .join(WaitlistCollection::AskAnything, signup)
        .await
    {
        Ok(entry) => Ok(Json(CompleteResponse::Joined {
            id: entry.id,
            email: entry.email,
        })),
        Err(AppError::DuplicateEmail(_)) => Ok(Json(CompleteResponse::AlreadyJoined {
            email: identity.email,
        })),
        Err(err) => Err(err),
    }
}
