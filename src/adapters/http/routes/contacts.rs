use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    adapters::http::app_state::AppState,
    app_error::{AppError, AppResult},
    application::validators::is_valid_email,
    domain::entities::contact::ContactSubmission,
    use_cases::contacts::NewContactSubmission,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_contact))
        .route("/submissions", get(list_submissions))
        .route("/count", get(get_count))
        .route("/lookup", get(lookup_by_email))
}

#[derive(Deserialize)]
struct ContactPayload {
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    organization: String,
    website_url: String,
    #[serde(default)]
    interests: Vec<String>,
    message: Option<String>,
    #[serde(default)]
    receive_updates: bool,
}

#[derive(Serialize)]
struct SubmitResponse {
    id: Uuid,
}

/// POST /api/contact
/// Stores a contact-form submission. Unlike waitlist signups these are
/// sales leads, so no notifications go out.
async fn submit_contact(
    State(app_state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> AppResult<impl IntoResponse> {
    let email = payload.email.trim();
    if !is_valid_email(email) {
        return Err(AppError::InvalidInput("Invalid email format".into()));
    }

    let submission = app_state
        .contact_use_cases
        .submit(NewContactSubmission {
            first_name: payload.first_name,
            last_name: payload.last_name,
            email: email.to_string(),
            phone: payload.phone,
            organization: payload.organization,
            website_url: payload.website_url,
            interests: payload.interests,
            message: payload.message,
            receive_updates: payload.receive_updates,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(SubmitResponse { id: submission.id })))
}

#[derive(Serialize)]
struct SubmissionResponse {
    id: Uuid,
    first_name: String,
    last_name: String,
    email: String,
    phone: Option<String>,
    organization: String,
    website_url: String,
    interests: Vec<String>,
    message: Option<String>,
    receive_updates: bool,
    created_at: chrono::NaiveDateTime,
}

impl From<ContactSubmission> for SubmissionResponse {
    fn from(submission: ContactSubmission) -> Self {
        Self {
            id: submission.id,
            first_name: submission.first_name,
            last_name: submission.last_name,
            email: submission.email,
            phone: submission.phone,
            organization: submission.organization,
            website_url: submission.website_url,
            interests: submission.interests,
            message: submission.message,
            receive_updates: submission.receive_updates,
            created_at: submission.created_at,
        }
    }
}

async fn list_submissions(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let submissions = app_state.contact_use_cases.submissions().await?;

    let response: Vec<SubmissionResponse> = submissions
        .into_iter()
        .map(SubmissionResponse::from)
        .collect();
    Ok(Json(response))
}

#[derive(Serialize)]
struct CountResponse {
    count: i64,
}

async fn get_count(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let count = app_state.contact_use_cases.count().await?;

    Ok(Json(CountResponse { count }))
}

#[derive(Deserialize)]
struct LookupParams {
    email: String,
}

/// GET /api/contact/lookup?email=…
/// Exact-match lookup, `null` body when the email has never written in.
async fn lookup_by_email(
    State(app_state): State<AppState>,
    Query(params): Query<LookupParams>,
) -> AppResult<impl IntoResponse> {
    let submission = app_state
        .contact_use_cases
        .find_by_email(&params.email)
        .await?;

    Ok(Json(submission.map(SubmissionResponse::from)))
}
