use axum::{
    Json, Router,
    extract::{Path, State},
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
    domain::entities::waitlist::{SignupSource, WaitlistCollection, WaitlistEntry},
    use_cases::waitlist::NewSignup,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{collection}", post(join_waitlist))
        .route("/{collection}/entries", get(list_entries))
        .route("/{collection}/count", get(get_count))
}

/// Resolves a path slug like `gist-answers` to its collection.
/// Unknown slugs read as a missing resource, not bad input.
fn parse_collection(slug: &str) -> AppResult<WaitlistCollection> {
    slug.parse::<WaitlistCollection>()
        .map_err(|_| AppError::NotFound)
}

#[derive(Deserialize)]
struct JoinPayload {
    email: String,
    name: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Serialize)]
struct JoinResponse {
    id: Uuid,
}

/// POST /api/waitlist/{collection}
/// Adds an email to the collection's waitlist and kicks off the
/// confirmation email and team announcement.
async fn join_waitlist(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
    Json(payload): Json<JoinPayload>,
) -> AppResult<impl IntoResponse> {
    let collection = parse_collection(&slug)?;

    let email = payload.email.trim();
    if !is_valid_email(email) {
        return Err(AppError::InvalidInput("Invalid email format".into()));
    }

    let entry = app_state
        .waitlist_use_cases
        .join(
            collection,
            NewSignup {
                email: email.to_string(),
                name: payload.name,
                avatar_url: payload.avatar_url,
                source: SignupSource::Form,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(JoinResponse { id: entry.id })))
}

#[derive(Serialize)]
struct EntryResponse {
    id: Uuid,
    email: String,
    name: Option<String>,
    avatar_url: Option<String>,
    is_oauth: bool,
    created_at: chrono::NaiveDateTime,
}

impl From<WaitlistEntry> for EntryResponse {
    fn from(entry: WaitlistEntry) -> Self {
        Self {
            id: entry.id,
            email: entry.email,
            name: entry.name,
            avatar_url: entry.avatar_url,
            is_oauth: entry.is_oauth,
            created_at: entry.created_at,
        }
    }
}

async fn list_entries(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let collection = parse_collection(&slug)?;

    let entries = app_state.waitlist_use_cases.entries(collection).await?;

    let response: Vec<EntryResponse> = entries.into_iter().map(EntryResponse::from).collect();
    Ok(Json(response))
}

#[derive(Serialize)]
struct CountResponse {
    count: i64,
}

async fn get_count(
    State(app_state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let collection = parse_collection(&slug)?;

    let count = app_state.waitlist_use_cases.count(collection).await?;

    Ok(Json(CountResponse { count }))
}
