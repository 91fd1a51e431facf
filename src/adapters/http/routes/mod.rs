pub mod auth;
pub mod contacts;
pub mod waitlist;

use axum::Router;

use crate::adapters::http::app_state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .nest("/waitlist", waitlist::router())
        .nest("/contact", contacts::router())
        .nest("/auth", auth::router())
}
