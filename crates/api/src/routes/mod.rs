pub mod booking_draft;
pub mod health;
pub mod lead;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /lead             POST submit, GET stats
/// /booking-draft    POST submit, GET stats
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/lead", lead::router())
        .nest("/booking-draft", booking_draft::router())
}
