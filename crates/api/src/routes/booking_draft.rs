//! Route definitions for booking wizard drafts.

use axum::routing::get;
use axum::Router;

use crate::handlers::booking_draft;
use crate::state::AppState;

/// Draft routes mounted at `/booking-draft`.
///
/// ```text
/// POST   /    -> submit_draft
/// GET    /    -> draft_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(booking_draft::draft_stats).post(booking_draft::submit_draft),
    )
}
