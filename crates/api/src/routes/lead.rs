//! Route definitions for lead intake.

use axum::routing::get;
use axum::Router;

use crate::handlers::lead;
use crate::state::AppState;

/// Lead routes mounted at `/lead`.
///
/// ```text
/// POST   /    -> submit_lead
/// GET    /    -> lead_stats
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(lead::lead_stats).post(lead::submit_lead))
}
