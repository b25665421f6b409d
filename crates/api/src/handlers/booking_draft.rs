//! Handlers for booking wizard drafts.
//!
//! Every wizard submission is stored as an immutable draft. A draft posted at
//! the final step with contact details also becomes a lead.

use alps_core::booking::BookingDraftRequest;
use alps_core::lead::NewLead;
use alps_db::models::booking_draft::{BookingDraftRecord, DraftSummary};
use alps_db::repositories::BookingDraftRepo;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::handlers::lead::create_lead;
use crate::response::{DraftAccepted, DraftStats};
use crate::state::AppState;

pub const MSG_INVALID_BOOKING: &str = "Invalid booking data";
pub const MSG_DRAFT_ACCEPTED: &str = "Booking draft saved successfully";

/// POST /api/booking-draft
pub async fn submit_draft(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<BookingDraftRequest>,
) -> AppResult<impl IntoResponse> {
    let today = chrono::Utc::now().date_naive();
    request.check_as_of(today).map_err(|errors| AppError::Invalid {
        message: MSG_INVALID_BOOKING,
        errors,
    })?;

    let record = BookingDraftRepo::create(&state.pool, request.step, request.payload).await?;

    tracing::info!(
        draft_id = %record.id,
        step = record.step,
        contact = ?record.payload.contact.as_ref().map(|c| c.name.as_str()),
        package_id = ?record.payload.package.as_ref().map(|p| p.package_id.as_str()),
        "Booking draft created",
    );

    if record.is_final() && record.payload.contact.is_some() {
        lead_from_booking(&state, &record).await;
    }

    Ok((
        StatusCode::CREATED,
        Json(DraftAccepted {
            success: true,
            message: MSG_DRAFT_ACCEPTED,
            draft_id: record.id,
        }),
    ))
}

/// GET /api/booking-draft
pub async fn draft_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let total_drafts = BookingDraftRepo::count(&state.pool).await;
    let completed_bookings = BookingDraftRepo::count_final(&state.pool).await;
    let recent_drafts = BookingDraftRepo::recent(&state.pool, state.config.recent_limit)
        .await
        .iter()
        .map(DraftSummary::from)
        .collect();

    Ok(Json(DraftStats {
        total_drafts,
        completed_bookings,
        recent_drafts,
    }))
}

/// Derive and store the lead for a final draft.
///
/// The draft is already saved; a failure here is logged and does not change
/// the response.
async fn lead_from_booking(state: &AppState, record: &BookingDraftRecord) {
    let result = match NewLead::from_booking(&record.payload) {
        Ok(new) => create_lead(state, new).await,
        Err(e) => Err(AppError::Core(e)),
    };

    match result {
        Ok(lead) => {
            tracing::info!(draft_id = %record.id, lead_id = %lead.id, "Lead created from booking");
        }
        Err(e) => {
            tracing::error!(draft_id = %record.id, error = %e, "Failed to create lead from booking");
        }
    }
}
