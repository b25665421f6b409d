//! Handlers for direct lead intake.
//!
//! `POST /api/lead` validates the contact form, stores the lead and raises a
//! `lead.created` event for the notifier. `GET /api/lead` reports counters.

use alps_core::lead::{LeadForm, NewLead};
use alps_db::models::lead::{Lead, LeadSummary};
use alps_db::repositories::LeadRepo;
use alps_events::notifier::lead_created_event;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::response::{LeadAccepted, LeadStats};
use crate::state::AppState;

pub const MSG_INVALID_FORM: &str = "Invalid form data";
pub const MSG_LEAD_ACCEPTED: &str = "Lead submitted successfully";

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/lead
pub async fn submit_lead(
    State(state): State<AppState>,
    JsonBody(form): JsonBody<LeadForm>,
) -> AppResult<impl IntoResponse> {
    form.check().map_err(|errors| AppError::Invalid {
        message: MSG_INVALID_FORM,
        errors,
    })?;

    let lead = create_lead(&state, NewLead::from(form)).await?;

    Ok((
        StatusCode::CREATED,
        Json(LeadAccepted {
            success: true,
            message: MSG_LEAD_ACCEPTED,
            lead_id: lead.id,
        }),
    ))
}

/// GET /api/lead
///
/// Total count plus the most recent leads, oldest first.
pub async fn lead_stats(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let total_leads = LeadRepo::count(&state.pool).await;
    let recent_leads = LeadRepo::recent(&state.pool, state.config.recent_limit)
        .await
        .iter()
        .map(LeadSummary::from)
        .collect();

    Ok(Json(LeadStats {
        total_leads,
        recent_leads,
    }))
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// Store a lead and announce it on the event bus.
///
/// Used by both the contact form and the final booking-draft submission.
pub(crate) async fn create_lead(state: &AppState, new: NewLead) -> AppResult<Lead> {
    let lead = LeadRepo::create(&state.pool, new).await?;

    tracing::info!(
        lead_id = %lead.id,
        name = %lead.name,
        email = %lead.email,
        source = lead.source.as_str(),
        package_id = ?lead.package_id,
        "New lead received",
    );

    state.event_bus.publish(lead_created_event(&lead));
    Ok(lead)
}
