//! Success envelopes returned by the API handlers.
//!
//! Writes answer `{ success: true, message, <id> }`; the stats endpoints
//! return their counters directly.

use alps_core::types::RecordId;
use alps_db::models::booking_draft::DraftSummary;
use alps_db::models::lead::LeadSummary;
use serde::Serialize;

/// `201` body of `POST /lead`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadAccepted {
    pub success: bool,
    pub message: &'static str,
    pub lead_id: RecordId,
}

/// `201` body of `POST /booking-draft`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftAccepted {
    pub success: bool,
    pub message: &'static str,
    pub draft_id: RecordId,
}

/// Body of `GET /lead`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadStats {
    pub total_leads: usize,
    pub recent_leads: Vec<LeadSummary>,
}

/// Body of `GET /booking-draft`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftStats {
    pub total_drafts: usize,
    /// Drafts posted at the final step.
    pub completed_bookings: usize,
    pub recent_drafts: Vec<DraftSummary>,
}
