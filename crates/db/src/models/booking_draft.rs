//! Stored booking draft model and summaries.

use alps_core::booking::{BookingDraft, FINAL_STEP};
use alps_core::types::{RecordId, Timestamp};
use serde::Serialize;

/// A booking draft as received by `POST /booking-draft`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDraftRecord {
    pub id: RecordId,
    pub step: i64,
    pub payload: BookingDraft,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl BookingDraftRecord {
    pub fn is_final(&self) -> bool {
        self.step == FINAL_STEP
    }
}

/// Condensed view used by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftSummary {
    pub id: RecordId,
    pub step: i64,
    /// Contact name, when the draft carries one.
    pub contact: Option<String>,
    pub created_at: Timestamp,
}

impl From<&BookingDraftRecord> for DraftSummary {
    fn from(draft: &BookingDraftRecord) -> Self {
        Self {
            id: draft.id.clone(),
            step: draft.step,
            contact: draft.payload.contact.as_ref().map(|c| c.name.clone()),
            created_at: draft.created_at,
        }
    }
}
