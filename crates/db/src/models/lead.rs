//! Lead record model and summaries.

use alps_core::lead::{LeadSource, NewLead};
use alps_core::types::{RecordId, Timestamp};
use serde::{Deserialize, Serialize};

/// A stored lead. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub adults: Option<i64>,
    pub children: Option<i64>,
    pub package_id: Option<String>,
    pub notes: Option<String>,
    pub source: LeadSource,
    pub created_at: Timestamp,
}

impl Lead {
    pub(crate) fn from_new(id: RecordId, new: NewLead, created_at: Timestamp) -> Self {
        Self {
            id,
            name: new.name,
            email: new.email,
            phone: new.phone,
            start_date: new.start_date,
            end_date: new.end_date,
            adults: new.adults,
            children: new.children,
            package_id: new.package_id,
            notes: new.notes,
            source: new.source,
            created_at,
        }
    }
}

/// Condensed view used by the stats endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadSummary {
    pub id: RecordId,
    pub name: String,
    pub email: String,
    pub source: LeadSource,
    pub created_at: Timestamp,
}

impl From<&Lead> for LeadSummary {
    fn from(lead: &Lead) -> Self {
        Self {
            id: lead.id.clone(),
            name: lead.name.clone(),
            email: lead.email.clone(),
            source: lead.source,
            created_at: lead.created_at,
        }
    }
}
