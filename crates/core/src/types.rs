/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Prefix-tagged record identifier, e.g. `lead_01928c...`.
pub type RecordId = String;

/// Id prefix for leads.
pub const LEAD_ID_PREFIX: &str = "lead";

/// Id prefix for stored booking drafts.
pub const DRAFT_ID_PREFIX: &str = "draft";

/// Generate a new time-ordered record id with the given prefix.
pub fn new_record_id(prefix: &str) -> RecordId {
    format!("{prefix}_{}", uuid::Uuid::now_v7().simple())
}
