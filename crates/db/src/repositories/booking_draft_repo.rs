//! Repository for the in-memory `booking_drafts` table.

use alps_core::booking::BookingDraft;
use alps_core::types::{new_record_id, DRAFT_ID_PREFIX};

use crate::error::DbError;
use crate::models::booking_draft::BookingDraftRecord;
use crate::DbPool;

const TABLE: &str = "booking_drafts";

/// Append-only access to stored booking drafts.
pub struct BookingDraftRepo;

impl BookingDraftRepo {
    /// Append a draft snapshot posted at `step`.
    pub async fn create(
        pool: &DbPool,
        step: i64,
        payload: BookingDraft,
    ) -> Result<BookingDraftRecord, DbError> {
        let mut tables = pool.write().await;
        pool.ensure_room(TABLE, tables.drafts.len())?;

        let now = chrono::Utc::now();
        let record = BookingDraftRecord {
            id: new_record_id(DRAFT_ID_PREFIX),
            step,
            payload,
            created_at: now,
            updated_at: now,
        };
        tables.drafts.push(record.clone());
        Ok(record)
    }

    pub async fn count(pool: &DbPool) -> usize {
        pool.read().await.drafts.len()
    }

    /// Number of drafts posted as final submissions.
    pub async fn count_final(pool: &DbPool) -> usize {
        pool.read().await.drafts.iter().filter(|d| d.is_final()).count()
    }

    /// The last `limit` drafts, oldest first.
    pub async fn recent(pool: &DbPool, limit: usize) -> Vec<BookingDraftRecord> {
        let tables = pool.read().await;
        let skip = tables.drafts.len().saturating_sub(limit);
        tables.drafts[skip..].to_vec()
    }
}
