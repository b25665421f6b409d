use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::DbError;
use crate::models::booking_draft::BookingDraftRecord;
use crate::models::lead::Lead;

/// Default per-table record limit.
pub const DEFAULT_CAPACITY: usize = 10_000;

#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub leads: Vec<Lead>,
    pub drafts: Vec<BookingDraftRecord>,
}

/// Shared in-memory tables. Cheap to clone; clones share the same data.
#[derive(Debug, Clone)]
pub struct Store {
    tables: Arc<RwLock<Tables>>,
    capacity: usize,
}

impl Store {
    pub fn new(capacity: usize) -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::default())),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Free slots left in the fullest table.
    pub async fn headroom(&self) -> usize {
        let tables = self.tables.read().await;
        let fullest = tables.leads.len().max(tables.drafts.len());
        self.capacity.saturating_sub(fullest)
    }

    pub(crate) async fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().await
    }

    pub(crate) async fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().await
    }

    /// Fail if a table of length `len` cannot take another record.
    pub(crate) fn ensure_room(&self, table: &'static str, len: usize) -> Result<(), DbError> {
        if len >= self.capacity {
            tracing::warn!(table, capacity = self.capacity, "In-memory store is full");
            return Err(DbError::CapacityExceeded {
                table,
                capacity: self.capacity,
            });
        }
        Ok(())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use alps_core::booking::BookingDraft;
    use assert_matches::assert_matches;

    use super::*;
    use crate::repositories::BookingDraftRepo;

    #[tokio::test]
    async fn refuses_writes_past_capacity() {
        let store = Store::new(2);
        assert_eq!(store.headroom().await, 2);

        BookingDraftRepo::create(&store, 1, BookingDraft::default()).await.unwrap();
        BookingDraftRepo::create(&store, 2, BookingDraft::default()).await.unwrap();
        assert_eq!(store.headroom().await, 0);

        assert_matches!(
            BookingDraftRepo::create(&store, 3, BookingDraft::default()).await,
            Err(DbError::CapacityExceeded { table: "booking_drafts", capacity: 2 })
        );
    }
}
