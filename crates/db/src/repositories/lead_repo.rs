//! Repository for the in-memory `leads` table.

use alps_core::lead::NewLead;
use alps_core::types::{new_record_id, LEAD_ID_PREFIX};

use crate::error::DbError;
use crate::models::lead::Lead;
use crate::DbPool;

const TABLE: &str = "leads";

/// Append-only access to stored leads.
pub struct LeadRepo;

impl LeadRepo {
    /// Append a new lead with a generated id and creation timestamp.
    pub async fn create(pool: &DbPool, new: NewLead) -> Result<Lead, DbError> {
        let mut tables = pool.write().await;
        pool.ensure_room(TABLE, tables.leads.len())?;

        let lead = Lead::from_new(new_record_id(LEAD_ID_PREFIX), new, chrono::Utc::now());
        tables.leads.push(lead.clone());
        Ok(lead)
    }

    pub async fn count(pool: &DbPool) -> usize {
        pool.read().await.leads.len()
    }

    /// The last `limit` leads, oldest first.
    pub async fn recent(pool: &DbPool, limit: usize) -> Vec<Lead> {
        let tables = pool.read().await;
        let skip = tables.leads.len().saturating_sub(limit);
        tables.leads[skip..].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use alps_core::lead::LeadSource;
    use assert_matches::assert_matches;

    use super::*;
    use crate::Store;

    fn new_lead(name: &str) -> NewLead {
        NewLead {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: None,
            start_date: None,
            end_date: None,
            adults: None,
            children: None,
            package_id: None,
            notes: None,
            source: LeadSource::Website,
        }
    }

    #[tokio::test]
    async fn create_assigns_id_and_timestamp() {
        let pool = Store::default();
        let lead = LeadRepo::create(&pool, new_lead("Jane")).await.unwrap();

        assert!(lead.id.starts_with("lead_"));
        assert_eq!(lead.name, "Jane");
        assert_eq!(LeadRepo::count(&pool).await, 1);
        assert_eq!(LeadRepo::recent(&pool, 1).await, vec![lead]);
    }

    #[tokio::test]
    async fn recent_returns_last_n_in_insertion_order() {
        let pool = Store::default();
        for name in ["A1", "B2", "C3", "D4", "E5", "F6", "G7"] {
            LeadRepo::create(&pool, new_lead(name)).await.unwrap();
        }

        let recent = LeadRepo::recent(&pool, 5).await;
        let names: Vec<_> = recent.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["C3", "D4", "E5", "F6", "G7"]);

        assert_eq!(LeadRepo::recent(&pool, 50).await.len(), 7);
    }

    #[tokio::test]
    async fn clones_share_the_same_tables() {
        let pool = Store::default();
        let other = pool.clone();
        LeadRepo::create(&pool, new_lead("Jane")).await.unwrap();
        assert_eq!(LeadRepo::count(&other).await, 1);
    }

    #[tokio::test]
    async fn create_fails_when_store_is_full() {
        let pool = Store::new(1);
        LeadRepo::create(&pool, new_lead("Jane")).await.unwrap();

        let result = LeadRepo::create(&pool, new_lead("John")).await;
        assert_matches!(result, Err(DbError::CapacityExceeded { table: "leads", capacity: 1 }));
        assert_eq!(LeadRepo::count(&pool).await, 1);
    }

    #[test]
    fn lead_serializes_camel_case() {
        let lead = Lead::from_new("lead_x".into(), new_lead("Jane"), chrono::Utc::now());
        let json = serde_json::to_value(&lead).unwrap();
        assert_eq!(json["source"], "website");
        assert!(json.get("createdAt").is_some());
        assert!(json.get("packageId").is_some());
    }
}
