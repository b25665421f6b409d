//! Volatile lead and booking-draft storage.
//!
//! [`Store`] is an append-only, in-memory stand-in for a database. Records
//! are never updated or deleted once written, and everything is lost when
//! the process exits. Repositories follow the usual `Repo::op(pool, ..)`
//! shape so a persistent backend can replace the store without touching
//! handlers.

pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use error::DbError;
pub use store::Store;

pub type DbPool = Store;

/// Create an empty store that accepts at most `capacity` records per table.
pub fn create_pool(capacity: usize) -> DbPool {
    Store::new(capacity)
}
