#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// The volatile store refuses to grow past its configured capacity.
    #[error("Store is full: table '{table}' already holds {capacity} records")]
    CapacityExceeded { table: &'static str, capacity: usize },
}
