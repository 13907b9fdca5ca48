use thiserror::Error;

/// Errors that can occur during table store operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A conditional insert found a record already present at the composite
    /// key. Callers rely on this variant being distinct from every other
    /// failure to translate key collisions into domain errors.
    #[error("item already exists at {partition_key}/{sort_key}")]
    AlreadyExists {
        partition_key: String,
        sort_key: String,
    },
    /// Transient backend fault: connectivity, timeout, throttling. The store
    /// performs no internal retry; retry policy belongs to the caller.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("query failed: {0}")]
    QueryFailed(String),
    #[error("invalid stored data: {0}")]
    InvalidData(String),
}

/// Result type for table store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
