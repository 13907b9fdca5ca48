use async_trait::async_trait;

use super::{Attributes, Result};

/// The single-table storage engine.
///
/// Implementations execute point lookups, secondary-index queries, and
/// conditional writes against one shared table. They hold no client-side
/// cache; every call round-trips to the backend.
#[async_trait]
pub trait TableStore: Send + Sync {
    /// Point lookup at an exact composite key.
    async fn get_item(&self, partition_key: &str, sort_key: &str) -> Result<Option<Attributes>>;

    /// Atomic conditional insert: succeeds only if no record currently
    /// exists at the exact composite key, otherwise fails with
    /// [`AlreadyExists`](super::StoreError::AlreadyExists).
    ///
    /// This is the sole concurrency-control primitive in the system; no
    /// other operation synchronizes concurrent writers.
    async fn put_item_if_absent(
        &self,
        partition_key: &str,
        sort_key: &str,
        attributes: Attributes,
    ) -> Result<()>;

    /// Equality query against a secondary index on a non-key attribute.
    ///
    /// Returned records include the structural `PK`/`SK` attributes so
    /// callers can dispatch on the sort-key family.
    async fn query_by_index(
        &self,
        index_name: &str,
        attribute: &str,
        value: &str,
    ) -> Result<Vec<Attributes>>;
}
