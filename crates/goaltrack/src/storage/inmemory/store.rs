//! In-memory table store implementation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use goaltrack_core::storage::{
    Attributes, Result, StoreError, TableStore, ATTR_PARTITION_KEY, ATTR_SORT_KEY,
};

/// In-memory storage backend for testing and local runs.
///
/// One ordered map keyed by the composite key stands in for the shared
/// table. Data is not persisted and is lost when the store is dropped.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    items: RwLock<BTreeMap<(String, String), Attributes>>,
}

impl InMemoryStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TableStore for InMemoryStore {
    async fn get_item(&self, partition_key: &str, sort_key: &str) -> Result<Option<Attributes>> {
        let items = self.items.read().await;
        Ok(items
            .get(&(partition_key.to_string(), sort_key.to_string()))
            .cloned())
    }

    async fn put_item_if_absent(
        &self,
        partition_key: &str,
        sort_key: &str,
        mut attributes: Attributes,
    ) -> Result<()> {
        let mut items = self.items.write().await;
        let key = (partition_key.to_string(), sort_key.to_string());
        if items.contains_key(&key) {
            return Err(StoreError::AlreadyExists {
                partition_key: partition_key.to_string(),
                sort_key: sort_key.to_string(),
            });
        }
        attributes.insert(ATTR_PARTITION_KEY.to_string(), partition_key.to_string());
        attributes.insert(ATTR_SORT_KEY.to_string(), sort_key.to_string());
        items.insert(key, attributes);
        Ok(())
    }

    async fn query_by_index(
        &self,
        _index_name: &str,
        attribute: &str,
        value: &str,
    ) -> Result<Vec<Attributes>> {
        // Equality scan; a real index is unnecessary at this scale.
        let items = self.items.read().await;
        Ok(items
            .values()
            .filter(|item| item.get(attribute).map(String::as_str) == Some(value))
            .cloned()
            .collect())
    }
}
