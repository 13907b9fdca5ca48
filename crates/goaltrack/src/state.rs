//! Application state and explicit dependency wiring.
//!
//! The service stack is built by passing concrete dependencies into
//! constructors at process start: store -> repository -> service. No
//! runtime container is involved.

use std::sync::Arc;

use goaltrack_core::storage::TableStore;
use goaltrack_core::user::{UserRepository, UserService};

use crate::config::Config;

/// Shared application state.
///
/// This is cloned for each request handler and holds the user service
/// built over the configured table store.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    /// Wires the service stack over the given store.
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        let repository = Arc::new(UserRepository::new(store));
        let user_service = Arc::new(UserService::new(repository));
        Self { user_service }
    }

    /// Builds state for the storage backend selected at compile time.
    #[cfg(feature = "inmemory")]
    pub async fn from_config(_config: &Config) -> anyhow::Result<Self> {
        Ok(Self::new(Arc::new(crate::storage::InMemoryStore::new())))
    }

    /// Builds state for the storage backend selected at compile time.
    #[cfg(feature = "dynamodb")]
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let store = crate::storage::DynamoDbStore::from_env(config).await?;
        Ok(Self::new(Arc::new(store)))
    }
}

#[cfg(feature = "inmemory")]
impl Default for AppState {
    /// State over a fresh in-memory store.
    fn default() -> Self {
        Self::new(Arc::new(crate::storage::InMemoryStore::new()))
    }
}
