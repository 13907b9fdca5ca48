//! Create/get orchestration over the table store.

use std::sync::Arc;

use chrono::Utc;

use crate::storage::{keys, StoreError, TableStore, ATTR_SORT_KEY};

use super::record::{attributes_to_user, user_to_attributes, ATTR_EMAIL};
use super::{new_user_id, User, UserError};

/// Repository for user records.
///
/// Stateless orchestration of the key encoder, identifier generator, and
/// table store. It never caches records across calls; each operation
/// round-trips to durable storage.
pub struct UserRepository {
    store: Arc<dyn TableStore>,
}

impl UserRepository {
    /// Creates a new repository over the given table store.
    pub fn new(store: Arc<dyn TableStore>) -> Self {
        Self { store }
    }

    /// Creates a new user with the given email.
    ///
    /// The email-index lookup is a best-effort duplicate check; the
    /// conditional write on the metadata key is the authoritative guard.
    /// Two concurrent creates with the same email can both pass the
    /// pre-check, so only key-level uniqueness is enforced atomically.
    pub async fn create_user(&self, email: &str) -> Result<User, UserError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(UserError::InvalidArgument("email cannot be empty"));
        }

        tracing::info!(email, "creating user");

        if self.email_exists(email).await? {
            return Err(UserError::Duplicate {
                email: email.to_string(),
            });
        }

        let user = User::new(new_user_id(), email, Utc::now());
        let attributes = user_to_attributes(&user);

        match self
            .store
            .put_item_if_absent(
                &keys::user_pk(user.user_id()),
                keys::user_metadata_sk(),
                attributes,
            )
            .await
        {
            Ok(()) => Ok(user),
            // The write condition is the source of truth for key-level
            // uniqueness, so a rejection is a duplicate, not a generic
            // storage fault.
            Err(StoreError::AlreadyExists { .. }) => Err(UserError::Duplicate {
                email: email.to_string(),
            }),
            Err(e) => Err(UserError::Storage(e)),
        }
    }

    /// Looks up a user by identifier.
    pub async fn get_user(&self, user_id: &str) -> Result<User, UserError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(UserError::InvalidArgument("user id cannot be empty"));
        }

        tracing::debug!(user_id, "getting user");

        let item = self
            .store
            .get_item(&keys::user_pk(user_id), keys::user_metadata_sk())
            .await
            .map_err(UserError::Storage)?;

        match item {
            Some(item) => match attributes_to_user(&item) {
                Ok(user) => Ok(user),
                Err(e) => {
                    tracing::error!(user_id, error = %e, "stored user record failed to decode");
                    Err(e)
                }
            },
            None => Err(UserError::NotFound {
                user_id: user_id.to_string(),
            }),
        }
    }

    /// Best-effort duplicate pre-check against the email index.
    ///
    /// The index spans every record family; only user metadata records
    /// count as a hit.
    async fn email_exists(&self, email: &str) -> Result<bool, UserError> {
        let items = self
            .store
            .query_by_index(keys::EMAIL_INDEX, ATTR_EMAIL, email)
            .await
            .map_err(UserError::Storage)?;

        Ok(items.iter().any(|item| {
            item.get(ATTR_SORT_KEY).map(String::as_str) == Some(keys::user_metadata_sk())
        }))
    }
}

#[cfg(test)]
pub(crate) mod test_store {
    //! Table store double with real conditional-write semantics plus fault
    //! injection and call counting.

    use std::collections::BTreeMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use tokio::sync::RwLock;

    use crate::storage::{
        Attributes, Result, StoreError, TableStore, ATTR_PARTITION_KEY, ATTR_SORT_KEY,
    };

    #[derive(Default)]
    pub(crate) struct StubStore {
        items: RwLock<BTreeMap<(String, String), Attributes>>,
        calls: AtomicUsize,
        pub(crate) unavailable: bool,
        pub(crate) reject_puts: bool,
    }

    impl StubStore {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        /// A store whose every operation fails with a transient fault.
        pub(crate) fn failing() -> Self {
            Self {
                unavailable: true,
                ..Self::default()
            }
        }

        /// A store that rejects every conditional insert, as if the target
        /// key were always taken.
        pub(crate) fn rejecting_puts() -> Self {
            Self {
                reject_puts: true,
                ..Self::default()
            }
        }

        /// Total storage operations attempted, across all primitives.
        pub(crate) fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        /// Seeds a record at an exact composite key, bypassing the condition.
        pub(crate) async fn seed(&self, pk: &str, sk: &str, mut attributes: Attributes) {
            attributes.insert(ATTR_PARTITION_KEY.to_string(), pk.to_string());
            attributes.insert(ATTR_SORT_KEY.to_string(), sk.to_string());
            self.items
                .write()
                .await
                .insert((pk.to_string(), sk.to_string()), attributes);
        }

        fn check(&self) -> Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.unavailable {
                return Err(StoreError::Unavailable("injected outage".to_string()));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl TableStore for StubStore {
        async fn get_item(
            &self,
            partition_key: &str,
            sort_key: &str,
        ) -> Result<Option<Attributes>> {
            self.check()?;
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
            self.check()?;
            let mut items = self.items.write().await;
            let key = (partition_key.to_string(), sort_key.to_string());
            if self.reject_puts || items.contains_key(&key) {
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
            self.check()?;
            let items = self.items.read().await;
            Ok(items
                .values()
                .filter(|item| item.get(attribute).map(String::as_str) == Some(value))
                .cloned()
                .collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::test_store::StubStore;
    use super::*;
    use crate::storage::Attributes;
    use crate::user::record::ATTR_CREATED_AT;

    fn repository(store: Arc<StubStore>) -> UserRepository {
        UserRepository::new(store)
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let store = Arc::new(StubStore::new());
        let repo = repository(store);

        let created = repo.create_user("alice@example.com").await.unwrap();
        let fetched = repo.get_user(created.user_id()).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.email, "alice@example.com");
        assert_eq!(fetched.meta.created_at, fetched.meta.updated_at);
    }

    #[tokio::test]
    async fn test_create_trims_email() {
        let store = Arc::new(StubStore::new());
        let repo = repository(store);

        let created = repo.create_user("  alice@example.com  ").await.unwrap();
        assert_eq!(created.email, "alice@example.com");
    }

    #[tokio::test]
    async fn test_create_blank_email_contacts_no_storage() {
        let store = Arc::new(StubStore::new());
        let repo = repository(Arc::clone(&store));

        for input in ["", "   "] {
            let result = repo.create_user(input).await;
            assert!(matches!(result, Err(UserError::InvalidArgument(_))));
        }
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_get_blank_id_contacts_no_storage() {
        let store = Arc::new(StubStore::new());
        let repo = repository(Arc::clone(&store));

        let result = repo.get_user("  ").await;
        assert!(matches!(result, Err(UserError::InvalidArgument(_))));
        assert_eq!(store.call_count(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_email_detected_by_pre_check() {
        let store = Arc::new(StubStore::new());
        let repo = repository(Arc::clone(&store));

        repo.create_user("alice@example.com").await.unwrap();
        let calls_after_first = store.call_count();

        let result = repo.create_user("alice@example.com").await;
        assert!(matches!(result, Err(UserError::Duplicate { .. })));
        // The pre-check hit short-circuits before any write is attempted.
        assert_eq!(store.call_count(), calls_after_first + 1);
    }

    #[tokio::test]
    async fn test_pre_check_ignores_other_record_families() {
        let store = Arc::new(StubStore::new());

        // A non-user record carrying the same email attribute must not
        // count as a duplicate.
        let mut attributes = Attributes::new();
        attributes.insert("email".to_string(), "alice@example.com".to_string());
        store
            .seed(
                "USER#other",
                &keys::notification_channel_sk("DISCORD"),
                attributes,
            )
            .await;

        let repo = repository(store);
        assert!(repo.create_user("alice@example.com").await.is_ok());
    }

    #[tokio::test]
    async fn test_conditional_write_rejection_is_duplicate() {
        // Simulates an identifier collision: the pre-check passes but the
        // conditional write finds the key taken.
        let store = Arc::new(StubStore::rejecting_puts());
        let repo = repository(store);

        let result = repo.create_user("bob@example.com").await;
        assert!(matches!(result, Err(UserError::Duplicate { .. })));
    }

    #[tokio::test]
    async fn test_transient_failure_propagates_untranslated() {
        let store = Arc::new(StubStore::failing());
        let repo = repository(store);

        let result = repo.create_user("alice@example.com").await;
        assert!(matches!(
            result,
            Err(UserError::Storage(StoreError::Unavailable(_)))
        ));
    }

    #[tokio::test]
    async fn test_get_unknown_user_is_not_found() {
        let store = Arc::new(StubStore::new());
        let repo = repository(store);

        let result = repo.get_user("missing-id").await;
        assert!(matches!(result, Err(UserError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_corrupt_stored_record_is_integrity_error() {
        let store = Arc::new(StubStore::new());
        let repo = repository(Arc::clone(&store));

        let created = repo.create_user("alice@example.com").await.unwrap();

        let pk = keys::user_pk(created.user_id());
        let mut attributes = store
            .get_item(&pk, keys::user_metadata_sk())
            .await
            .unwrap()
            .unwrap();
        attributes.insert(ATTR_CREATED_AT.to_string(), "yesterday".to_string());
        store.seed(&pk, keys::user_metadata_sk(), attributes).await;

        let result = repo.get_user(created.user_id()).await;
        assert!(matches!(result, Err(UserError::Integrity(_))));
    }
}
