use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Fields shared by every record family in the goal-tracker table.
///
/// Entity kinds embed this value object by composition; each kind owns its
/// specific fields alongside the shared ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMeta {
    /// The unique identifier of the owning user. Immutable once assigned.
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A user in the system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(flatten)]
    pub meta: EntityMeta,
    /// Case-sensitive as stored; unique across users.
    pub email: String,
}

impl User {
    /// Creates a user stamped with a single instant for both timestamps.
    ///
    /// `updated_at` equals `created_at` at creation; it is reserved for
    /// future mutation, which has no code path yet.
    pub fn new(user_id: impl Into<String>, email: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            meta: EntityMeta {
                user_id: user_id.into(),
                created_at: now,
                updated_at: now,
            },
            email: email.into(),
        }
    }

    /// The unique identifier of the user.
    pub fn user_id(&self) -> &str {
        &self.meta.user_id
    }
}
