//! Attribute codec for user records.
//!
//! Pure functions converting between the backend-neutral attribute map and
//! the domain type. These are testable in isolation without any storage
//! backend.

use chrono::{DateTime, Utc};

use crate::storage::Attributes;

use super::{EntityMeta, User, UserError};

/// Value of the `entityType` attribute on user metadata records.
pub const ENTITY_TYPE_USER: &str = "USER";

pub const ATTR_ENTITY_TYPE: &str = "entityType";
pub const ATTR_USER_ID: &str = "userId";
pub const ATTR_EMAIL: &str = "email";
pub const ATTR_CREATED_AT: &str = "createdAt";
pub const ATTR_UPDATED_AT: &str = "updatedAt";

/// Convert a User to its stored attribute map.
///
/// The structural `PK`/`SK` attributes are excluded; the store owns those.
pub fn user_to_attributes(user: &User) -> Attributes {
    let mut item = Attributes::new();

    item.insert(ATTR_ENTITY_TYPE.to_string(), ENTITY_TYPE_USER.to_string());
    item.insert(ATTR_USER_ID.to_string(), user.user_id().to_string());
    item.insert(ATTR_EMAIL.to_string(), user.email.clone());
    item.insert(
        ATTR_CREATED_AT.to_string(),
        user.meta.created_at.to_rfc3339(),
    );
    item.insert(
        ATTR_UPDATED_AT.to_string(),
        user.meta.updated_at.to_rfc3339(),
    );

    item
}

/// Convert a stored attribute map back to a User.
///
/// Missing fields and malformed timestamps are integrity faults: records at
/// user metadata keys are only ever written by this codec, so a decode
/// failure means the stored data is corrupt.
pub fn attributes_to_user(item: &Attributes) -> Result<User, UserError> {
    Ok(User {
        meta: EntityMeta {
            user_id: get_string(item, ATTR_USER_ID)?,
            created_at: get_datetime(item, ATTR_CREATED_AT)?,
            updated_at: get_datetime(item, ATTR_UPDATED_AT)?,
        },
        email: get_string(item, ATTR_EMAIL)?,
    })
}

/// Get a required string attribute.
fn get_string(item: &Attributes, key: &str) -> Result<String, UserError> {
    item.get(key)
        .cloned()
        .ok_or_else(|| UserError::Integrity(format!("missing field: {key}")))
}

/// Get a required datetime attribute (RFC 3339 format), parsed strictly.
fn get_datetime(item: &Attributes, key: &str) -> Result<DateTime<Utc>, UserError> {
    let s = get_string(item, key)?;
    DateTime::parse_from_rfc3339(&s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| UserError::Integrity(format!("invalid timestamp {key}: {e}")))
}
