//! Key generation functions for the single-table design.
//!
//! Pure functions mapping entity identifiers to partition and sort keys.
//! All functions are sync, deterministic, and have no side effects.
//!
//! Every sort key is a `#`-delimited token sequence whose first token names
//! the record family, so families never collide within one partition.

use chrono::{DateTime, SecondsFormat, Utc};

// ============================================================================
// Key tokens
// ============================================================================

pub const USER_PREFIX: &str = "USER#";

const METADATA: &str = "METADATA";
const CHARACTER: &str = "CHARACTER";
const GOAL: &str = "GOAL";
const NOTIFICATION: &str = "NOTIFICATION";
const LATEST: &str = "LATEST";
const EARLIEST: &str = "EARLIEST";

/// Name of the secondary index keyed by the `email` attribute.
pub const EMAIL_INDEX: &str = "email-sk-index";

// ============================================================================
// User keys
// ============================================================================

/// Generate the partition key grouping all of a user's records.
///
/// Pattern: `USER#<user_id>`
pub fn user_pk(user_id: &str) -> String {
    format!("{USER_PREFIX}{user_id}")
}

/// Sort key of the user metadata record.
///
/// Pattern: `METADATA`
pub fn user_metadata_sk() -> &'static str {
    METADATA
}

// ============================================================================
// Character keys
// ============================================================================

/// Sort key of a character metadata record.
///
/// Pattern: `CHARACTER#METADATA#<character_name>`
pub fn character_metadata_sk(character_name: &str) -> String {
    format!("{CHARACTER}#{METADATA}#{character_name}")
}

// ============================================================================
// Goal keys
// ============================================================================

/// Sort key of a goal metadata record.
///
/// Pattern: `CHARACTER#<character_name>#GOAL#METADATA#<goal_id>`
pub fn goal_metadata_sk(character_name: &str, goal_id: &str) -> String {
    format!("{CHARACTER}#{character_name}#{GOAL}#{METADATA}#{goal_id}")
}

/// Sort key of a goal progress sample.
///
/// Pattern: `CHARACTER#<character_name>#GOAL#<goal_id>#<timestamp>`
///
/// The timestamp is rendered RFC 3339 in UTC with a `Z` suffix so samples
/// for one goal sort chronologically.
pub fn goal_progress_sk(
    character_name: &str,
    goal_id: &str,
    timestamp: DateTime<Utc>,
) -> String {
    format!(
        "{CHARACTER}#{character_name}#{GOAL}#{goal_id}#{}",
        timestamp.to_rfc3339_opts(SecondsFormat::Secs, true)
    )
}

/// Sort key of the bounded latest-progress marker for a goal.
///
/// Pattern: `CHARACTER#<character_name>#GOAL#<goal_id>#LATEST`
pub fn goal_latest_sk(character_name: &str, goal_id: &str) -> String {
    format!("{CHARACTER}#{character_name}#{GOAL}#{goal_id}#{LATEST}")
}

/// Sort key of the bounded earliest-progress marker for a goal.
///
/// Pattern: `CHARACTER#<character_name>#GOAL#<goal_id>#EARLIEST`
pub fn goal_earliest_sk(character_name: &str, goal_id: &str) -> String {
    format!("{CHARACTER}#{character_name}#{GOAL}#{goal_id}#{EARLIEST}")
}

// ============================================================================
// Notification keys
// ============================================================================

/// Sort key of a notification channel record.
///
/// Pattern: `NOTIFICATION#<channel_type>`
pub fn notification_channel_sk(channel_type: &str) -> String {
    format!("{NOTIFICATION}#{channel_type}")
}
