use std::collections::HashMap;

/// Attribute name of the partition key on every stored record.
pub const ATTR_PARTITION_KEY: &str = "PK";

/// Attribute name of the sort key on every stored record.
pub const ATTR_SORT_KEY: &str = "SK";

/// A stored record: flat string attributes, including the structural
/// `PK`/`SK` pair.
///
/// Every record family in the goal-tracker table persists string-typed
/// attributes only, so the backend-neutral record is a plain string map.
pub type Attributes = HashMap<String, String>;
