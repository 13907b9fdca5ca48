//! The single-table storage abstraction.
//!
//! One durable key-value table hosts every record family, addressed by a
//! composite `(partition key, sort key)` pair. The [`keys`] module owns the
//! encoding of those keys; [`TableStore`] is the seam backend
//! implementations plug into.

mod error;
pub mod keys;
mod traits;
mod types;

pub use error::{Result, StoreError};
pub use traits::TableStore;
pub use types::{Attributes, ATTR_PARTITION_KEY, ATTR_SORT_KEY};
