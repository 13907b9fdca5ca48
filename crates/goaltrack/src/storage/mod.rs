//! Storage backend implementations.
//!
//! This module provides concrete implementations of the
//! [`TableStore`](goaltrack_core::storage::TableStore) trait from
//! `goaltrack_core::storage`. The implementation is selected at compile
//! time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-memory backend for tests and local runs
//! - `dynamodb`: AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! These features are mutually exclusive - only one storage backend can be
//! enabled at a time.
//!
//! # Examples
//!
//! Build with the in-memory backend (default):
//! ```bash
//! cargo build -p goaltrack
//! ```
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p goaltrack --no-default-features --features dynamodb
//! ```

// Compile-time checks for mutual exclusivity
#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!(
    "Features 'inmemory' and 'dynamodb' are mutually exclusive. \
    Enable only one storage backend at a time."
);

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!(
    "No storage backend selected. Enable 'inmemory' or 'dynamodb' feature. \
    Example: cargo build -p goaltrack --features inmemory"
);

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

#[cfg(feature = "inmemory")]
pub mod inmemory;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbStore;

#[cfg(feature = "inmemory")]
pub use inmemory::InMemoryStore;
