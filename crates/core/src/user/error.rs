use thiserror::Error;

use crate::storage::StoreError;

/// Errors surfaced by user operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserError {
    /// Blank or missing caller input. Raised at the service boundary and
    /// re-checked in the repository, which must stay safe when invoked
    /// directly.
    #[error("{0}")]
    InvalidArgument(&'static str),
    /// An email collision, or, residually, an identifier collision surfaced
    /// by the conditional write.
    #[error("user already exists with email {email}")]
    Duplicate { email: String },
    #[error("user not found: {user_id}")]
    NotFound { user_id: String },
    /// A stored record failed to decode. Fatal; retrying cannot help.
    #[error("corrupt user record: {0}")]
    Integrity(String),
    /// Transient or unclassified backend fault, propagated untranslated.
    /// Retry policy belongs to the caller.
    #[error(transparent)]
    Storage(StoreError),
}
