//! Validation boundary over the repository.

use std::sync::Arc;

use super::{User, UserError, UserRepository};

/// Service contract for user operations.
///
/// Trims input and rejects blank identifiers before delegating, so
/// transport adapters depend on this type alone and stay independent of
/// storage concerns. Carries no invariants of its own beyond never
/// forwarding blank input.
pub struct UserService {
    repository: Arc<UserRepository>,
}

impl UserService {
    /// Creates a new service over the given repository.
    pub fn new(repository: Arc<UserRepository>) -> Self {
        Self { repository }
    }

    /// Creates a new user with the given email.
    pub async fn create_user(&self, email: &str) -> Result<User, UserError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(UserError::InvalidArgument("email cannot be empty"));
        }

        tracing::info!(email, "create user requested");
        self.repository.create_user(email).await
    }

    /// Looks up a user by identifier.
    pub async fn get_user(&self, user_id: &str) -> Result<User, UserError> {
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(UserError::InvalidArgument("user id cannot be empty"));
        }

        tracing::info!(user_id, "get user requested");
        self.repository.get_user(user_id).await
    }
}
