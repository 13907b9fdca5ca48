//! Pure functions for mapping user errors to HTTP status codes.
//!
//! Transport adapters depend on this mapping instead of matching error
//! variants themselves.

use crate::storage::StoreError;

use super::UserError;

/// Maps a [`UserError`] to an HTTP status code.
///
/// - `InvalidArgument` -> 400 (Bad Request)
/// - `NotFound` -> 404 (Not Found)
/// - `Duplicate` -> 409 (Conflict)
/// - `Integrity` -> 500 (Internal Server Error)
/// - `Storage(Unavailable)` -> 503 (Service Unavailable)
/// - other storage faults -> 500 (Internal Server Error)
pub fn user_error_to_status_code(error: &UserError) -> u16 {
    match error {
        UserError::InvalidArgument(_) => 400,
        UserError::NotFound { .. } => 404,
        UserError::Duplicate { .. } => 409,
        UserError::Integrity(_) => 500,
        UserError::Storage(StoreError::Unavailable(_)) => 503,
        UserError::Storage(_) => 500,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_maps_to_400() {
        let error = UserError::InvalidArgument("email cannot be empty");
        assert_eq!(user_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let error = UserError::NotFound {
            user_id: "abc-123".to_string(),
        };
        assert_eq!(user_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_duplicate_maps_to_409() {
        let error = UserError::Duplicate {
            email: "alice@example.com".to_string(),
        };
        assert_eq!(user_error_to_status_code(&error), 409);
    }

    #[test]
    fn test_integrity_maps_to_500() {
        let error = UserError::Integrity("invalid timestamp".to_string());
        assert_eq!(user_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_unavailable_storage_maps_to_503() {
        let error = UserError::Storage(StoreError::Unavailable("timeout".to_string()));
        assert_eq!(user_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_other_storage_faults_map_to_500() {
        let error = UserError::Storage(StoreError::QueryFailed("table not found".to_string()));
        assert_eq!(user_error_to_status_code(&error), 500);
    }
}
