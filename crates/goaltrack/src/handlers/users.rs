use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use goaltrack_core::user::User;

use crate::{handlers::error::ApiError, state::AppState};

/// Request payload for creating a new user.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Absent and null are treated as blank and rejected downstream.
    #[serde(default)]
    pub email: Option<String>,
}

/// Create a new user (POST /api/users).
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = payload.email.unwrap_or_default();
    let user = state.user_service.create_user(&email).await?;

    tracing::info!(user_id = %user.user_id(), "Created new user");

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a single user by ID (GET /api/users/{id}).
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<User>, ApiError> {
    let user = state.user_service.get_user(&id).await?;
    Ok(Json(user))
}
