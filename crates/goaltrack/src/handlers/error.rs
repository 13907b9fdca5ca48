use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use goaltrack_core::user::{user_error_to_status_code, UserError};

pub struct ApiError(pub anyhow::Error);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status_code = if let Some(user_error) = self.0.downcast_ref::<UserError>() {
            let code = user_error_to_status_code(user_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
