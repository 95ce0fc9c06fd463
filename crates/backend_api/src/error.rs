use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use view_models::ValidationError;

pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Single generic kind for any failed login attempt.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Withdrawal {0} not found")]
    WithdrawalNotFound(String),

    #[error("Page not found")]
    PageNotFound,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<session::LoginError> for ApiError {
    fn from(_: session::LoginError) -> Self {
        ApiError::InvalidCredentials
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::InvalidCredentials => StatusCode::UNAUTHORIZED,
            ApiError::Validation(ValidationError::UnknownScheme(_)) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::WithdrawalNotFound(_) => StatusCode::NOT_FOUND,
            ApiError::PageNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}
