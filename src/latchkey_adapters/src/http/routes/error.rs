use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use latchkey_application::AuthError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("{0}")]
    InvalidInput(String),

    #[error("An account with this email already exists")]
    AccountAlreadyExists,

    #[error("Invalid email or password")]
    AuthenticationError,

    #[error("Internal server error")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            AuthApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AuthApiError::AccountAlreadyExists => StatusCode::CONFLICT,
            AuthApiError::AuthenticationError => StatusCode::UNAUTHORIZED,
            AuthApiError::UnexpectedError(detail) => {
                tracing::error!(error = %detail, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status_code, body).into_response()
    }
}

impl From<AuthError> for AuthApiError {
    fn from(error: AuthError) -> Self {
        match error {
            AuthError::InvalidInput(_) | AuthError::InvalidEmail | AuthError::WeakPassword { .. } => {
                AuthApiError::InvalidInput(error.to_string())
            }
            AuthError::AlreadyExists => AuthApiError::AccountAlreadyExists,
            AuthError::InvalidCredentials => AuthApiError::AuthenticationError,
            AuthError::Internal(detail) => AuthApiError::UnexpectedError(detail),
        }
    }
}
