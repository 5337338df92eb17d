/// Server error types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mixtape_core::MixtapeError;
use serde_json::json;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("authentication failed: {0}")]
    Auth(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal server error: {0}")]
    Internal(String),

    #[error(transparent)]
    Core(#[from] MixtapeError),

    #[error("JWT error: {0}")]
    Jwt(#[from] jsonwebtoken::errors::Error),

    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),
}

impl From<sqlx::Error> for ServerError {
    fn from(err: sqlx::Error) -> Self {
        ServerError::Core(err.into())
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ServerError::Auth(msg) => (StatusCode::UNAUTHORIZED, msg),
            ServerError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ServerError::Core(err) => return core_error_response(err),
            ServerError::Config(ref msg) => {
                tracing::error!("Config error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Configuration error".to_string(),
                )
            }
            ServerError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServerError::Jwt(ref e) => {
                tracing::warn!("JWT error: {:?}", e);
                (StatusCode::UNAUTHORIZED, "Invalid token".to_string())
            }
            ServerError::Bcrypt(ref e) => {
                tracing::error!("Bcrypt error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Password error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Map the core error taxonomy onto the HTTP surface
///
/// A constraint violation is a duplicate that raced past an application
/// duplicate check, so it answers 409 like any other conflict, with the
/// storage detail kept out of the body.
fn core_error_response(err: MixtapeError) -> Response {
    let (status, error_message) = match err {
        MixtapeError::NotFound { .. } => (StatusCode::NOT_FOUND, err.to_string()),
        MixtapeError::Conflict(msg) => (StatusCode::CONFLICT, msg),
        MixtapeError::Forbidden => (StatusCode::FORBIDDEN, err.to_string()),
        MixtapeError::Unauthenticated(msg) => (StatusCode::UNAUTHORIZED, msg),
        MixtapeError::ConstraintViolation(ref msg) => {
            tracing::warn!("Constraint violation: {}", msg);
            (StatusCode::CONFLICT, "conflict".to_string())
        }
        MixtapeError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
        MixtapeError::Database(ref msg) => {
            tracing::error!("Database error: {}", msg);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            )
        }
    };

    let body = Json(json!({
        "error": error_message,
    }));

    (status, body).into_response()
}
