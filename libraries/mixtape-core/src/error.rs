/// Core error types for Mixtape
use thiserror::Error;

/// Result type alias using `MixtapeError`
pub type Result<T> = std::result::Result<T, MixtapeError>;

/// Core error type for Mixtape
#[derive(Error, Debug)]
pub enum MixtapeError {
    /// Referenced entity absent
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Uniqueness violation detected by an application-level duplicate check
    #[error("conflict: {0}")]
    Conflict(String),

    /// Authenticated actor lacks ownership of the target entity
    #[error("not authorized to perform requested action")]
    Forbidden,

    /// Missing or invalid credential token
    #[error("unauthenticated: {0}")]
    Unauthenticated(String),

    /// Storage-level invariant breach not caught by an application check,
    /// e.g. a concurrent insert racing past a duplicate check
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Unexpected database failure
    #[error("database error: {0}")]
    Database(String),
}

impl MixtapeError {
    /// Create a not found error
    pub fn not_found(entity: impl Into<String>, id: impl std::fmt::Display) -> Self {
        Self::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }

    /// Create a conflict error
    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// Create an unauthenticated error
    pub fn unauthenticated(msg: impl Into<String>) -> Self {
        Self::Unauthenticated(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

#[cfg(feature = "sqlx-support")]
impl From<sqlx::Error> for MixtapeError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            // A unique index is the final arbiter for concurrent duplicates;
            // keep the violation distinguishable from a generic failure.
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                Self::ConstraintViolation(db.message().to_string())
            }
            _ => Self::Database(err.to_string()),
        }
    }
}
