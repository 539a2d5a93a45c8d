//! Error types for Palabra core operations.
//!
//! This module defines the error hierarchy for all core operations.
//! Errors are descriptive at the core level; the HTTP layer maps these
//! to status codes and response bodies.

use thiserror::Error;

/// Result type alias for Palabra operations.
pub type Result<T> = std::result::Result<T, PalabraError>;

/// Core error type for Palabra operations.
#[derive(Debug, Error)]
pub enum PalabraError {
    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unique-constraint conflict on write
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Datastore unreachable
    #[error("Datastore unavailable: {0}")]
    Unavailable(String),

    /// Storage backend error
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<sqlx::Error> for PalabraError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                PalabraError::Conflict(db.message().to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::Io(_) => {
                PalabraError::Unavailable(err.to_string())
            }
            _ => PalabraError::Storage(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PalabraError::NotFound("word pair 9".to_string());
        assert_eq!(err.to_string(), "Not found: word pair 9");

        let err = PalabraError::Validation("sourceText must not be empty".to_string());
        assert!(err.to_string().starts_with("Validation error:"));
    }

    #[test]
    fn test_sqlx_row_not_found_maps_to_storage() {
        let err: PalabraError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, PalabraError::Storage(_)));
    }
}
