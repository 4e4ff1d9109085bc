//! Domain error types
//!
//! These errors are framework-agnostic and represent business-level failures.
//! The HTTP layer maps them onto status codes.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    /// Resource missing, or not visible to the caller
    #[error("{0}")]
    NotFound(String),
    /// Rejected input: the first failure plus every failure collected
    #[error("{message}")]
    Validation {
        message: String,
        errors: Vec<String>,
    },
    /// Database/persistence error
    #[error("Database error: {0}")]
    Database(String),
    /// Generic internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        DomainError::NotFound(message.into())
    }

    /// Validation failure carrying a single message.
    pub fn validation(message: impl Into<String>) -> Self {
        let message = message.into();
        DomainError::Validation {
            errors: vec![message.clone()],
            message,
        }
    }
}

// Conversion from SeaORM errors (used in infrastructure layer)
impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        DomainError::Database(e.to_string())
    }
}
