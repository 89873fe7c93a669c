//! User-specific error types.

use crate::domain::foundation::{DomainError, ErrorCode, UserId, ValidationError};

/// Errors surfaced by the user handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserError {
    NotFound(UserId),
    AlreadyExists(UserId),
    ValidationFailed { field: String, message: String },
    Infrastructure(String),
}

impl UserError {
    pub fn not_found(id: UserId) -> Self {
        UserError::NotFound(id)
    }
    pub fn already_exists(id: UserId) -> Self {
        UserError::AlreadyExists(id)
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            UserError::NotFound(_) => ErrorCode::UserNotFound,
            UserError::AlreadyExists(_) => ErrorCode::AlreadyExists,
            UserError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            UserError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            UserError::NotFound(id) => format!("User not found: {}", id),
            UserError::AlreadyExists(id) => format!("User already exists: {}", id),
            UserError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            UserError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for UserError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for UserError {}

impl From<ValidationError> for UserError {
    fn from(err: ValidationError) -> Self {
        UserError::ValidationFailed {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<DomainError> for UserError {
    fn from(err: DomainError) -> Self {
        let user_id = err.detail("user_id").and_then(|id| UserId::new(id).ok());
        match (err.code, user_id) {
            (ErrorCode::UserNotFound, Some(id)) => UserError::NotFound(id),
            (ErrorCode::AlreadyExists, Some(id)) => UserError::AlreadyExists(id),
            (ErrorCode::ValidationFailed, _) => UserError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => UserError::Infrastructure(err.to_string()),
        }
    }
}
