//! Assessment-specific error types.

use thiserror::Error;

use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode};

/// Why a required field was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInputReason {
    Missing,
    Unrecognized(String),
}

/// The required answer (age bracket) is absent or unknown.
///
/// This is the only error the classifier can raise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", describe(.field, .reason))]
pub struct InvalidInputError {
    pub field: &'static str,
    pub reason: InvalidInputReason,
}

fn describe(field: &str, reason: &InvalidInputReason) -> String {
    match reason {
        InvalidInputReason::Missing => format!("Required field '{}' is missing", field),
        InvalidInputReason::Unrecognized(value) => {
            format!("Field '{}' has unrecognized value '{}'", field, value)
        }
    }
}

impl InvalidInputError {
    pub fn missing(field: &'static str) -> Self {
        Self {
            field,
            reason: InvalidInputReason::Missing,
        }
    }

    pub fn unrecognized(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            reason: InvalidInputReason::Unrecognized(value.into()),
        }
    }
}

/// Errors surfaced by the assessment handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssessmentError {
    /// Assessment was not found.
    NotFound(AssessmentId),
    /// Caller does not own the assessment.
    Forbidden,
    /// Required answer missing or unknown.
    InvalidInput(InvalidInputError),
    /// Validation failed on some other field.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl AssessmentError {
    pub fn not_found(id: AssessmentId) -> Self {
        AssessmentError::NotFound(id)
    }
    pub fn infrastructure(message: impl Into<String>) -> Self {
        AssessmentError::Infrastructure(message.into())
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            AssessmentError::NotFound(_) => ErrorCode::AssessmentNotFound,
            AssessmentError::Forbidden => ErrorCode::Forbidden,
            AssessmentError::InvalidInput(_) => ErrorCode::InvalidInput,
            AssessmentError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            AssessmentError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            AssessmentError::NotFound(id) => format!("Assessment not found: {}", id),
            AssessmentError::Forbidden => "Permission denied".to_string(),
            AssessmentError::InvalidInput(err) => err.to_string(),
            AssessmentError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            AssessmentError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for AssessmentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AssessmentError {}

impl From<InvalidInputError> for AssessmentError {
    fn from(err: InvalidInputError) -> Self {
        AssessmentError::InvalidInput(err)
    }
}

impl From<DomainError> for AssessmentError {
    fn from(err: DomainError) -> Self {
        let assessment_id = err
            .detail("assessment_id")
            .and_then(|id| id.parse::<AssessmentId>().ok());
        match (err.code, assessment_id) {
            (ErrorCode::AssessmentNotFound, Some(id)) => AssessmentError::NotFound(id),
            (ErrorCode::Forbidden, _) => AssessmentError::Forbidden,
            (ErrorCode::ValidationFailed, _) => AssessmentError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => AssessmentError::Infrastructure(err.to_string()),
        }
    }
}
