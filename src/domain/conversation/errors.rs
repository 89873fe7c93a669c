//! Conversation-specific error types.

use crate::domain::foundation::{AssessmentId, ConversationId, DomainError, ErrorCode};

/// Errors surfaced by the conversation handlers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationError {
    /// Conversation was not found.
    NotFound(ConversationId),
    /// The assessment to discuss was not found.
    AssessmentNotFound(AssessmentId),
    /// Caller does not own the conversation or assessment.
    Forbidden,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl ConversationError {
    pub fn not_found(id: ConversationId) -> Self {
        ConversationError::NotFound(id)
    }
    pub fn assessment_not_found(id: AssessmentId) -> Self {
        ConversationError::AssessmentNotFound(id)
    }
    pub fn code(&self) -> ErrorCode {
        match self {
            ConversationError::NotFound(_) => ErrorCode::ConversationNotFound,
            ConversationError::AssessmentNotFound(_) => ErrorCode::AssessmentNotFound,
            ConversationError::Forbidden => ErrorCode::Forbidden,
            ConversationError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            ConversationError::Infrastructure(_) => ErrorCode::DatabaseError,
        }
    }
    pub fn message(&self) -> String {
        match self {
            ConversationError::NotFound(id) => format!("Conversation not found: {}", id),
            ConversationError::AssessmentNotFound(id) => format!("Assessment not found: {}", id),
            ConversationError::Forbidden => "Permission denied".to_string(),
            ConversationError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            ConversationError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for ConversationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ConversationError {}

impl From<DomainError> for ConversationError {
    fn from(err: DomainError) -> Self {
        let conversation_id = err
            .detail("conversation_id")
            .and_then(|id| id.parse::<ConversationId>().ok());
        let assessment_id = err
            .detail("assessment_id")
            .and_then(|id| id.parse::<AssessmentId>().ok());
        match (err.code, conversation_id, assessment_id) {
            (ErrorCode::ConversationNotFound, Some(id), _) => ConversationError::NotFound(id),
            (ErrorCode::AssessmentNotFound, _, Some(id)) => ConversationError::AssessmentNotFound(id),
            (ErrorCode::Forbidden, _, _) => ConversationError::Forbidden,
            (ErrorCode::ValidationFailed, _, _) => ConversationError::ValidationFailed {
                field: err.field().unwrap_or("unknown").to_string(),
                message: err.message,
            },
            _ => ConversationError::Infrastructure(err.to_string()),
        }
    }
}
