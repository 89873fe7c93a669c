//! Conversation aggregate - a chat thread, optionally seeded from an assessment.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{Assessment, PatternCategory};
use crate::domain::foundation::{
    AssessmentId, ConversationId, DomainError, ErrorCode, Timestamp, UserId,
};

use super::message::Message;

/// Conversation aggregate.
///
/// # Invariants
///
/// - `assessment_pattern` is set exactly when `assessment_id` is
/// - messages are kept in the order they were added
/// - `updated_at` is never before `created_at`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    id: ConversationId,
    user_id: UserId,
    assessment_id: Option<AssessmentId>,
    assessment_pattern: Option<PatternCategory>,
    messages: Vec<Message>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl Conversation {
    /// Starts an empty conversation not tied to any assessment.
    pub fn new(id: ConversationId, user_id: UserId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            user_id,
            assessment_id: None,
            assessment_pattern: None,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Starts a conversation about one of the user's assessments.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if the assessment belongs to someone else
    pub fn for_assessment(
        id: ConversationId,
        user_id: UserId,
        assessment: &Assessment,
    ) -> Result<Self, DomainError> {
        assessment.authorize(&user_id)?;

        let mut conversation = Self::new(id, user_id);
        conversation.assessment_id = Some(*assessment.id());
        conversation.assessment_pattern = Some(assessment.pattern());
        Ok(conversation)
    }

    /// Reconstitute a conversation from persistence (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn reconstitute(
        id: ConversationId,
        user_id: UserId,
        assessment_id: Option<AssessmentId>,
        assessment_pattern: Option<PatternCategory>,
        messages: Vec<Message>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            assessment_id,
            assessment_pattern,
            messages,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &ConversationId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn assessment_id(&self) -> Option<&AssessmentId> {
        self.assessment_id.as_ref()
    }

    pub fn assessment_pattern(&self) -> Option<PatternCategory> {
        self.assessment_pattern
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// # Errors
    ///
    /// - `Forbidden` if user is not the owner
    pub fn authorize(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User is not authorized to access this conversation",
            ))
        }
    }

    /// Appends a message.
    pub fn add_message(&mut self, message: Message) {
        self.messages.push(message);
        self.updated_at = Timestamp::now().max(self.updated_at);
    }
}
