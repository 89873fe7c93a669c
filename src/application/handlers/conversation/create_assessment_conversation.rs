//! CreateAssessmentConversationHandler - Opens a chat about an assessment.
//!
//! The conversation is seeded with the configured opening user message so
//! the first turn always asks about the assessment results.

use std::sync::Arc;

use tracing::{error, info};

use crate::config::ConversationConfig;
use crate::domain::conversation::{Conversation, ConversationError, Message};
use crate::domain::foundation::{AssessmentId, ConversationId, UserId};
use crate::ports::{AssessmentRepository, ConversationRepository};

/// Command to start a conversation about an assessment.
#[derive(Debug, Clone)]
pub struct CreateAssessmentConversationCommand {
    pub user_id: UserId,
    pub assessment_id: AssessmentId,
}

/// Handler for starting assessment conversations.
pub struct CreateAssessmentConversationHandler {
    assessments: Arc<dyn AssessmentRepository>,
    conversations: Arc<dyn ConversationRepository>,
    initial_message: String,
}

impl CreateAssessmentConversationHandler {
    pub fn new(
        assessments: Arc<dyn AssessmentRepository>,
        conversations: Arc<dyn ConversationRepository>,
        config: &ConversationConfig,
    ) -> Self {
        Self {
            assessments,
            conversations,
            initial_message: config.initial_message.clone(),
        }
    }

    pub async fn handle(
        &self,
        cmd: CreateAssessmentConversationCommand,
    ) -> Result<Conversation, ConversationError> {
        // 1. Load the assessment being discussed
        let assessment = self
            .assessments
            .find_by_id(&cmd.assessment_id)
            .await?
            .ok_or_else(|| ConversationError::assessment_not_found(cmd.assessment_id))?;

        // 2. Link the conversation (checks ownership)
        let mut conversation =
            Conversation::for_assessment(ConversationId::new(), cmd.user_id, &assessment)?;

        // 3. Seed the opening message
        conversation.add_message(Message::user(self.initial_message.as_str())?);

        // 4. Persist
        if let Err(e) = self.conversations.save(&conversation).await {
            error!(
                conversation_id = %conversation.id(),
                assessment_id = %cmd.assessment_id,
                error = %e,
                "Failed to save conversation"
            );
            return Err(e.into());
        }

        info!(
            conversation_id = %conversation.id(),
            assessment_id = %cmd.assessment_id,
            user_id = %conversation.user_id(),
            "Assessment conversation created"
        );

        Ok(conversation)
    }
}
