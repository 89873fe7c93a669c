//! GetConversationHandler - Loads one conversation for its owner.

use std::sync::Arc;

use crate::domain::conversation::{Conversation, ConversationError};
use crate::domain::foundation::{ConversationId, UserId};
use crate::ports::ConversationRepository;

/// Query for a single conversation.
#[derive(Debug, Clone)]
pub struct GetConversationQuery {
    pub user_id: UserId,
    pub conversation_id: ConversationId,
}

pub struct GetConversationHandler {
    repository: Arc<dyn ConversationRepository>,
}

impl GetConversationHandler {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        query: GetConversationQuery,
    ) -> Result<Conversation, ConversationError> {
        let conversation = self
            .repository
            .find_by_id(&query.conversation_id)
            .await?
            .ok_or_else(|| ConversationError::not_found(query.conversation_id))?;

        conversation.authorize(&query.user_id)?;
        Ok(conversation)
    }
}
