//! DeleteConversationHandler - Removes a conversation owned by the caller.

use std::sync::Arc;

use tracing::info;

use crate::domain::conversation::ConversationError;
use crate::domain::foundation::{ConversationId, UserId};
use crate::ports::ConversationRepository;

#[derive(Debug, Clone)]
pub struct DeleteConversationCommand {
    pub user_id: UserId,
    pub conversation_id: ConversationId,
}

pub struct DeleteConversationHandler {
    repository: Arc<dyn ConversationRepository>,
}

impl DeleteConversationHandler {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteConversationCommand) -> Result<(), ConversationError> {
        let conversation = self
            .repository
            .find_by_id(&cmd.conversation_id)
            .await?
            .ok_or_else(|| ConversationError::not_found(cmd.conversation_id))?;

        conversation.authorize(&cmd.user_id)?;
        self.repository.delete(&cmd.conversation_id).await?;

        info!(conversation_id = %cmd.conversation_id, user_id = %cmd.user_id, "Conversation deleted");
        Ok(())
    }
}
