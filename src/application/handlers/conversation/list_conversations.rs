//! ListConversationsHandler - A user's conversations, most recent first.

use std::sync::Arc;

use crate::domain::conversation::{Conversation, ConversationError};
use crate::domain::foundation::UserId;
use crate::ports::ConversationRepository;

pub struct ListConversationsHandler {
    repository: Arc<dyn ConversationRepository>,
}

impl ListConversationsHandler {
    pub fn new(repository: Arc<dyn ConversationRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<Vec<Conversation>, ConversationError> {
        Ok(self.repository.find_by_user_id(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryConversationRepository;
    use crate::domain::foundation::ConversationId;

    #[tokio::test]
    async fn returns_only_owned_conversations() {
        let repo = Arc::new(InMemoryConversationRepository::new());
        let alice = UserId::new("alice").unwrap();
        repo.save(&Conversation::new(ConversationId::new(), alice.clone()))
            .await
            .unwrap();
        repo.save(&Conversation::new(ConversationId::new(), UserId::new("bob").unwrap()))
            .await
            .unwrap();

        let handler = ListConversationsHandler::new(repo);
        let listed = handler.handle(&alice).await.unwrap();

        assert_eq!(listed.len(), 1);
        assert!(listed[0].is_owner(&alice));
    }
}
