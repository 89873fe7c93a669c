//! Conversation repository port.

use crate::domain::conversation::Conversation;
use crate::domain::foundation::{ConversationId, DomainError, UserId};
use async_trait::async_trait;

/// Repository port for Conversation aggregate persistence.
#[async_trait]
pub trait ConversationRepository: Send + Sync {
    /// Save a new conversation together with its messages.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, conversation: &Conversation) -> Result<(), DomainError>;

    /// Find a conversation by its ID.
    async fn find_by_id(&self, id: &ConversationId) -> Result<Option<Conversation>, DomainError>;

    /// Find a user's conversations, most recently updated first.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Conversation>, DomainError>;

    /// Delete a conversation.
    ///
    /// # Errors
    ///
    /// - `ConversationNotFound` if the conversation doesn't exist
    async fn delete(&self, id: &ConversationId) -> Result<(), DomainError>;
}
