//! Conversation command and query handlers.

mod create_assessment_conversation;
mod delete_conversation;
mod get_conversation;
mod list_conversations;

pub use create_assessment_conversation::{
    CreateAssessmentConversationCommand, CreateAssessmentConversationHandler,
};
pub use delete_conversation::{DeleteConversationCommand, DeleteConversationHandler};
pub use get_conversation::{GetConversationHandler, GetConversationQuery};
pub use list_conversations::ListConversationsHandler;
