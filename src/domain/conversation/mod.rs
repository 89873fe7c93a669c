//! Conversation domain module.
//!
//! Chat threads a user opens to discuss an assessment result.

mod aggregate;
mod errors;
mod message;

pub use aggregate::Conversation;
pub use errors::ConversationError;
pub use message::{Message, Role};
