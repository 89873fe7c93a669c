//! Conversation configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Longest accepted initial message.
pub const MAX_INITIAL_MESSAGE_LENGTH: usize = 2000;

/// Settings for conversations opened from an assessment
#[derive(Debug, Clone, Deserialize)]
pub struct ConversationConfig {
    /// First user message posted when a conversation is opened for an assessment
    #[serde(default = "default_initial_message")]
    pub initial_message: String,
}

impl ConversationConfig {
    /// Validate conversation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.initial_message.trim().is_empty() {
            return Err(ValidationError::MissingRequired("conversation.initial_message"));
        }
        if self.initial_message.chars().count() > MAX_INITIAL_MESSAGE_LENGTH {
            return Err(ValidationError::InitialMessageTooLong);
        }
        Ok(())
    }
}

impl Default for ConversationConfig {
    fn default() -> Self {
        Self {
            initial_message: default_initial_message(),
        }
    }
}

fn default_initial_message() -> String {
    "Hi, could you look at my assessment results and provide some guidance?".to_string()
}
