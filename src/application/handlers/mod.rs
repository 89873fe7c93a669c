//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod assessment;
pub mod conversation;
pub mod user;

pub use assessment::{
    CreateAssessmentCommand, CreateAssessmentHandler, CreateAssessmentResult,
    DeleteAssessmentCommand, DeleteAssessmentHandler, GetAssessmentHandler, GetAssessmentQuery,
    ListAssessmentsHandler,
};
pub use conversation::{
    CreateAssessmentConversationCommand, CreateAssessmentConversationHandler,
    DeleteConversationCommand, DeleteConversationHandler, GetConversationHandler,
    GetConversationQuery, ListConversationsHandler,
};
pub use user::{
    DeleteUserHandler, GetUserHandler, ListUsersHandler, RegisterUserCommand,
    RegisterUserHandler, UpdateUserProfileCommand, UpdateUserProfileHandler,
};
