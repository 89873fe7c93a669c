//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers write, query handlers read; both take ports as `Arc<dyn _>`.

pub mod handlers;

pub use handlers::{
    // Assessment handlers
    CreateAssessmentCommand, CreateAssessmentHandler, CreateAssessmentResult,
    DeleteAssessmentCommand, DeleteAssessmentHandler,
    GetAssessmentHandler, GetAssessmentQuery, ListAssessmentsHandler,
    // Conversation handlers
    CreateAssessmentConversationCommand, CreateAssessmentConversationHandler,
    DeleteConversationCommand, DeleteConversationHandler,
    GetConversationHandler, GetConversationQuery, ListConversationsHandler,
    // User handlers
    DeleteUserHandler, GetUserHandler, ListUsersHandler,
    RegisterUserCommand, RegisterUserHandler,
    UpdateUserProfileCommand, UpdateUserProfileHandler,
};
