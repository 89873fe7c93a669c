//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AssessmentRepository` - Assessment persistence
//! - `ConversationRepository` - Conversation persistence
//! - `UserRepository` - User profile persistence

mod assessment_repository;
mod conversation_repository;
mod user_repository;

pub use assessment_repository::AssessmentRepository;
pub use conversation_repository::ConversationRepository;
pub use user_repository::UserRepository;
