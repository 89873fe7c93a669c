//! In-memory repository adapters.
//!
//! State lives behind `Arc<tokio::sync::RwLock<_>>`, so clones share storage.

mod assessment_repository;
mod conversation_repository;
mod user_repository;

pub use assessment_repository::InMemoryAssessmentRepository;
pub use conversation_repository::InMemoryConversationRepository;
pub use user_repository::InMemoryUserRepository;
