//! Adapters - Implementations of port interfaces.
//!
//! - `memory` - In-memory repositories (tests, local runs, the `dottie` binary)

pub mod memory;

pub use memory::{
    InMemoryAssessmentRepository, InMemoryConversationRepository, InMemoryUserRepository,
};
