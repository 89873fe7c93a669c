//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, timestamps, errors)
//! - `assessment` - Menstrual pattern classification and the assessment aggregate
//! - `conversation` - Chat threads seeded from assessments
//! - `user` - User profiles

pub mod assessment;
pub mod conversation;
pub mod foundation;
pub mod user;
