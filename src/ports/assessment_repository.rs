//! Assessment repository port.
//!
//! Defines the contract for persisting and retrieving Assessment aggregates.
//! Records are keyed by assessment id and scoped by user id; the creation
//! timestamp is part of the aggregate.

use crate::domain::assessment::Assessment;
use crate::domain::foundation::{AssessmentId, DomainError, UserId};
use async_trait::async_trait;

/// Repository port for Assessment aggregate persistence.
#[async_trait]
pub trait AssessmentRepository: Send + Sync {
    /// Save a new assessment.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn save(&self, assessment: &Assessment) -> Result<(), DomainError>;

    /// Find an assessment by its ID.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: &AssessmentId) -> Result<Option<Assessment>, DomainError>;

    /// Find all assessments owned by a user, newest first.
    async fn find_by_user_id(&self, user_id: &UserId) -> Result<Vec<Assessment>, DomainError>;

    /// Delete an assessment.
    ///
    /// # Errors
    ///
    /// - `AssessmentNotFound` if the assessment doesn't exist
    /// - `DatabaseError` on persistence failure
    async fn delete(&self, id: &AssessmentId) -> Result<(), DomainError>;
}
