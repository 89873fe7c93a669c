//! User repository port.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::user::UserProfile;
use async_trait::async_trait;

/// Repository port for UserProfile persistence.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new profile.
    ///
    /// # Errors
    ///
    /// - `AlreadyExists` if a profile with the same id is stored
    /// - `DatabaseError` on persistence failure
    async fn save(&self, profile: &UserProfile) -> Result<(), DomainError>;

    /// Replace an existing profile.
    ///
    /// # Errors
    ///
    /// - `UserNotFound` if the profile doesn't exist
    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError>;

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError>;

    /// All profiles, oldest first.
    async fn find_all(&self) -> Result<Vec<UserProfile>, DomainError>;

    /// # Errors
    ///
    /// - `UserNotFound` if the profile doesn't exist
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;
}
