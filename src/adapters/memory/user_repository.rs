//! In-memory user repository.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::user::UserProfile;
use crate::ports::UserRepository;

/// In-memory storage for user profiles
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    users: Arc<RwLock<HashMap<UserId, UserProfile>>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored profiles
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

fn not_found(id: &UserId) -> DomainError {
    DomainError::new(ErrorCode::UserNotFound, format!("User not found: {}", id))
        .with_detail("user_id", id.as_str())
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        if users.contains_key(profile.id()) {
            return Err(DomainError::new(
                ErrorCode::AlreadyExists,
                format!("User already exists: {}", profile.id()),
            )
            .with_detail("user_id", profile.id().as_str()));
        }
        users.insert(profile.id().clone(), profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        match users.get_mut(profile.id()) {
            Some(stored) => {
                *stored = profile.clone();
                Ok(())
            }
            None => Err(not_found(profile.id())),
        }
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        Ok(self.users.read().await.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<UserProfile>, DomainError> {
        let mut all: Vec<UserProfile> = self.users.read().await.values().cloned().collect();
        all.sort_by(|a, b| {
            a.created_at()
                .cmp(b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        Ok(all)
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        match self.users.write().await.remove(id) {
            Some(_) => Ok(()),
            None => Err(not_found(id)),
        }
    }
}
