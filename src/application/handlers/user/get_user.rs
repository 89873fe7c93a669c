//! GetUserHandler - Loads one profile.

use std::sync::Arc;

use crate::domain::foundation::UserId;
use crate::domain::user::{UserError, UserProfile};
use crate::ports::UserRepository;

pub struct GetUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl GetUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<UserProfile, UserError> {
        self.repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| UserError::not_found(user_id.clone()))
    }
}
