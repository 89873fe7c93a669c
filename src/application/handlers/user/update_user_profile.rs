//! UpdateUserProfileHandler - Applies a partial profile change.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::user::{ProfileUpdate, UserError, UserProfile};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct UpdateUserProfileCommand {
    pub user_id: UserId,
    pub update: ProfileUpdate,
}

pub struct UpdateUserProfileHandler {
    repository: Arc<dyn UserRepository>,
}

impl UpdateUserProfileHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: UpdateUserProfileCommand) -> Result<UserProfile, UserError> {
        let mut profile = self
            .repository
            .find_by_id(&cmd.user_id)
            .await?
            .ok_or_else(|| UserError::not_found(cmd.user_id.clone()))?;

        if cmd.update.is_empty() {
            return Ok(profile);
        }

        profile.apply_update(cmd.update)?;
        self.repository.update(&profile).await?;

        info!(user_id = %profile.id(), "User profile updated");
        Ok(profile)
    }
}
