//! RegisterUserHandler - Validates and stores a new profile.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::assessment::AgeBracket;
use crate::domain::foundation::{ErrorCode, UserId};
use crate::domain::user::{UserError, UserProfile};
use crate::ports::UserRepository;

#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub user_id: UserId,
    pub username: String,
    pub email: String,
    pub age_bracket: Option<AgeBracket>,
}

pub struct RegisterUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl RegisterUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: RegisterUserCommand) -> Result<UserProfile, UserError> {
        let profile = UserProfile::new(cmd.user_id, cmd.username, cmd.email, cmd.age_bracket)?;

        match self.repository.save(&profile).await {
            Ok(()) => {}
            Err(e) if e.code == ErrorCode::AlreadyExists => {
                warn!(user_id = %profile.id(), "Duplicate user registration");
                return Err(UserError::already_exists(profile.id().clone()));
            }
            Err(e) => return Err(e.into()),
        }

        info!(user_id = %profile.id(), "User registered");
        Ok(profile)
    }
}
