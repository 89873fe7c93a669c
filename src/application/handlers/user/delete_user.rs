//! DeleteUserHandler - Removes a profile.

use std::sync::Arc;

use tracing::info;

use crate::domain::foundation::UserId;
use crate::domain::user::UserError;
use crate::ports::UserRepository;

pub struct DeleteUserHandler {
    repository: Arc<dyn UserRepository>,
}

impl DeleteUserHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<(), UserError> {
        self.repository.delete(user_id).await?;

        info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
