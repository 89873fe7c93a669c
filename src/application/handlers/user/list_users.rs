//! ListUsersHandler - All profiles in registration order.

use std::sync::Arc;

use crate::domain::user::{UserError, UserProfile};
use crate::ports::UserRepository;

pub struct ListUsersHandler {
    repository: Arc<dyn UserRepository>,
}

impl ListUsersHandler {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self) -> Result<Vec<UserProfile>, UserError> {
        Ok(self.repository.find_all().await?)
    }
}
