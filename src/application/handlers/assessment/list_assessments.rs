//! ListAssessmentsHandler - A user's assessment history.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::UserId;
use crate::ports::AssessmentRepository;

/// Handler for listing a user's assessments, newest first.
pub struct ListAssessmentsHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl ListAssessmentsHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, user_id: &UserId) -> Result<Vec<Assessment>, AssessmentError> {
        Ok(self.repository.find_by_user_id(user_id).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryAssessmentRepository;
    use crate::domain::assessment::{AgeBracket, AssessmentInput, Symptoms};
    use crate::domain::foundation::AssessmentId;

    #[tokio::test]
    async fn lists_only_the_users_assessments() {
        let repo = Arc::new(InMemoryAssessmentRepository::new());
        for owner in ["alice", "alice", "bob"] {
            let assessment = Assessment::new(
                AssessmentId::new(),
                UserId::new(owner).unwrap(),
                AssessmentInput::new(AgeBracket::Age25To34),
                Symptoms::default(),
            );
            repo.save(&assessment).await.unwrap();
        }

        let handler = ListAssessmentsHandler::new(repo);
        let alice = handler.handle(&UserId::new("alice").unwrap()).await.unwrap();
        let carol = handler.handle(&UserId::new("carol").unwrap()).await.unwrap();

        assert_eq!(alice.len(), 2);
        assert!(carol.is_empty());
    }
}
