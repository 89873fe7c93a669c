//! DeleteAssessmentHandler - Removes an assessment owned by the caller.

use std::sync::Arc;

use tracing::info;

use crate::domain::assessment::AssessmentError;
use crate::domain::foundation::{AssessmentId, UserId};
use crate::ports::AssessmentRepository;

/// Command to delete an assessment.
#[derive(Debug, Clone)]
pub struct DeleteAssessmentCommand {
    pub user_id: UserId,
    pub assessment_id: AssessmentId,
}

/// Handler for deleting assessments.
pub struct DeleteAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl DeleteAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, cmd: DeleteAssessmentCommand) -> Result<(), AssessmentError> {
        let assessment = self
            .repository
            .find_by_id(&cmd.assessment_id)
            .await?
            .ok_or_else(|| AssessmentError::not_found(cmd.assessment_id))?;

        assessment.authorize(&cmd.user_id)?;
        self.repository.delete(&cmd.assessment_id).await?;

        info!(assessment_id = %cmd.assessment_id, user_id = %cmd.user_id, "Assessment deleted");
        Ok(())
    }
}
