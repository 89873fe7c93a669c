//! GetAssessmentHandler - Loads one assessment for its owner.

use std::sync::Arc;

use crate::domain::assessment::{Assessment, AssessmentError};
use crate::domain::foundation::{AssessmentId, UserId};
use crate::ports::AssessmentRepository;

/// Query for a single assessment.
#[derive(Debug, Clone)]
pub struct GetAssessmentQuery {
    pub user_id: UserId,
    pub assessment_id: AssessmentId,
}

/// Handler for loading assessments.
pub struct GetAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl GetAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: GetAssessmentQuery) -> Result<Assessment, AssessmentError> {
        let assessment = self
            .repository
            .find_by_id(&query.assessment_id)
            .await?
            .ok_or_else(|| AssessmentError::not_found(query.assessment_id))?;

        assessment.authorize(&query.user_id)?;
        Ok(assessment)
    }
}
