//! CreateAssessmentHandler - Classifies answers and stores the assessment.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::assessment::{
    Assessment, AssessmentError, AssessmentInput, RawAssessmentInput, Symptoms,
};
use crate::domain::foundation::{AssessmentId, UserId};
use crate::ports::AssessmentRepository;

/// Command to create a new assessment.
#[derive(Debug, Clone)]
pub struct CreateAssessmentCommand {
    pub user_id: UserId,
    pub input: RawAssessmentInput,
    pub physical_symptoms: Vec<String>,
    pub emotional_symptoms: Vec<String>,
    pub other_symptoms: Option<String>,
}

impl CreateAssessmentCommand {
    /// Command without symptom answers.
    pub fn new(user_id: UserId, input: RawAssessmentInput) -> Self {
        Self {
            user_id,
            input,
            physical_symptoms: Vec::new(),
            emotional_symptoms: Vec::new(),
            other_symptoms: None,
        }
    }
}

/// Result of successful assessment creation.
#[derive(Debug, Clone)]
pub struct CreateAssessmentResult {
    pub assessment: Assessment,
    /// Optional answers that were ignored because they were not understood.
    pub unrecognized_fields: Vec<&'static str>,
}

/// Handler for creating assessments.
pub struct CreateAssessmentHandler {
    repository: Arc<dyn AssessmentRepository>,
}

impl CreateAssessmentHandler {
    pub fn new(repository: Arc<dyn AssessmentRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(
        &self,
        cmd: CreateAssessmentCommand,
    ) -> Result<CreateAssessmentResult, AssessmentError> {
        // 1. Normalize answers; the age bracket is mandatory
        let input = AssessmentInput::from_raw(&cmd.input)?;

        let unrecognized_fields = cmd.input.unrecognized_fields();
        if !unrecognized_fields.is_empty() {
            debug!(
                user_id = %cmd.user_id,
                fields = ?unrecognized_fields,
                "Ignoring unrecognized assessment answers"
            );
        }

        // 2. Classify and build the aggregate
        let symptoms = Symptoms::new(
            cmd.physical_symptoms,
            cmd.emotional_symptoms,
            cmd.other_symptoms,
        );
        let assessment = Assessment::new(AssessmentId::new(), cmd.user_id, input, symptoms);

        // 3. Persist
        if let Err(e) = self.repository.save(&assessment).await {
            error!(assessment_id = %assessment.id(), error = %e, "Failed to save assessment");
            return Err(e.into());
        }

        info!(
            assessment_id = %assessment.id(),
            user_id = %assessment.user_id(),
            category = %assessment.pattern(),
            "Assessment created"
        );

        Ok(CreateAssessmentResult {
            assessment,
            unrecognized_fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::{InvalidInputReason, PatternCategory};
    use crate::domain::foundation::{DomainError, ErrorCode};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockAssessmentRepository {
        saved: Mutex<Vec<Assessment>>,
        fail_save: bool,
    }

    impl MockAssessmentRepository {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: false,
            }
        }

        fn failing() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
                fail_save: true,
            }
        }

        fn saved(&self) -> Vec<Assessment> {
            self.saved.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl AssessmentRepository for MockAssessmentRepository {
        async fn save(&self, assessment: &Assessment) -> Result<(), DomainError> {
            if self.fail_save {
                return Err(DomainError::database("Database connection failed"));
            }
            self.saved.lock().unwrap().push(assessment.clone());
            Ok(())
        }

        async fn find_by_id(&self, _id: &AssessmentId) -> Result<Option<Assessment>, DomainError> {
            Ok(None)
        }

        async fn find_by_user_id(&self, _user_id: &UserId) -> Result<Vec<Assessment>, DomainError> {
            Ok(vec![])
        }

        async fn delete(&self, _id: &AssessmentId) -> Result<(), DomainError> {
            Ok(())
        }
    }

    fn test_user_id() -> UserId {
        UserId::new("test-user-123").unwrap()
    }

    #[tokio::test]
    async fn creates_assessment_with_classification() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let handler = CreateAssessmentHandler::new(repo.clone());

        let cmd = CreateAssessmentCommand::new(
            test_user_id(),
            RawAssessmentInput::with_age("25-34")
                .cycle_length("26-30")
                .period_duration("4-5"),
        );

        let result = handler.handle(cmd).await.unwrap();
        assert_eq!(result.assessment.pattern(), PatternCategory::Regular);
        assert_eq!(result.assessment.user_id(), &test_user_id());
        assert!(result.unrecognized_fields.is_empty());
    }

    #[tokio::test]
    async fn persists_exactly_what_it_returns() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let handler = CreateAssessmentHandler::new(repo.clone());

        let result = handler
            .handle(CreateAssessmentCommand::new(
                test_user_id(),
                RawAssessmentInput::with_age("13-17"),
            ))
            .await
            .unwrap();

        let saved = repo.saved();
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0], result.assessment);
    }

    #[tokio::test]
    async fn stores_cleaned_symptoms() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let handler = CreateAssessmentHandler::new(repo);

        let cmd = CreateAssessmentCommand {
            physical_symptoms: vec!["cramps".to_string(), "bloating".to_string(), "cramps".to_string()],
            emotional_symptoms: vec!["mood_swings".to_string()],
            other_symptoms: Some("headaches".to_string()),
            ..CreateAssessmentCommand::new(test_user_id(), RawAssessmentInput::with_age("25-34"))
        };

        let result = handler.handle(cmd).await.unwrap();
        let symptoms = result.assessment.symptoms();
        assert_eq!(symptoms.physical(), ["cramps", "bloating"]);
        assert_eq!(symptoms.emotional(), ["mood_swings"]);
        assert_eq!(symptoms.other(), Some("headaches"));
    }

    #[tokio::test]
    async fn reports_unrecognized_optional_answers() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let handler = CreateAssessmentHandler::new(repo);

        let cmd = CreateAssessmentCommand::new(
            test_user_id(),
            RawAssessmentInput::with_age("35-44").flow_heaviness("torrential"),
        );

        let result = handler.handle(cmd).await.unwrap();
        assert_eq!(result.unrecognized_fields, vec!["flow_heaviness"]);
        assert_eq!(result.assessment.input().flow_heaviness, None);
    }

    #[tokio::test]
    async fn fails_without_age_and_persists_nothing() {
        let repo = Arc::new(MockAssessmentRepository::new());
        let handler = CreateAssessmentHandler::new(repo.clone());

        let cmd = CreateAssessmentCommand::new(
            test_user_id(),
            RawAssessmentInput::default().cycle_length("26-30"),
        );

        let result = handler.handle(cmd).await;
        match result {
            Err(AssessmentError::InvalidInput(err)) => {
                assert_eq!(err.field, "age_bracket");
                assert_eq!(err.reason, InvalidInputReason::Missing);
            }
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        assert!(repo.saved().is_empty());
    }

    #[tokio::test]
    async fn propagates_database_errors() {
        let repo = Arc::new(MockAssessmentRepository::failing());
        let handler = CreateAssessmentHandler::new(repo);

        let result = handler
            .handle(CreateAssessmentCommand::new(
                test_user_id(),
                RawAssessmentInput::with_age("25-34"),
            ))
            .await;

        let err = result.unwrap_err();
        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert!(err.to_string().contains("Database connection failed"));
    }
}
