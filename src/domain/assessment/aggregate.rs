//! Assessment aggregate - a classified, persisted questionnaire.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{AssessmentId, DomainError, ErrorCode, Timestamp, UserId};

use super::classifier::PatternClassifier;
use super::input::AssessmentInput;
use super::pattern::{PatternCategory, PatternResult};

/// Free-form symptom answers recorded alongside the pattern questions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symptoms {
    physical: Vec<String>,
    emotional: Vec<String>,
    other: Option<String>,
}

impl Symptoms {
    /// Cleans symptom lists: trims entries, drops blanks and repeats.
    pub fn new(
        physical: impl IntoIterator<Item = String>,
        emotional: impl IntoIterator<Item = String>,
        other: Option<String>,
    ) -> Self {
        Self {
            physical: clean_list(physical),
            emotional: clean_list(emotional),
            other: other
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }

    pub fn physical(&self) -> &[String] {
        &self.physical
    }

    pub fn emotional(&self) -> &[String] {
        &self.emotional
    }

    pub fn other(&self) -> Option<&str> {
        self.other.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.physical.is_empty() && self.emotional.is_empty() && self.other.is_none()
    }
}

fn clean_list(items: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut cleaned: Vec<String> = Vec::new();
    for item in items {
        let item = item.trim();
        if !item.is_empty() && !cleaned.iter().any(|c| c == item) {
            cleaned.push(item.to_string());
        }
    }
    cleaned
}

/// Assessment aggregate.
///
/// # Invariants
///
/// - `result` is the classification of `input` at creation time
/// - `id`, `user_id` and `created_at` never change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    id: AssessmentId,
    user_id: UserId,
    input: AssessmentInput,
    result: PatternResult,
    symptoms: Symptoms,
    created_at: Timestamp,
}

impl Assessment {
    /// Classifies `input` and records the outcome for `user_id`.
    pub fn new(id: AssessmentId, user_id: UserId, input: AssessmentInput, symptoms: Symptoms) -> Self {
        let result = PatternClassifier::classify(&input);
        Self {
            id,
            user_id,
            input,
            result,
            symptoms,
            created_at: Timestamp::now(),
        }
    }

    /// Reconstitute an assessment from persistence (no classification).
    pub fn reconstitute(
        id: AssessmentId,
        user_id: UserId,
        input: AssessmentInput,
        result: PatternResult,
        symptoms: Symptoms,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            input,
            result,
            symptoms,
            created_at,
        }
    }

    pub fn id(&self) -> &AssessmentId {
        &self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn input(&self) -> &AssessmentInput {
        &self.input
    }

    pub fn result(&self) -> &PatternResult {
        &self.result
    }

    /// Shortcut for `result().category()`.
    pub fn pattern(&self) -> PatternCategory {
        self.result.category()
    }

    pub fn symptoms(&self) -> &Symptoms {
        &self.symptoms
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn is_owner(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Validates that the user can access this assessment.
    ///
    /// # Errors
    ///
    /// - `Forbidden` if user is not the owner
    pub fn authorize(&self, user_id: &UserId) -> Result<(), DomainError> {
        if self.is_owner(user_id) {
            Ok(())
        } else {
            Err(DomainError::new(
                ErrorCode::Forbidden,
                "User is not authorized to access this assessment",
            ))
        }
    }
}
