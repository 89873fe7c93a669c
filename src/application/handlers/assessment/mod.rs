//! Assessment command and query handlers.

mod create_assessment;
mod delete_assessment;
mod get_assessment;
mod list_assessments;

pub use create_assessment::{
    CreateAssessmentCommand, CreateAssessmentHandler, CreateAssessmentResult,
};
pub use delete_assessment::{DeleteAssessmentCommand, DeleteAssessmentHandler};
pub use get_assessment::{GetAssessmentHandler, GetAssessmentQuery};
pub use list_assessments::ListAssessmentsHandler;
