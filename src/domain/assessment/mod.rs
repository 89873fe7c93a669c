//! Assessment module - menstrual pattern classification.
//!
//! # Components
//!
//! - `values` - Categorical answers (age bracket, cycle length, ...)
//! - `input` - Raw and normalized assessment answers
//! - `classifier` - Priority-ordered decision table (`PatternClassifier`)
//! - `recommendations` - Static headline and recommendation copy per category
//! - `aggregate` - The persisted `Assessment`
//!
//! The classifier is a pure function; persistence and logging belong to the
//! application layer.

mod aggregate;
mod classifier;
mod errors;
mod input;
mod pattern;
mod recommendations;
mod values;

pub use aggregate::{Assessment, Symptoms};
pub use classifier::{PatternClassifier, Rule};
pub use errors::{AssessmentError, InvalidInputError, InvalidInputReason};
pub use input::{AssessmentInput, RawAssessmentInput};
pub use pattern::{PatternCategory, PatternResult, Recommendation};
pub use recommendations::{headline, recommendations_for};
pub use values::{AgeBracket, CycleLength, FlowHeaviness, PainLevel, PeriodDuration};
