//! Assessment answers before and after normalization.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::errors::InvalidInputError;
use super::values::{AgeBracket, CycleLength, FlowHeaviness, PainLevel, PeriodDuration};

/// Answers exactly as the caller collected them (form or session state).
///
/// Every field is free text; [`AssessmentInput::from_raw`] turns it into
/// typed answers. Deserialization accepts any JSON value per field: numbers
/// become their decimal text, `null` means skipped, anything else is kept as
/// its JSON text and later reported as unrecognized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAssessmentInput {
    #[serde(default, deserialize_with = "lenient_answer", alias = "age", alias = "age_bracket")]
    pub age_bracket: Option<String>,

    #[serde(default, deserialize_with = "lenient_answer", alias = "cycle_length")]
    pub cycle_length: Option<String>,

    #[serde(default, deserialize_with = "lenient_answer", alias = "period_duration")]
    pub period_duration: Option<String>,

    #[serde(default, deserialize_with = "lenient_answer", alias = "flowLevel", alias = "flow_level", alias = "flow_heaviness")]
    pub flow_heaviness: Option<String>,

    #[serde(default, deserialize_with = "lenient_answer", alias = "pain_level")]
    pub pain_level: Option<String>,
}

impl RawAssessmentInput {
    /// Starts a raw input with only the age bracket answered.
    pub fn with_age(age_bracket: impl Into<String>) -> Self {
        Self {
            age_bracket: Some(age_bracket.into()),
            ..Self::default()
        }
    }

    pub fn cycle_length(mut self, value: impl Into<String>) -> Self {
        self.cycle_length = Some(value.into());
        self
    }

    pub fn period_duration(mut self, value: impl Into<String>) -> Self {
        self.period_duration = Some(value.into());
        self
    }

    pub fn flow_heaviness(mut self, value: impl Into<String>) -> Self {
        self.flow_heaviness = Some(value.into());
        self
    }

    pub fn pain_level(mut self, value: impl Into<String>) -> Self {
        self.pain_level = Some(value.into());
        self
    }

    /// Optional answers that were given but could not be understood.
    ///
    /// Those answers are treated as unspecified during classification.
    pub fn unrecognized_fields(&self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if given(&self.cycle_length).is_some_and(|v| CycleLength::parse(v).is_none()) {
            fields.push("cycle_length");
        }
        if given(&self.period_duration).is_some_and(|v| PeriodDuration::parse(v).is_none()) {
            fields.push("period_duration");
        }
        if given(&self.flow_heaviness).is_some_and(|v| FlowHeaviness::parse(v).is_none()) {
            fields.push("flow_heaviness");
        }
        if given(&self.pain_level).is_some_and(|v| PainLevel::parse(v).is_none()) {
            fields.push("pain_level");
        }
        fields
    }
}

/// Reads one answer from any JSON value without failing the whole record.
fn lenient_answer<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let answer = match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        other => Some(other.to_string()),
    };
    Ok(answer)
}

/// A non-blank answer, if any.
fn given(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Normalized assessment answers.
///
/// # Invariants
///
/// - `age_bracket` is always present; it is the only required answer
/// - other answers are `None` when skipped or not understood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentInput {
    pub age_bracket: AgeBracket,
    pub cycle_length: Option<CycleLength>,
    pub period_duration: Option<PeriodDuration>,
    pub flow_heaviness: Option<FlowHeaviness>,
    pub pain_level: Option<PainLevel>,
}

impl AssessmentInput {
    /// Creates an input with only the age bracket answered.
    pub fn new(age_bracket: AgeBracket) -> Self {
        Self {
            age_bracket,
            cycle_length: None,
            period_duration: None,
            flow_heaviness: None,
            pain_level: None,
        }
    }

    pub fn with_cycle_length(mut self, value: CycleLength) -> Self {
        self.cycle_length = Some(value);
        self
    }

    pub fn with_period_duration(mut self, value: PeriodDuration) -> Self {
        self.period_duration = Some(value);
        self
    }

    pub fn with_flow_heaviness(mut self, value: FlowHeaviness) -> Self {
        self.flow_heaviness = Some(value);
        self
    }

    pub fn with_pain_level(mut self, value: PainLevel) -> Self {
        self.pain_level = Some(value);
        self
    }

    /// Normalizes raw answers.
    ///
    /// # Errors
    ///
    /// - `InvalidInputError` if the age bracket is missing, blank, or unknown
    ///
    /// Unknown optional answers never fail; they become `None`.
    pub fn from_raw(raw: &RawAssessmentInput) -> Result<Self, InvalidInputError> {
        let age = given(&raw.age_bracket).ok_or_else(|| InvalidInputError::missing("age_bracket"))?;
        let age_bracket = AgeBracket::parse(age)
            .ok_or_else(|| InvalidInputError::unrecognized("age_bracket", age))?;

        Ok(Self {
            age_bracket,
            cycle_length: given(&raw.cycle_length).and_then(CycleLength::parse),
            period_duration: given(&raw.period_duration).and_then(PeriodDuration::parse),
            flow_heaviness: given(&raw.flow_heaviness).and_then(FlowHeaviness::parse),
            pain_level: given(&raw.pain_level).and_then(PainLevel::parse),
        })
    }
}
