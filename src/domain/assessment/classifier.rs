//! Pattern classifier - the assessment decision table.
//!
//! Rules are evaluated top to bottom and the first match wins:
//!
//! | # | Rule | Condition | Category |
//! |---|------|-----------|----------|
//! | 1 | `adolescent` | age under 13 or 13-17 | `developing` |
//! | 2 | `regular-cycle` | cycle 21-35 days and period up to 7 days | `regular` |
//! | 3 | `irregular-cycle` | cycle length irregular / variable | `irregular` |
//! | 4 | `heavy-with-pain` | heavy flow and moderate-or-worse pain | `heavy` |
//! | 5 | `residual` | always | `other` |
//!
//! Classification is pure: no I/O, no clock, no shared state.

use super::errors::InvalidInputError;
use super::input::{AssessmentInput, RawAssessmentInput};
use super::pattern::{PatternCategory, PatternResult};
use super::recommendations;

/// One row of the decision table.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub category: PatternCategory,
    pub predicate: fn(&AssessmentInput) -> bool,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("category", &self.category)
            .finish()
    }
}

impl Rule {
    pub fn matches(&self, input: &AssessmentInput) -> bool {
        (self.predicate)(input)
    }
}

fn is_adolescent(input: &AssessmentInput) -> bool {
    input.age_bracket.is_adolescent()
}

fn has_regular_cycle(input: &AssessmentInput) -> bool {
    input.cycle_length.is_some_and(|c| c.is_regular_range())
        && input.period_duration.is_some_and(|d| d.is_normal_range())
}

fn has_irregular_cycle(input: &AssessmentInput) -> bool {
    input.cycle_length.is_some_and(|c| c.is_irregular())
}

fn has_heavy_flow_with_pain(input: &AssessmentInput) -> bool {
    input.flow_heaviness.is_some_and(|f| f.is_elevated())
        && input.pain_level.is_some_and(|p| p.is_elevated())
}

fn always(_: &AssessmentInput) -> bool {
    true
}

const RULES: &[Rule] = &[
    Rule {
        name: "adolescent",
        category: PatternCategory::Developing,
        predicate: is_adolescent,
    },
    Rule {
        name: "regular-cycle",
        category: PatternCategory::Regular,
        predicate: has_regular_cycle,
    },
    Rule {
        name: "irregular-cycle",
        category: PatternCategory::Irregular,
        predicate: has_irregular_cycle,
    },
    Rule {
        name: "heavy-with-pain",
        category: PatternCategory::Heavy,
        predicate: has_heavy_flow_with_pain,
    },
    // Must stay last: guarantees a match for every input.
    Rule {
        name: "residual",
        category: PatternCategory::Other,
        predicate: always,
    },
];

/// Stateless classifier over [`AssessmentInput`].
pub struct PatternClassifier;

impl PatternClassifier {
    /// The decision table in evaluation order.
    pub fn rules() -> &'static [Rule] {
        RULES
    }

    /// Returns the first rule that matches.
    pub fn matching_rule(input: &AssessmentInput) -> &'static Rule {
        RULES
            .iter()
            .find(|rule| rule.matches(input))
            .unwrap_or(&RULES[RULES.len() - 1])
    }

    /// Classifies normalized answers. Never fails.
    pub fn classify(input: &AssessmentInput) -> PatternResult {
        recommendations::result_for(Self::matching_rule(input).category)
    }

    /// Normalizes and classifies raw answers.
    ///
    /// # Errors
    ///
    /// - `InvalidInputError` if the age bracket is missing or unknown
    pub fn classify_raw(raw: &RawAssessmentInput) -> Result<PatternResult, InvalidInputError> {
        let input = AssessmentInput::from_raw(raw)?;
        Ok(Self::classify(&input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::errors::InvalidInputReason;
    use crate::domain::assessment::values::{
        AgeBracket, CycleLength, FlowHeaviness, PainLevel, PeriodDuration,
    };

    fn adult() -> AssessmentInput {
        AssessmentInput::new(AgeBracket::Age25To34)
    }

    fn rule(name: &str) -> &'static Rule {
        PatternClassifier::rules()
            .iter()
            .find(|r| r.name == name)
            .unwrap()
    }

    const DEVELOPING_TITLES: [&str; 4] = [
        "Be Patient",
        "Track Your Cycle",
        "Learn About Your Body",
        "Talk to Someone You Trust",
    ];

    // ─────────────────────────────────────────────────────────────────────
    // Scenarios
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn adolescent_with_variable_cycle_is_developing() {
        let raw = RawAssessmentInput::with_age("13-17").cycle_length("variable");
        let result = PatternClassifier::classify_raw(&raw).unwrap();

        assert_eq!(result.category(), PatternCategory::Developing);
        assert!(result.headline().contains("establishing a regular pattern"));
        assert_eq!(result.recommendation_titles(), DEVELOPING_TITLES);
    }

    #[test]
    fn adolescent_with_textbook_regular_cycle_is_still_developing() {
        let raw = RawAssessmentInput::with_age("13-17")
            .cycle_length("26-30 days")
            .period_duration("4-5 days")
            .flow_heaviness("moderate")
            .pain_level("mild");

        let result = PatternClassifier::classify_raw(&raw).unwrap();
        assert_eq!(result.category(), PatternCategory::Developing);
        assert_eq!(result.recommendation_titles()[0], "Be Patient");
    }

    #[test]
    fn missing_age_is_invalid_input() {
        let raw = RawAssessmentInput::default()
            .cycle_length("26-30 days")
            .period_duration("4-5 days");

        let err = PatternClassifier::classify_raw(&raw).unwrap_err();
        assert_eq!(err.field, "age_bracket");
        assert_eq!(err.reason, InvalidInputReason::Missing);
    }

    #[test]
    fn adult_with_regular_cycle_and_duration_is_regular() {
        let raw = RawAssessmentInput::with_age("25-34")
            .cycle_length("26-30 days")
            .period_duration("4-5 days");

        let result = PatternClassifier::classify_raw(&raw).unwrap();
        assert_eq!(result.category(), PatternCategory::Regular);
    }

    // ─────────────────────────────────────────────────────────────────────
    // Individual rules
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn table_order_is_fixed() {
        let names: Vec<_> = PatternClassifier::rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            vec!["adolescent", "regular-cycle", "irregular-cycle", "heavy-with-pain", "residual"]
        );
    }

    #[test]
    fn adolescent_rule_covers_under_13() {
        let rule = rule("adolescent");
        assert!(rule.matches(&AssessmentInput::new(AgeBracket::Under13)));
        assert!(rule.matches(&AssessmentInput::new(AgeBracket::Age13To17)));
        assert!(!rule.matches(&AssessmentInput::new(AgeBracket::Age18To24)));
    }

    #[test]
    fn regular_rule_needs_both_cycle_and_duration() {
        let rule = rule("regular-cycle");
        let cycle_only = adult().with_cycle_length(CycleLength::Days21To25);
        let both = cycle_only.with_period_duration(PeriodDuration::Days6To7);
        let long_period = cycle_only.with_period_duration(PeriodDuration::Days8Plus);

        assert!(!rule.matches(&cycle_only));
        assert!(rule.matches(&both));
        assert!(!rule.matches(&long_period));
    }

    #[test]
    fn irregular_rule_needs_explicit_irregular_answer() {
        let rule = rule("irregular-cycle");
        assert!(rule.matches(&adult().with_cycle_length(CycleLength::Irregular)));
        assert!(!rule.matches(&adult().with_cycle_length(CycleLength::MoreThan40)));
        assert!(!rule.matches(&adult()));
    }

    #[test]
    fn heavy_rule_needs_flow_and_pain() {
        let rule = rule("heavy-with-pain");
        let heavy = adult().with_flow_heaviness(FlowHeaviness::Heavy);

        assert!(!rule.matches(&heavy));
        assert!(!rule.matches(&heavy.with_pain_level(PainLevel::Mild)));
        assert!(rule.matches(&heavy.with_pain_level(PainLevel::Severe)));
        assert!(rule.matches(
            &adult()
                .with_flow_heaviness(FlowHeaviness::VeryHeavy)
                .with_pain_level(PainLevel::Moderate)
        ));
    }

    #[test]
    fn residual_rule_matches_anything() {
        assert!(rule("residual").matches(&adult()));
    }

    // ─────────────────────────────────────────────────────────────────────
    // Priority
    // ─────────────────────────────────────────────────────────────────────

    #[test]
    fn irregular_adult_is_irregular() {
        let input = adult().with_cycle_length(CycleLength::Irregular);
        assert_eq!(
            PatternClassifier::classify(&input).category(),
            PatternCategory::Irregular
        );
    }

    #[test]
    fn irregular_cycle_outranks_heavy_flow() {
        let input = adult()
            .with_cycle_length(CycleLength::Irregular)
            .with_flow_heaviness(FlowHeaviness::Heavy)
            .with_pain_level(PainLevel::Severe);
        assert_eq!(PatternClassifier::matching_rule(&input).name, "irregular-cycle");
    }

    #[test]
    fn regular_cycle_outranks_heavy_flow() {
        let input = adult()
            .with_cycle_length(CycleLength::Days26To30)
            .with_period_duration(PeriodDuration::Days4To5)
            .with_flow_heaviness(FlowHeaviness::Heavy)
            .with_pain_level(PainLevel::Severe);
        assert_eq!(
            PatternClassifier::classify(&input).category(),
            PatternCategory::Regular
        );
    }

    #[test]
    fn heavy_flow_with_pain_and_unknown_cycle_is_heavy() {
        let input = adult()
            .with_flow_heaviness(FlowHeaviness::Heavy)
            .with_pain_level(PainLevel::Debilitating);
        let result = PatternClassifier::classify(&input);
        assert_eq!(result.category(), PatternCategory::Heavy);
        assert_eq!(result.recommendation_titles()[0], "Consult a Healthcare Provider");
    }

    #[test]
    fn age_only_adult_falls_to_other() {
        let result = PatternClassifier::classify(&adult());
        assert_eq!(result.category(), PatternCategory::Other);
        assert!(!result.recommendations().is_empty());
    }

    #[test]
    fn unknown_optional_answers_fall_through_to_other() {
        let raw = RawAssessmentInput::with_age("35-44")
            .cycle_length("fortnightly")
            .period_duration("forever");
        let result = PatternClassifier::classify_raw(&raw).unwrap();
        assert_eq!(result.category(), PatternCategory::Other);
    }

    #[test]
    fn classification_is_deterministic() {
        let input = adult()
            .with_cycle_length(CycleLength::Days31To35)
            .with_period_duration(PeriodDuration::Days1To3);
        assert_eq!(
            PatternClassifier::classify(&input),
            PatternClassifier::classify(&input)
        );
    }
}
