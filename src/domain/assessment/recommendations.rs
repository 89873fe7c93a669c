//! Static result copy: one headline and one ordered recommendation list per
//! pattern category.
//!
//! Content lives here so wording changes never touch the decision table.

use super::pattern::{PatternCategory, PatternResult, Recommendation};

/// `(title, description)` pairs, highest priority first.
type RecommendationTable = &'static [(&'static str, &'static str)];

const DEVELOPING: RecommendationTable = &[
    (
        "Be Patient",
        "It's normal for your cycle to be irregular during adolescence. It can take 2-3 years after your first period for it to settle into a regular pattern.",
    ),
    (
        "Track Your Cycle",
        "Keep a record of when your period starts and stops. This helps you learn what's normal for you and spot changes over time.",
    ),
    (
        "Learn About Your Body",
        "Understanding how your menstrual cycle works makes it easier to know what to expect and when something might need attention.",
    ),
    (
        "Talk to Someone You Trust",
        "If you have questions or worries about your period, talk to a parent, school nurse, or doctor.",
    ),
];

const REGULAR: RecommendationTable = &[
    (
        "Track Your Cycle",
        "Keep logging your periods so you notice early if anything changes.",
    ),
    (
        "Maintain a Healthy Lifestyle",
        "Regular exercise, balanced meals and enough sleep help keep your cycle steady.",
    ),
    (
        "Regular Check-ups",
        "Keep up with routine visits to your healthcare provider, even when everything seems fine.",
    ),
];

const IRREGULAR: RecommendationTable = &[
    (
        "Track Your Cycle",
        "Record start dates, bleeding days and symptoms to give a clear picture of how your cycle varies.",
    ),
    (
        "Consult a Healthcare Provider",
        "Ongoing irregular cycles can have treatable causes such as thyroid issues or PCOS. A provider can help find out why.",
    ),
    (
        "Manage Stress",
        "Stress affects the hormones that regulate your cycle. Relaxation techniques, rest and routine can help.",
    ),
    (
        "Maintain a Healthy Weight",
        "Significant weight changes in either direction can disrupt ovulation and cycle timing.",
    ),
];

const HEAVY: RecommendationTable = &[
    (
        "Consult a Healthcare Provider",
        "Heavy bleeding with significant pain should be checked by a healthcare provider to rule out conditions like fibroids or endometriosis.",
    ),
    (
        "Track Your Symptoms",
        "Note how often you change period products, any clots, and how pain affects your day.",
    ),
    (
        "Iron-Rich Diet",
        "Heavy periods can lower iron levels. Include iron-rich foods such as leafy greens, beans and lean meat.",
    ),
    (
        "Pain Management",
        "Heat, gentle exercise and over-the-counter pain relief can ease cramps. Ask a provider if pain stops you from daily activities.",
    ),
];

const OTHER: RecommendationTable = &[
    (
        "Track Your Cycle",
        "A few months of records will make your pattern much clearer.",
    ),
    (
        "Note Any Changes",
        "Write down changes in cycle length, flow or pain so you can spot trends.",
    ),
    (
        "Consult a Healthcare Provider",
        "If anything about your cycle worries you, a healthcare provider can help you understand it.",
    ),
];

/// Headline shown above the recommendations.
pub fn headline(category: PatternCategory) -> &'static str {
    match category {
        PatternCategory::Developing => {
            "Your cycles are still establishing a regular pattern, which is normal during adolescence."
        }
        PatternCategory::Regular => "Your menstrual cycles follow a normal, healthy pattern.",
        PatternCategory::Irregular => {
            "Your cycle length varies from month to month, which can be a sign of an irregular pattern."
        }
        PatternCategory::Heavy => {
            "Your heavy flow and pain levels suggest a pattern that needs closer attention."
        }
        PatternCategory::Other => {
            "Your answers don't fit a single typical pattern, so keep tracking to learn more about your cycle."
        }
    }
}

fn table(category: PatternCategory) -> RecommendationTable {
    match category {
        PatternCategory::Developing => DEVELOPING,
        PatternCategory::Regular => REGULAR,
        PatternCategory::Irregular => IRREGULAR,
        PatternCategory::Heavy => HEAVY,
        PatternCategory::Other => OTHER,
    }
}

/// Ordered recommendations for a category.
pub fn recommendations_for(category: PatternCategory) -> Vec<Recommendation> {
    table(category)
        .iter()
        .map(|(title, description)| Recommendation::new(*title, *description))
        .collect()
}

/// Complete result (headline plus recommendations) for a category.
pub fn result_for(category: PatternCategory) -> PatternResult {
    PatternResult::new(category, headline(category), recommendations_for(category))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn developing_list_is_exact() {
        let titles: Vec<_> = recommendations_for(PatternCategory::Developing)
            .into_iter()
            .map(|r| r.title)
            .collect();
        assert_eq!(
            titles,
            vec![
                "Be Patient",
                "Track Your Cycle",
                "Learn About Your Body",
                "Talk to Someone You Trust",
            ]
        );
    }

    #[test]
    fn every_table_is_non_empty_and_duplicate_free() {
        for category in PatternCategory::ALL {
            let list = recommendations_for(*category);
            assert!(!list.is_empty(), "{} has no recommendations", category);

            let titles: HashSet<_> = list.iter().map(|r| r.title.as_str()).collect();
            assert_eq!(titles.len(), list.len(), "{} repeats a title", category);
            assert!(list.iter().all(|r| !r.description.is_empty()));
        }
    }

    #[test]
    fn developing_headline_mentions_adolescence() {
        let text = headline(PatternCategory::Developing);
        assert!(text.contains("establishing a regular pattern"));
        assert!(text.contains("adolescence"));
    }

    #[test]
    fn result_for_keeps_table_order() {
        let result = result_for(PatternCategory::Heavy);
        assert_eq!(result.category(), PatternCategory::Heavy);
        assert_eq!(result.recommendation_titles()[0], "Consult a Healthcare Provider");
        assert_eq!(result.recommendations().len(), HEAVY.len());
    }
}
