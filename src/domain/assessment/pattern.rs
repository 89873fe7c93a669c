//! Classification output types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Menstrual pattern assigned by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    /// Adolescent cycles that are still settling.
    Developing,
    Regular,
    Irregular,
    /// Heavy flow together with significant pain.
    Heavy,
    /// Nothing more specific matched.
    Other,
}

impl PatternCategory {
    pub const ALL: &'static [PatternCategory] = &[
        PatternCategory::Developing,
        PatternCategory::Regular,
        PatternCategory::Irregular,
        PatternCategory::Heavy,
        PatternCategory::Other,
    ];

    /// Returns the wire label.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternCategory::Developing => "developing",
            PatternCategory::Regular => "regular",
            PatternCategory::Irregular => "irregular",
            PatternCategory::Heavy => "heavy",
            PatternCategory::Other => "other",
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single piece of advice shown with a result.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
}

impl Recommendation {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Result of classifying one assessment.
///
/// # Invariants
///
/// - `recommendations` are in priority order (first = most important)
/// - no two recommendations share a title
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "StoredPatternResult")]
pub struct PatternResult {
    category: PatternCategory,
    headline: String,
    recommendations: Vec<Recommendation>,
}

/// Wire shape of a [`PatternResult`]; loading goes through `PatternResult::new`.
#[derive(Deserialize)]
struct StoredPatternResult {
    category: PatternCategory,
    headline: String,
    #[serde(default)]
    recommendations: Vec<Recommendation>,
}

impl From<StoredPatternResult> for PatternResult {
    fn from(stored: StoredPatternResult) -> Self {
        PatternResult::new(stored.category, stored.headline, stored.recommendations)
    }
}

impl PatternResult {
    /// Builds a result, dropping any recommendation whose title repeats.
    pub fn new(
        category: PatternCategory,
        headline: impl Into<String>,
        recommendations: impl IntoIterator<Item = Recommendation>,
    ) -> Self {
        let mut unique: Vec<Recommendation> = Vec::new();
        for recommendation in recommendations {
            if !unique.iter().any(|r| r.title == recommendation.title) {
                unique.push(recommendation);
            }
        }

        Self {
            category,
            headline: headline.into(),
            recommendations: unique,
        }
    }

    pub fn category(&self) -> PatternCategory {
        self.category
    }

    pub fn headline(&self) -> &str {
        &self.headline
    }

    pub fn recommendations(&self) -> &[Recommendation] {
        &self.recommendations
    }

    /// Recommendation titles in priority order.
    pub fn recommendation_titles(&self) -> Vec<&str> {
        self.recommendations.iter().map(|r| r.title.as_str()).collect()
    }
}
