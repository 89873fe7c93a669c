//! Categorical answers collected by the assessment flow.
//!
//! Every answer is a closed enumeration with a kebab-case wire label. Parsing
//! is lenient about presentation: case, surrounding whitespace, `_` or en
//! dashes versus `-`, and a trailing `years`/`days` unit are all ignored, so
//! UI labels like `"13 - 17 years"` or `"26-30 days"` parse the same as
//! `"13-17"`/`"26-30"`. Answers measured in years or days also accept a plain
//! count (`"28"` is the `26-30` day bucket).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonicalizes a raw answer before matching it against known labels.
fn normalize_label(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    let stripped = ["years", "year", "days", "day"]
        .iter()
        .find_map(|unit| lowered.strip_suffix(unit))
        .map(str::trim_end)
        .unwrap_or(&lowered);

    stripped
        .split(|c: char| c.is_whitespace() || matches!(c, '_' | '-' | '\u{2013}'))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

/// Implements `label`, `parse`, `ALL` and `Display` for an answer enum.
///
/// Each variant lists its canonical label first, then any accepted aliases.
macro_rules! answer_enum {
    (
        $(#[$meta:meta])*
        $name:ident $(counted_by $count:ident)? {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal $(| $alias:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in questionnaire order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Returns the canonical wire label.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }

            /// Parses a raw answer, returning `None` for unknown values.
            pub fn parse(raw: &str) -> Option<Self> {
                let normalized = normalize_label(raw);
                match normalized.as_str() {
                    $($label $(| $alias)* => Some($name::$variant),)+
                    _ => {
                        $(
                            if let Ok(count) = normalized.parse::<u32>() {
                                return $name::$count(count);
                            }
                        )?
                        None
                    }
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

answer_enum!(
    /// Age bracket of the person being assessed.
    AgeBracket counted_by from_years {
        Under13 => "under-13" | "under13" | "<13",
        Age13To17 => "13-17",
        Age18To24 => "18-24",
        Age25To34 => "25-34",
        Age35To44 => "35-44",
        Age45Plus => "45+" | "45-plus" | "45-and-over",
    }
);

impl AgeBracket {
    /// Bracket for an age given in whole years.
    pub fn from_years(years: u32) -> Option<Self> {
        let bracket = match years {
            0..=12 => AgeBracket::Under13,
            13..=17 => AgeBracket::Age13To17,
            18..=24 => AgeBracket::Age18To24,
            25..=34 => AgeBracket::Age25To34,
            35..=44 => AgeBracket::Age35To44,
            _ => AgeBracket::Age45Plus,
        };
        Some(bracket)
    }

    /// Adolescent brackets: cycles are expected to still be settling.
    pub fn is_adolescent(&self) -> bool {
        matches!(self, AgeBracket::Under13 | AgeBracket::Age13To17)
    }
}

answer_enum!(
    /// Typical number of days from the start of one period to the next.
    CycleLength counted_by from_days {
        LessThan21 => "less-than-21" | "<21",
        Days21To25 => "21-25",
        Days26To30 => "26-30",
        Days31To35 => "31-35",
        Days36To40 => "36-40",
        MoreThan40 => "more-than-40" | "40+",
        /// Length changes noticeably from cycle to cycle.
        Irregular => "irregular" | "variable",
        NotSure => "not-sure" | "other",
    }
);

impl CycleLength {
    /// Bucket for a cycle length given as a day count.
    pub fn from_days(days: u32) -> Option<Self> {
        let bucket = match days {
            0 => return None,
            1..=20 => CycleLength::LessThan21,
            21..=25 => CycleLength::Days21To25,
            26..=30 => CycleLength::Days26To30,
            31..=35 => CycleLength::Days31To35,
            36..=40 => CycleLength::Days36To40,
            _ => CycleLength::MoreThan40,
        };
        Some(bucket)
    }

    /// 21 to 35 days.
    pub fn is_regular_range(&self) -> bool {
        matches!(
            self,
            CycleLength::Days21To25 | CycleLength::Days26To30 | CycleLength::Days31To35
        )
    }

    pub fn is_irregular(&self) -> bool {
        matches!(self, CycleLength::Irregular)
    }
}

answer_enum!(
    /// Number of bleeding days per period.
    PeriodDuration counted_by from_days {
        Days1To3 => "1-3",
        Days4To5 => "4-5",
        Days6To7 => "6-7",
        Days8Plus => "8-plus" | "8+",
        Varies => "varies",
        NotSure => "not-sure" | "other",
    }
);

impl PeriodDuration {
    /// Bucket for a period length given as a day count.
    pub fn from_days(days: u32) -> Option<Self> {
        let bucket = match days {
            0 => return None,
            1..=3 => PeriodDuration::Days1To3,
            4..=5 => PeriodDuration::Days4To5,
            6..=7 => PeriodDuration::Days6To7,
            _ => PeriodDuration::Days8Plus,
        };
        Some(bucket)
    }

    /// Up to seven days.
    pub fn is_normal_range(&self) -> bool {
        matches!(
            self,
            PeriodDuration::Days1To3 | PeriodDuration::Days4To5 | PeriodDuration::Days6To7
        )
    }
}

answer_enum!(
    /// Self-reported flow.
    FlowHeaviness {
        Light => "light",
        Moderate => "moderate" | "medium",
        Heavy => "heavy",
        VeryHeavy => "very-heavy",
        Varies => "varies",
        NotSure => "not-sure",
    }
);

impl FlowHeaviness {
    pub fn is_elevated(&self) -> bool {
        matches!(self, FlowHeaviness::Heavy | FlowHeaviness::VeryHeavy)
    }
}

answer_enum!(
    /// Self-reported period pain.
    PainLevel {
        NoPain => "no-pain" | "none",
        Mild => "mild",
        Moderate => "moderate",
        Severe => "severe",
        Debilitating => "debilitating",
        Varies => "varies",
    }
);

impl PainLevel {
    pub fn is_elevated(&self) -> bool {
        matches!(
            self,
            PainLevel::Moderate | PainLevel::Severe | PainLevel::Debilitating
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_label_strips_units_and_case() {
        assert_eq!(normalize_label("  13-17 Years "), "13-17");
        assert_eq!(normalize_label("26-30 days"), "26-30");
        assert_eq!(normalize_label("Very Heavy"), "very-heavy");
        assert_eq!(normalize_label("no_pain"), "no-pain");
        assert_eq!(normalize_label("Less than 21"), "less-than-21");
    }

    #[test]
    fn age_bracket_parses_ui_labels() {
        assert_eq!(AgeBracket::parse("13-17 years"), Some(AgeBracket::Age13To17));
        assert_eq!(AgeBracket::parse("Under 13"), Some(AgeBracket::Under13));
        assert_eq!(AgeBracket::parse("45+ years"), Some(AgeBracket::Age45Plus));
        assert_eq!(AgeBracket::parse("25-34"), Some(AgeBracket::Age25To34));
        assert_eq!(AgeBracket::parse("12-14"), None);
    }

    #[test]
    fn only_under_13_and_13_17_are_adolescent() {
        let adolescent: Vec<_> = AgeBracket::ALL
            .iter()
            .filter(|age| age.is_adolescent())
            .collect();
        assert_eq!(adolescent, vec![&AgeBracket::Under13, &AgeBracket::Age13To17]);
    }

    #[test]
    fn variable_is_an_alias_for_irregular() {
        assert_eq!(CycleLength::parse("Variable"), Some(CycleLength::Irregular));
        assert!(CycleLength::Irregular.is_irregular());
        assert!(!CycleLength::Irregular.is_regular_range());
    }

    #[test]
    fn regular_cycle_range_is_21_to_35_days() {
        let regular: Vec<_> = CycleLength::ALL
            .iter()
            .filter(|c| c.is_regular_range())
            .map(|c| c.label())
            .collect();
        assert_eq!(regular, vec!["21-25", "26-30", "31-35"]);
    }

    #[test]
    fn period_duration_normal_range_stops_at_seven_days() {
        assert!(PeriodDuration::parse("4-5 days").unwrap().is_normal_range());
        assert!(PeriodDuration::parse("6-7 days").unwrap().is_normal_range());
        assert!(!PeriodDuration::parse("8+ days").unwrap().is_normal_range());
        assert!(!PeriodDuration::Varies.is_normal_range());
    }

    #[test]
    fn medium_flow_is_moderate() {
        assert_eq!(FlowHeaviness::parse("medium"), Some(FlowHeaviness::Moderate));
        assert!(!FlowHeaviness::Moderate.is_elevated());
        assert!(FlowHeaviness::VeryHeavy.is_elevated());
    }

    #[test]
    fn elevated_pain_starts_at_moderate() {
        assert!(!PainLevel::parse("none").unwrap().is_elevated());
        assert!(!PainLevel::Mild.is_elevated());
        assert!(PainLevel::Moderate.is_elevated());
        assert!(PainLevel::Debilitating.is_elevated());
    }

    #[test]
    fn labels_parse_back_to_the_same_variant() {
        for age in AgeBracket::ALL {
            assert_eq!(AgeBracket::parse(age.label()), Some(*age));
        }
        for pain in PainLevel::ALL {
            assert_eq!(PainLevel::parse(pain.label()), Some(*pain));
        }
    }

    #[test]
    fn serializes_with_wire_label() {
        assert_eq!(serde_json::to_string(&AgeBracket::Age45Plus).unwrap(), "\"45+\"");
        assert_eq!(
            serde_json::from_str::<CycleLength>("\"26-30\"").unwrap(),
            CycleLength::Days26To30
        );
    }

    #[test]
    fn spaced_and_en_dash_ranges_normalize() {
        assert_eq!(normalize_label("13 - 17 years"), "13-17");
        assert_eq!(normalize_label("13\u{2013}17 years"), "13-17");
        assert_eq!(normalize_label("very--heavy"), "very-heavy");
        assert_eq!(AgeBracket::parse("13 - 17 years"), Some(AgeBracket::Age13To17));
        assert_eq!(AgeBracket::parse("13\u{2013}17 years"), Some(AgeBracket::Age13To17));
        assert_eq!(CycleLength::parse("26 \u{2013} 30 days"), Some(CycleLength::Days26To30));
    }

    #[test]
    fn day_counts_map_to_buckets() {
        assert_eq!(CycleLength::parse("28"), Some(CycleLength::Days26To30));
        assert_eq!(CycleLength::parse("28 days"), Some(CycleLength::Days26To30));
        assert_eq!(CycleLength::parse("19"), Some(CycleLength::LessThan21));
        assert_eq!(CycleLength::parse("45"), Some(CycleLength::MoreThan40));
        assert_eq!(PeriodDuration::parse("5"), Some(PeriodDuration::Days4To5));
        assert_eq!(PeriodDuration::parse("10"), Some(PeriodDuration::Days8Plus));
        assert_eq!(PeriodDuration::parse("0"), None);
        assert_eq!(AgeBracket::parse("16"), Some(AgeBracket::Age13To17));
        assert_eq!(AgeBracket::parse("30 years"), Some(AgeBracket::Age25To34));
    }

    #[test]
    fn counts_are_not_accepted_for_subjective_answers() {
        assert_eq!(PainLevel::parse("3"), None);
        assert_eq!(FlowHeaviness::parse("2"), None);
    }
}
