//! Static keyword tables driving text extraction.
//!
//! The matching algorithms live in `extract` and `sections`; the vocabulary
//! lives here so it can be table-tested and extended without touching
//! control flow.

use crate::types::GoalTerm;

/// A recognized goal category: matching keyword plus display metadata.
/// Several keywords map to the same display name (e.g. `learning` and
/// `education`) to cover synonym usage in model prose.
pub(crate) struct GoalCategory {
    pub key: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
}

pub(crate) const GOAL_CATEGORIES: &[GoalCategory] = &[
    GoalCategory { key: "fitness", name: "Physical Fitness", icon: "💪" },
    GoalCategory { key: "health", name: "Health & Wellness", icon: "🏥" },
    GoalCategory { key: "learning", name: "Learning & Education", icon: "📚" },
    GoalCategory { key: "education", name: "Learning & Education", icon: "📚" },
    GoalCategory { key: "business", name: "Business & Career", icon: "💼" },
    GoalCategory { key: "career", name: "Business & Career", icon: "💼" },
    GoalCategory { key: "technology", name: "Technology", icon: "💻" },
    GoalCategory { key: "tech", name: "Technology", icon: "💻" },
    GoalCategory { key: "creativity", name: "Creative Arts", icon: "🎨" },
    GoalCategory { key: "art", name: "Creative Arts", icon: "🎨" },
    GoalCategory { key: "travel", name: "Travel & Adventure", icon: "✈️" },
    GoalCategory { key: "food", name: "Food & Cooking", icon: "🍳" },
    GoalCategory { key: "cooking", name: "Food & Cooking", icon: "🍳" },
    GoalCategory { key: "relationships", name: "Relationships", icon: "❤️" },
    GoalCategory { key: "social", name: "Social Life", icon: "👥" },
    GoalCategory { key: "finance", name: "Financial Planning", icon: "💰" },
    GoalCategory { key: "money", name: "Financial Planning", icon: "💰" },
    GoalCategory { key: "mindfulness", name: "Mental Wellness", icon: "🧘" },
    GoalCategory { key: "mental", name: "Mental Wellness", icon: "🧘" },
];

/// Regex fragments recognizing each goal timeframe in prose.
pub(crate) const TERM_PATTERNS: &[(GoalTerm, &[&str])] = &[
    (
        GoalTerm::ThirtyDay,
        &[r"30[\s\-]?day", r"one month", r"next month", r"short[\s\-]?term"],
    ),
    (
        GoalTerm::NinetyDay,
        &[r"90[\s\-]?day", r"three month", r"quarter", r"medium[\s\-]?term"],
    ),
    (
        GoalTerm::OneYear,
        &[r"1[\s\-]?year", r"one year", r"annual", r"long[\s\-]?term", r"yearly"],
    ),
];

/// Candidate behavioral pattern types, scanned in this priority order.
pub(crate) const PATTERN_TYPES: &[&str] = &[
    "content_preference",
    "posting_frequency",
    "engagement_style",
    "learning_style",
    "motivation_cycle",
];

/// Sentence prefixes that explicitly mark an insight.
pub(crate) const INSIGHT_MARKERS: &[&str] =
    &["insight:", "key finding:", "important:", "notice:", "observe:"];

/// Recommendation verbs that promote a long sentence to an insight.
pub(crate) const RECOMMENDATION_WORDS: &[&str] = &["recommend", "suggest", "should", "could"];

/// Words indicating a sentence describes a behavior or preference.
pub(crate) const PATTERN_WORDS: &[&str] = &["pattern", "behavior", "prefer", "tend"];

/// Section-title keywords routing a section to goal extraction.
pub(crate) const GOAL_SECTION_KEYWORDS: &[&str] =
    &["goal", "recommendation", "objective", "action", "plan", "step"];

/// Section-title keywords routing a section to pattern extraction.
pub(crate) const PATTERN_SECTION_KEYWORDS: &[&str] = &["pattern", "behavior", "habit", "trend"];

/// Section-title keywords routing a section to insight extraction.
pub(crate) const INSIGHT_SECTION_KEYWORDS: &[&str] = &[
    "insight",
    "analysis",
    "finding",
    "conclusion",
    "observation",
    "summary",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_display_metadata() {
        for category in GOAL_CATEGORIES {
            assert!(!category.key.is_empty());
            assert!(!category.name.is_empty());
            assert!(!category.icon.is_empty());
        }
    }

    #[test]
    fn category_keys_are_lowercase_single_words() {
        for category in GOAL_CATEGORIES {
            assert_eq!(category.key, category.key.to_lowercase());
            assert!(!category.key.contains(' '));
        }
    }

    #[test]
    fn synonym_keys_share_display_names() {
        let name_of = |key: &str| {
            GOAL_CATEGORIES
                .iter()
                .find(|c| c.key == key)
                .map(|c| c.name)
        };
        assert_eq!(name_of("learning"), name_of("education"));
        assert_eq!(name_of("finance"), name_of("money"));
        assert_eq!(name_of("technology"), name_of("tech"));
    }

    #[test]
    fn all_three_terms_have_patterns() {
        let terms: Vec<GoalTerm> = TERM_PATTERNS.iter().map(|(t, _)| *t).collect();
        assert_eq!(terms, GoalTerm::ALL.to_vec());
        for (_, patterns) in TERM_PATTERNS {
            assert!(!patterns.is_empty());
        }
    }
}
