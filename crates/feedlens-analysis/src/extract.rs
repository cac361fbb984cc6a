//! Shared extraction primitives over model prose.
//!
//! All family parsers funnel into these: whole-word goal-category matching
//! with a three-pattern percentage heuristic, timeframed sub-goal extraction
//! with template backfill, and pattern/insight scanning. LLM prose is not a
//! formal grammar; correctness here is best reasonable effort with a
//! guaranteed output shape.

use std::sync::LazyLock;

use regex::Regex;

use crate::tables::{
    GoalCategory, GOAL_CATEGORIES, INSIGHT_MARKERS, PATTERN_TYPES, PATTERN_WORDS,
    RECOMMENDATION_WORDS, TERM_PATTERNS,
};
use crate::types::{BehavioralPattern, EvidenceLevel, Goal, GoalArea, GoalTerm};

/// Percentage assumed when a category matches but no figure is found nearby.
const DEFAULT_PERCENTAGE: f64 = 30.0;

struct CategoryMatcher {
    word: Regex,
    /// Tried in order: `cat ... (N%)`, `cat ... N%`, `N% ... cat`.
    percent: [Regex; 3],
}

static CATEGORY_MATCHERS: LazyLock<Vec<CategoryMatcher>> = LazyLock::new(|| {
    GOAL_CATEGORIES
        .iter()
        .map(|category| {
            let key = category.key;
            CategoryMatcher {
                word: Regex::new(&format!(r"\b{key}\b")).expect("static regex"),
                percent: [
                    Regex::new(&format!(r"{key}.*?\((\d+)%\)")).expect("static regex"),
                    Regex::new(&format!(r"{key}.*?(\d+)%")).expect("static regex"),
                    Regex::new(&format!(r"(\d+)%.*{key}")).expect("static regex"),
                ],
            }
        })
        .collect()
});

static TERM_MATCHERS: LazyLock<Vec<(GoalTerm, Vec<Regex>)>> = LazyLock::new(|| {
    TERM_PATTERNS
        .iter()
        .map(|(term, patterns)| {
            let regexes = patterns
                .iter()
                .map(|p| Regex::new(&format!("(?i){p}")).expect("static regex"))
                .collect();
            (*term, regexes)
        })
        .collect()
});

/// Extract goal areas from free text.
///
/// Every known category whose keyword appears as a whole word yields one
/// area. `override_percentage` (from a section title like
/// `"Fitness Goals (50%)"`) takes priority over the in-body regex chain.
/// Returns an empty list when nothing matches — the caller decides whether
/// to fall back to the generic area.
pub(crate) fn extract_goals(text: &str, override_percentage: Option<f64>) -> Vec<GoalArea> {
    let lower = text.to_lowercase();
    let mut areas = Vec::new();

    for (category, matcher) in GOAL_CATEGORIES.iter().zip(CATEGORY_MATCHERS.iter()) {
        if !matcher.word.is_match(&lower) {
            continue;
        }

        let percentage = override_percentage
            .or_else(|| body_percentage(matcher, &lower))
            .unwrap_or(DEFAULT_PERCENTAGE);

        areas.push(build_goal_area(category, percentage, text));
    }

    areas
}

fn body_percentage(matcher: &CategoryMatcher, lower: &str) -> Option<f64> {
    matcher.percent.iter().find_map(|re| {
        re.captures(lower)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
    })
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn build_goal_area(category: &GoalCategory, percentage: f64, text: &str) -> GoalArea {
    GoalArea {
        id: category.key.to_owned(),
        name: category.name.to_owned(),
        icon: category.icon.to_owned(),
        evidence: EvidenceLevel::from_percentage(percentage),
        percentage,
        // Save count is the percentage cast to int — a known simplification
        // the frontend currently relies on, not a true count.
        save_count: percentage.clamp(0.0, f64::from(u32::MAX)) as u32,
        key_accounts: Vec::new(),
        description: goal_description(text, category.key),
        goals: extract_term_goals(text, category.key),
    }
}

/// First sentence mentioning the category, or a templated fallback.
fn goal_description(text: &str, category_key: &str) -> String {
    text.split('.')
        .find(|sentence| sentence.to_lowercase().contains(category_key))
        .map_or_else(
            || format!("Focus on {category_key} based on your saved content patterns."),
            |sentence| sentence.trim().to_owned(),
        )
}

/// Extract the three timeframed sub-goals for a category.
///
/// For each term, temporal patterns are scanned in order; the sentence
/// containing the first match becomes the goal description. Terms with no
/// match are backfilled from [`default_goal`]. Exactly one goal per term,
/// three total, always.
pub(crate) fn extract_term_goals(text: &str, category_key: &str) -> Vec<Goal> {
    GoalTerm::ALL
        .iter()
        .map(|&term| {
            term_goal_from_text(text, category_key, term)
                .unwrap_or_else(|| default_goal(category_key, term))
        })
        .collect()
}

fn term_goal_from_text(text: &str, category_key: &str, term: GoalTerm) -> Option<Goal> {
    let regexes = TERM_MATCHERS
        .iter()
        .find(|(t, _)| *t == term)
        .map(|(_, regexes)| regexes)?;

    for regex in regexes {
        for found in regex.find_iter(text) {
            let context = context_window(text, found.start(), found.end());
            let matched_lower = found.as_str().to_lowercase();
            if let Some(sentence) = context
                .split('.')
                .find(|s| s.to_lowercase().contains(&matched_lower))
            {
                return Some(Goal {
                    term,
                    title: format!("{} {} Goal", title_case(category_key), term.as_str()),
                    description: sentence.trim().to_owned(),
                });
            }
        }
    }

    None
}

/// Templated goal for a `(category, term)` pair; used uniformly whenever a
/// term is missing from the extracted text.
pub(crate) fn default_goal(category_key: &str, term: GoalTerm) -> Goal {
    Goal {
        term,
        title: format!("{} {} Goal", title_case(category_key), term.as_str()),
        description: format!(
            "Develop {category_key} skills and habits over {}.",
            term.as_str()
        ),
    }
}

/// The generic goal area emitted when no category keyword matched anywhere.
pub(crate) fn generic_goal_area() -> GoalArea {
    GoalArea {
        id: "general".to_owned(),
        name: "Personal Development".to_owned(),
        icon: "🎯".to_owned(),
        evidence: EvidenceLevel::from_percentage(100.0),
        percentage: 100.0,
        save_count: 100,
        key_accounts: Vec::new(),
        description: "Based on your saved content, focus on personal growth and development."
            .to_owned(),
        goals: vec![
            Goal {
                term: GoalTerm::ThirtyDay,
                title: "Short-term Focus".to_owned(),
                description: "Identify and work on immediate improvement areas.".to_owned(),
            },
            Goal {
                term: GoalTerm::NinetyDay,
                title: "Medium-term Development".to_owned(),
                description: "Build consistent habits and skills over three months.".to_owned(),
            },
            Goal {
                term: GoalTerm::OneYear,
                title: "Long-term Growth".to_owned(),
                description: "Achieve significant personal and professional milestones."
                    .to_owned(),
            },
        ],
    }
}

/// Extract behavioral patterns, capped at 3.
pub(crate) fn extract_patterns(text: &str) -> Vec<BehavioralPattern> {
    let lower = text.to_lowercase();
    let mut patterns = Vec::new();

    for pattern_type in PATTERN_TYPES {
        let spaced = pattern_type.replace('_', " ");
        let indicated = lower.contains(&spaced)
            || lower.contains("pattern")
            || lower.contains("behavior")
            || lower.contains("habit");
        if !indicated {
            continue;
        }

        patterns.push(BehavioralPattern {
            pattern_type: (*pattern_type).to_owned(),
            title: title_case(&spaced),
            description: pattern_description(text, &spaced),
            data: serde_json::Map::new(),
            insight: format!("Analysis reveals {spaced} patterns in your saved content."),
        });

        if patterns.len() == 3 {
            break;
        }
    }

    patterns
}

fn pattern_description(text: &str, spaced_type: &str) -> String {
    text.split('.')
        .find(|sentence| {
            let lower = sentence.to_lowercase();
            PATTERN_WORDS.iter().any(|w| lower.contains(w))
        })
        .map_or_else(
            || format!("Your {spaced_type} shows interesting trends."),
            |sentence| sentence.trim().to_owned(),
        )
}

/// Extract up to 5 insight sentences: explicit markers, or long sentences
/// carrying a recommendation verb.
pub(crate) fn extract_insights(text: &str) -> Vec<String> {
    let mut insights = Vec::new();

    for sentence in text.split('.') {
        let sentence = sentence.trim();
        let lower = sentence.to_lowercase();

        let marked = INSIGHT_MARKERS.iter().any(|m| lower.contains(m));
        let recommending = sentence.chars().count() > 50
            && RECOMMENDATION_WORDS.iter().any(|w| lower.contains(w));

        if marked || recommending {
            insights.push(sentence.to_owned());
            if insights.len() == 5 {
                break;
            }
        }
    }

    insights
}

/// ±100-byte context window around a match, snapped to char boundaries.
fn context_window(text: &str, start: usize, end: usize) -> &str {
    let mut from = start.saturating_sub(100);
    while from > 0 && !text.is_char_boundary(from) {
        from -= 1;
    }
    let mut to = (end + 100).min(text.len());
    while to < text.len() && !text.is_char_boundary(to) {
        to += 1;
    }
    &text[from..to]
}

/// `"content preference"` → `"Content Preference"`, `"fitness"` → `"Fitness"`.
fn title_case(words: &str) -> String {
    words
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "extract_test.rs"]
mod tests;
