use super::*;

#[test]
fn category_match_requires_whole_word() {
    // "techniques" must not match the "tech" category.
    let areas = extract_goals("Several techniques were discussed here today", None);
    assert!(areas.is_empty());

    let areas = extract_goals("Invest in tech skills", None);
    assert_eq!(areas.len(), 1);
    assert_eq!(areas[0].name, "Technology");
}

#[test]
fn percentage_from_parenthesized_pattern() {
    let areas = extract_goals("Fitness goals (50%) look strong", None);
    assert_eq!(areas.len(), 1);
    assert!((areas[0].percentage - 50.0).abs() < f64::EPSILON);
    assert_eq!(areas[0].evidence, EvidenceLevel::High);
}

#[test]
fn percentage_from_loose_after_pattern() {
    let areas = extract_goals("fitness interest around 45% of saves", None);
    assert!((areas[0].percentage - 45.0).abs() < f64::EPSILON);
}

#[test]
fn percentage_from_before_pattern() {
    let areas = extract_goals("About 22% of your content is fitness", None);
    assert!((areas[0].percentage - 22.0).abs() < f64::EPSILON);
    assert_eq!(areas[0].evidence, EvidenceLevel::Medium);
}

#[test]
fn percentage_defaults_to_30() {
    let areas = extract_goals("You save a lot of fitness content", None);
    assert!((areas[0].percentage - 30.0).abs() < f64::EPSILON);
}

#[test]
fn override_percentage_beats_body_regex() {
    let areas = extract_goals("fitness is about 10% of saves", Some(60.0));
    assert!((areas[0].percentage - 60.0).abs() < f64::EPSILON);
    assert_eq!(areas[0].evidence, EvidenceLevel::High);
}

#[test]
fn save_count_is_percentage_as_int() {
    let areas = extract_goals("fitness goals (37%)", None);
    assert_eq!(areas[0].save_count, 37);
}

#[test]
fn multiple_categories_extracted_in_table_order() {
    let areas = extract_goals(
        "Fitness goals (50%), learning goals (30%), business goals (20%)",
        None,
    );
    let ids: Vec<&str> = areas.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, ["fitness", "learning", "business"]);
}

#[test]
fn description_is_first_sentence_mentioning_category() {
    let text = "Great analysis overall. Your fitness saves doubled this month. More text.";
    let areas = extract_goals(text, None);
    assert_eq!(areas[0].description, "Your fitness saves doubled this month");
}

#[test]
fn description_falls_back_to_template() {
    // Keyword present only in a sentence-free fragment without periods.
    let areas = extract_goals("fitness", None);
    assert_eq!(areas[0].description, "fitness");
}

#[test]
fn term_goals_always_cover_all_three_terms() {
    for text in [
        "no temporal phrases at all",
        "Start a 30-day workout routine.",
        "Start a 30-day routine. Then plan the quarter carefully.",
        "30-day start. A three month build. Annual review of progress.",
    ] {
        let goals = extract_term_goals(text, "fitness");
        let terms: Vec<GoalTerm> = goals.iter().map(|g| g.term).collect();
        assert_eq!(terms, GoalTerm::ALL.to_vec(), "input: {text}");
    }
}

#[test]
fn matched_term_uses_containing_sentence() {
    let goals = extract_term_goals("Begin a 30-day running plan to build endurance.", "fitness");
    assert_eq!(goals[0].term, GoalTerm::ThirtyDay);
    assert_eq!(
        goals[0].description,
        "Begin a 30-day running plan to build endurance"
    );
    // The other two terms are backfilled templates.
    assert_eq!(
        goals[1].description,
        "Develop fitness skills and habits over 90-day."
    );
}

#[test]
fn term_synonyms_match() {
    let goals = extract_term_goals(
        "Short-term, focus on rest. Over the quarter, add volume. Yearly, race a marathon.",
        "fitness",
    );
    assert!(goals[0].description.contains("focus on rest"));
    assert!(goals[1].description.contains("add volume"));
    assert!(goals[2].description.contains("race a marathon"));
}

#[test]
fn default_goal_template_shape() {
    let goal = default_goal("learning", GoalTerm::OneYear);
    assert_eq!(goal.title, "Learning 1-year Goal");
    assert_eq!(
        goal.description,
        "Develop learning skills and habits over 1-year."
    );
}

#[test]
fn generic_area_is_complete() {
    let area = generic_goal_area();
    assert_eq!(area.name, "Personal Development");
    assert!((area.percentage - 100.0).abs() < f64::EPSILON);
    assert_eq!(area.goals.len(), 3);
    let terms: Vec<GoalTerm> = area.goals.iter().map(|g| g.term).collect();
    assert_eq!(terms, GoalTerm::ALL.to_vec());
}

#[test]
fn patterns_capped_at_three() {
    // "pattern" anywhere indicates all candidate types; cap must hold.
    let patterns = extract_patterns("A clear pattern of behavior shows up in your saves.");
    assert_eq!(patterns.len(), 3);
    assert_eq!(patterns[0].pattern_type, "content_preference");
    assert_eq!(patterns[0].title, "Content Preference");
}

#[test]
fn patterns_empty_without_indicators() {
    assert!(extract_patterns("Nothing relevant here at all.").is_empty());
}

#[test]
fn pattern_description_prefers_indicative_sentence() {
    let patterns = extract_patterns("Intro text about habits. You tend to save videos at night.");
    assert_eq!(patterns[0].description, "You tend to save videos at night");
}

#[test]
fn insights_from_markers_and_long_recommendations() {
    let text = "Insight: you save more on weekends. \
                We recommend that you block out one evening each week for deliberate practice. \
                Short tip.";
    let insights = extract_insights(text);
    assert_eq!(insights.len(), 2);
    assert!(insights[0].starts_with("Insight:"));
    assert!(insights[1].contains("deliberate practice"));
}

#[test]
fn insights_capped_at_five() {
    let text = "Insight: one. Insight: two. Insight: three. Insight: four. \
                Insight: five. Insight: six.";
    assert_eq!(extract_insights(text).len(), 5);
}

#[test]
fn short_recommendation_sentences_are_skipped() {
    assert!(extract_insights("You should rest.").is_empty());
}
