//! Analysis prompt rendering.
//!
//! One deterministic text prompt for the whole sampled dataset, independent
//! of which provider consumes it. Keeping the prompt provider-neutral is
//! what makes comparison runs meaningful: every arm sees byte-identical
//! input.

use std::fmt::Write as _;

use crate::types::{CanonicalPost, SamplingManifest};

/// Posts rendered individually before the `... and N more` suffix.
const SAMPLE_LIMIT: usize = 15;
/// Caption truncation length, in characters.
const CAPTION_LIMIT: usize = 100;

/// Render the analysis prompt for a sampled, normalized dataset.
///
/// Layout: export overview, interaction-type breakdown (first-seen order),
/// up to [`SAMPLE_LIMIT`] post lines, then the fixed instruction block.
/// Total and deterministic for any input, including an empty post list.
#[must_use]
pub fn build(posts: &[CanonicalPost], manifest: &SamplingManifest) -> String {
    let categories: Vec<&str> = manifest.categories.keys().map(String::as_str).collect();

    let mut type_counts: Vec<(&str, usize)> = Vec::new();
    for post in posts {
        let name = post.interaction_type.as_str();
        match type_counts.iter_mut().find(|(n, _)| *n == name) {
            Some((_, count)) => *count += 1,
            None => type_counts.push((name, 1)),
        }
    }

    let mut prompt = String::new();
    let _ = writeln!(
        prompt,
        "Analyze the following Instagram data export with multiple interaction types:"
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "EXPORT OVERVIEW:");
    let _ = writeln!(prompt, "- Data types included: {}", categories.join(", "));
    let _ = writeln!(prompt, "- Total items analyzed: {}", posts.len());
    let _ = writeln!(
        prompt,
        "- Items available before sampling: {}",
        manifest.total_available
    );
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "INTERACTION TYPE BREAKDOWN:");
    for (name, count) in &type_counts {
        let _ = writeln!(prompt, "- {name}: {count} items");
    }
    let _ = writeln!(prompt);
    let _ = writeln!(prompt, "SAMPLE CONTENT:");
    for post in posts.iter().take(SAMPLE_LIMIT) {
        let _ = writeln!(prompt, "{}", post_line(post));
    }
    if posts.len() > SAMPLE_LIMIT {
        let _ = writeln!(prompt, "... and {} more posts", posts.len() - SAMPLE_LIMIT);
    }
    let _ = writeln!(prompt);
    prompt.push_str(INSTRUCTIONS);

    prompt
}

fn post_line(post: &CanonicalPost) -> String {
    let mut caption: String = post.caption.chars().take(CAPTION_LIMIT).collect();
    if post.caption.chars().count() > CAPTION_LIMIT {
        caption.push_str("...");
    }
    let tags = post
        .hashtags
        .iter()
        .take(3)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "- Post by @{}: {caption} [Tags: {tags}] [{}] [Type: {}]",
        post.author,
        post.media_type.as_str(),
        post.interaction_type.as_str()
    )
}

const INSTRUCTIONS: &str = "\
This is a comprehensive analysis of multiple Instagram interaction types. Please provide:
1. Content categories with confidence scores (analyze all interaction types together)
2. Behavioral patterns based on different interaction types (saved vs liked vs posted content)
3. Interest evolution and trends across different interaction types
4. Personalized goals that leverage insights from all data types
5. Cross-interaction insights (e.g., consistency between saved and liked content)
6. Overall behavioral profile based on the complete dataset

Focus on providing a holistic analysis that combines insights from all data types
to create a comprehensive behavioral and interest profile.
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sampling::plan;
    use crate::types::{InteractionType, MediaType};
    use std::collections::BTreeMap;

    fn post(author: &str, caption: &str, interaction: InteractionType) -> CanonicalPost {
        CanonicalPost {
            id: format!("test_{author}"),
            author: author.to_owned(),
            caption: caption.to_owned(),
            media_type: MediaType::Photo,
            interaction_type: interaction,
            saved_at: "unknown".to_owned(),
            hashtags: vec!["fitness".to_owned()],
            source_category: "saved_posts".to_owned(),
        }
    }

    fn manifest_for(counts: &[(&str, usize)]) -> SamplingManifest {
        let map: BTreeMap<String, usize> =
            counts.iter().map(|(k, v)| ((*k).to_owned(), *v)).collect();
        plan(&map)
    }

    #[test]
    fn prompt_contains_overview_and_breakdown() {
        let posts = vec![
            post("chef", "pasta night", InteractionType::Saved),
            post("coach", "leg day", InteractionType::Saved),
            post("runner", "morning run", InteractionType::Liked),
        ];
        let manifest = manifest_for(&[("liked_posts", 1), ("saved_posts", 2)]);
        let prompt = build(&posts, &manifest);

        assert!(prompt.contains("- Data types included: liked_posts, saved_posts"));
        assert!(prompt.contains("- Total items analyzed: 3"));
        // First-seen order: saved before liked.
        let saved_pos = prompt.find("- saved: 2 items").expect("saved line");
        let liked_pos = prompt.find("- liked: 1 items").expect("liked line");
        assert!(saved_pos < liked_pos);
    }

    #[test]
    fn post_lines_carry_tags_media_and_type() {
        let posts = vec![post("coach", "leg day", InteractionType::Saved)];
        let manifest = manifest_for(&[("saved_posts", 1)]);
        let prompt = build(&posts, &manifest);
        assert!(prompt
            .contains("- Post by @coach: leg day [Tags: fitness] [photo] [Type: saved]"));
    }

    #[test]
    fn long_captions_are_truncated_with_ellipsis() {
        let long = "x".repeat(150);
        let line = post_line(&post("a", &long, InteractionType::Saved));
        assert!(line.contains(&format!("{}...", "x".repeat(100))));
        assert!(!line.contains(&"x".repeat(101)));
    }

    #[test]
    fn overflow_posts_collapse_into_suffix() {
        let posts: Vec<CanonicalPost> = (0..20)
            .map(|i| post(&format!("user{i}"), "caption", InteractionType::Saved))
            .collect();
        let manifest = manifest_for(&[("saved_posts", 20)]);
        let prompt = build(&posts, &manifest);

        assert!(prompt.contains("... and 5 more posts"));
        assert!(prompt.contains("@user14"));
        assert!(!prompt.contains("@user15:"));
    }

    #[test]
    fn empty_input_still_renders_instructions() {
        let manifest = manifest_for(&[]);
        let prompt = build(&[], &manifest);
        assert!(prompt.contains("- Total items analyzed: 0"));
        assert!(prompt.contains("Overall behavioral profile"));
        assert!(!prompt.contains("more posts"));
    }

    #[test]
    fn identical_input_renders_identical_prompt() {
        let posts = vec![post("a", "b", InteractionType::Saved)];
        let manifest = manifest_for(&[("saved_posts", 1)]);
        assert_eq!(build(&posts, &manifest), build(&posts, &manifest));
    }
}
