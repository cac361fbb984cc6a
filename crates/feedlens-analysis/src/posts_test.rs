use serde_json::json;

use super::*;

fn items(section: &Value, category: &str) -> Vec<CanonicalPost> {
    let refs = extract_category_items(category, section);
    normalize_category(category, &refs)
}

#[test]
fn saved_post_full_record() {
    let section = json!({
        "saved_saved_media": [{
            "title": "fitcoach",
            "string_map_data": {
                "Saved on": {
                    "href": "https://www.instagram.com/reel/xyz/",
                    "timestamp": 1_700_000_000
                }
            }
        }]
    });

    let posts = items(&section, "saved_posts");
    assert_eq!(posts.len(), 1);
    let post = &posts[0];
    assert_eq!(post.author, "fitcoach");
    assert_eq!(post.caption, "Saved content from @fitcoach");
    assert_eq!(post.media_type, MediaType::Reel);
    assert_eq!(post.interaction_type, InteractionType::Saved);
    assert_eq!(post.id, "saved_fitcoach_1700000000");
    assert!(post.saved_at.starts_with("2023-11-14"));
}

#[test]
fn saved_post_photo_url() {
    let section = json!({
        "saved_saved_media": [{
            "title": "a",
            "string_map_data": {
                "Saved on": {"href": "https://www.instagram.com/p/abc/", "timestamp": 1}
            }
        }]
    });
    assert_eq!(items(&section, "saved_posts")[0].media_type, MediaType::Photo);
}

#[test]
fn saved_post_missing_metadata_degrades_to_sentinels() {
    let section = json!({"saved_saved_media": [{"no_title": true}]});
    let posts = items(&section, "saved_posts");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author, "unknown");
    assert_eq!(posts[0].saved_at, "unknown");
    assert_eq!(posts[0].media_type, MediaType::Unknown);
}

#[test]
fn liked_post_timestamp_from_first_list_entry() {
    let section = json!({
        "likes_media_likes": [{
            "title": "chefaccount",
            "string_list_data": [
                {"href": "https://instagram.com/x"},
                {"timestamp": 1_700_000_000}
            ]
        }]
    });
    let posts = items(&section, "liked_posts");
    assert_eq!(posts[0].caption, "Liked content from @chefaccount");
    assert_eq!(posts[0].interaction_type, InteractionType::Liked);
    assert_ne!(posts[0].saved_at, "unknown");
}

#[test]
fn comment_combines_text_and_owner() {
    let section = json!({
        "comments_media_comments": [{
            "string_map_data": {
                "Comment": {"value": "great recipe"},
                "Media Owner": {"value": "chefaccount"},
                "Time": {"timestamp": 1_700_000_000}
            }
        }]
    });
    let posts = items(&section, "comments");
    assert_eq!(
        posts[0].caption,
        "Commented: 'great recipe' on @chefaccount's post"
    );
    assert_eq!(posts[0].author, "chefaccount");
    assert_eq!(posts[0].media_type, MediaType::Comment);
}

#[test]
fn comments_section_may_be_bare_array() {
    let section = json!([
        {"string_map_data": {"Comment": {"value": "hi"}}}
    ]);
    let posts = items(&section, "comments");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].author, "unknown");
    assert_eq!(posts[0].caption, "Commented: 'hi' on @unknown's post");
}

#[test]
fn user_post_nested_media_photo() {
    let section = json!({
        "content": [{
            "media": [{
                "title": "Sunset from the trail",
                "creation_timestamp": 1_700_000_000,
                "media_metadata": {"photo_metadata": {"exif_data": []}}
            }]
        }]
    });
    let posts = items(&section, "user_posts");
    assert_eq!(posts[0].author, "user");
    assert_eq!(posts[0].caption, "Sunset from the trail");
    assert_eq!(posts[0].media_type, MediaType::Photo);
    assert_eq!(posts[0].interaction_type, InteractionType::Posted);
}

#[test]
fn user_post_flat_structure_fallback() {
    let section = json!({
        "content": [{
            "creation_timestamp": 1_700_000_000,
            "media_type": "video"
        }]
    });
    let posts = items(&section, "user_posts");
    assert_eq!(posts[0].caption, "Own post");
    assert_eq!(posts[0].media_type, MediaType::Video);
}

#[test]
fn following_uses_account_value() {
    let section = json!({
        "relationships_following": [{
            "string_list_data": [{"value": "traveler", "timestamp": 1_700_000_000}]
        }]
    });
    let posts = items(&section, "following");
    assert_eq!(posts[0].author, "traveler");
    assert_eq!(posts[0].caption, "Following @traveler");
    assert_eq!(posts[0].media_type, MediaType::Profile);
    assert_eq!(posts[0].id, "following_traveler");
}

#[test]
fn wrong_key_section_yields_zero_posts() {
    // A malformed category record produces nothing, and never an error.
    let section = json!({"wrong_key": [{"title": "x"}]});
    assert_eq!(count_category("saved_posts", &section), 0);
    assert!(items(&section, "saved_posts").is_empty());
}

#[test]
fn unknown_category_yields_zero_posts() {
    let section = json!({"anything": []});
    assert_eq!(count_category("stories", &section), 0);
    assert!(items(&section, "stories").is_empty());
}

#[test]
fn count_matches_item_list_length() {
    let section = json!({"likes_media_likes": [{}, {}, {}]});
    assert_eq!(count_category("liked_posts", &section), 3);
}

#[test]
fn output_order_follows_input_order() {
    let section = json!({
        "relationships_following": [
            {"string_list_data": [{"value": "a"}]},
            {"string_list_data": [{"value": "b"}]},
            {"string_list_data": [{"value": "c"}]}
        ]
    });
    let posts = items(&section, "following");
    let authors: Vec<&str> = posts.iter().map(|p| p.author.as_str()).collect();
    assert_eq!(authors, ["a", "b", "c"]);
}
