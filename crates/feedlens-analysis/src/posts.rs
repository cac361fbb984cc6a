//! Post normalization: one extraction rule per export category, mapping the
//! source-specific nesting into [`CanonicalPost`].
//!
//! Instagram export sections disagree about everything — where the author
//! lives, how timestamps are wrapped, whether the section is a keyed object
//! or a bare array. Every rule here tolerates missing or malformed fields by
//! substituting sentinels; a single bad record never aborts the batch.

use chrono::DateTime;
use serde_json::Value;

use crate::types::{CanonicalPost, InteractionType, MediaType};

/// Timestamp sentinel used when a record carries no usable time.
const UNKNOWN: &str = "unknown";

/// Resolve a category section to its item list.
///
/// Each category nests its items under a category-specific key; `comments`
/// and `user_posts` exports are sometimes a bare array instead. Unrecognized
/// categories and wrong shapes resolve to an empty list.
#[must_use]
pub fn extract_category_items<'a>(category: &str, section: &'a Value) -> Vec<&'a Value> {
    let keyed = |key: &str| -> Option<&'a Vec<Value>> { section.get(key)?.as_array() };

    let items = match category {
        "saved_posts" => keyed("saved_saved_media"),
        "liked_posts" => keyed("likes_media_likes"),
        "comments" => keyed("comments_media_comments").or_else(|| section.as_array()),
        "user_posts" => keyed("content").or_else(|| section.as_array()),
        "following" => keyed("relationships_following"),
        _ => None,
    };

    items.map(|v| v.iter().collect()).unwrap_or_default()
}

/// Count of available items in a category section. Zero for anything the
/// extractor does not recognize.
#[must_use]
pub fn count_category(category: &str, section: &Value) -> usize {
    extract_category_items(category, section).len()
}

/// Normalize raw category items into canonical posts, preserving input order.
/// No deduplication across categories.
#[must_use]
pub fn normalize_category(category: &str, items: &[&Value]) -> Vec<CanonicalPost> {
    let normalize = match category {
        "saved_posts" => normalize_saved,
        "liked_posts" => normalize_liked,
        "comments" => normalize_comment,
        "user_posts" => normalize_user_post,
        "following" => normalize_following,
        other => {
            tracing::warn!(category = other, "no normalization rule for category");
            return Vec::new();
        }
    };

    items
        .iter()
        .map(|item| normalize(item, category))
        .collect()
}

fn normalize_saved(item: &Value, category: &str) -> CanonicalPost {
    let author = str_at(item, &["title"]).unwrap_or(UNKNOWN);
    let saved_on = item.get("string_map_data").and_then(|m| m.get("Saved on"));
    let timestamp = saved_on
        .and_then(|s| s.get("timestamp"))
        .and_then(Value::as_i64)
        .unwrap_or(0);
    let href = saved_on
        .and_then(|s| s.get("href"))
        .and_then(Value::as_str)
        .unwrap_or("");

    let media_type = if href.contains("/reel/") {
        MediaType::Reel
    } else if href.contains("/p/") {
        MediaType::Photo
    } else {
        MediaType::Unknown
    };

    CanonicalPost {
        id: format!("saved_{author}_{timestamp}"),
        author: author.to_owned(),
        caption: format!("Saved content from @{author}"),
        media_type,
        interaction_type: InteractionType::Saved,
        saved_at: timestamp_to_iso(timestamp),
        hashtags: Vec::new(),
        source_category: category.to_owned(),
    }
}

fn normalize_liked(item: &Value, category: &str) -> CanonicalPost {
    let author = str_at(item, &["title"]).unwrap_or(UNKNOWN);
    let timestamp = first_list_timestamp(item);

    CanonicalPost {
        id: format!("liked_{author}"),
        author: author.to_owned(),
        caption: format!("Liked content from @{author}"),
        media_type: MediaType::Unknown,
        interaction_type: InteractionType::Liked,
        saved_at: timestamp_to_iso(timestamp),
        hashtags: Vec::new(),
        source_category: category.to_owned(),
    }
}

fn normalize_comment(item: &Value, category: &str) -> CanonicalPost {
    let map = item.get("string_map_data");
    let timestamp = map
        .and_then(|m| m.get("Time"))
        .and_then(|t| t.get("timestamp"))
        .and_then(Value::as_i64)
        .unwrap_or(0);
    let text = map
        .and_then(|m| m.get("Comment"))
        .and_then(|c| c.get("value"))
        .and_then(Value::as_str)
        .unwrap_or("Unknown comment");
    let owner = map
        .and_then(|m| m.get("Media Owner"))
        .and_then(|o| o.get("value"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN);

    CanonicalPost {
        id: format!("comment_{timestamp}"),
        author: owner.to_owned(),
        caption: format!("Commented: '{text}' on @{owner}'s post"),
        media_type: MediaType::Comment,
        interaction_type: InteractionType::Commented,
        saved_at: timestamp_to_iso(timestamp),
        hashtags: Vec::new(),
        source_category: category.to_owned(),
    }
}

fn normalize_user_post(item: &Value, category: &str) -> CanonicalPost {
    let first_media = item
        .get("media")
        .and_then(Value::as_array)
        .and_then(|media| media.first());

    let (timestamp, title, media_type) = if let Some(media) = first_media {
        let timestamp = media
            .get("creation_timestamp")
            .and_then(Value::as_i64)
            .unwrap_or(0);
        let title = str_at(media, &["title"]).unwrap_or("Own post");
        let metadata = media.get("media_metadata");
        let media_type = if metadata.and_then(|m| m.get("photo_metadata")).is_some() {
            MediaType::Photo
        } else if metadata.and_then(|m| m.get("video_metadata")).is_some() {
            MediaType::Video
        } else {
            MediaType::Unknown
        };
        (timestamp, title, media_type)
    } else {
        // Flat structure without a nested media array.
        let timestamp = item
            .get("creation_timestamp")
            .and_then(Value::as_i64)
            .unwrap_or(0);
        let title = str_at(item, &["title"]).unwrap_or("Own post");
        let media_type = str_at(item, &["media_type"])
            .map_or(MediaType::Unknown, MediaType::parse);
        (timestamp, title, media_type)
    };

    CanonicalPost {
        id: format!("user_post_{timestamp}"),
        author: "user".to_owned(),
        caption: title.to_owned(),
        media_type,
        interaction_type: InteractionType::Posted,
        saved_at: timestamp_to_iso(timestamp),
        hashtags: Vec::new(),
        source_category: category.to_owned(),
    }
}

fn normalize_following(item: &Value, category: &str) -> CanonicalPost {
    let first = item
        .get("string_list_data")
        .and_then(Value::as_array)
        .and_then(|list| list.first());
    let account = first
        .and_then(|f| f.get("value"))
        .and_then(Value::as_str)
        .unwrap_or(UNKNOWN);
    let timestamp = first
        .and_then(|f| f.get("timestamp"))
        .and_then(Value::as_i64)
        .unwrap_or(0);

    CanonicalPost {
        id: format!("following_{account}"),
        author: account.to_owned(),
        caption: format!("Following @{account}"),
        media_type: MediaType::Profile,
        interaction_type: InteractionType::Following,
        saved_at: timestamp_to_iso(timestamp),
        hashtags: Vec::new(),
        source_category: category.to_owned(),
    }
}

/// First `string_list_data` entry carrying a timestamp.
fn first_list_timestamp(item: &Value) -> i64 {
    item.get("string_list_data")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
        .iter()
        .find_map(|entry| entry.get("timestamp").and_then(Value::as_i64))
        .unwrap_or(0)
}

/// Unix seconds to ISO-8601, `"unknown"` for zero or out-of-range values.
fn timestamp_to_iso(timestamp: i64) -> String {
    if timestamp == 0 {
        return UNKNOWN.to_owned();
    }
    DateTime::from_timestamp(timestamp, 0)
        .map_or_else(|| UNKNOWN.to_owned(), |dt| dt.to_rfc3339())
}

fn str_at<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    current.as_str()
}

#[cfg(test)]
#[path = "posts_test.rs"]
mod tests;
