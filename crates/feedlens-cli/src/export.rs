//! Export file loading and category detection.

use std::path::Path;

use serde_json::Value;

/// Category names the pipeline knows how to normalize, in presentation order.
pub(crate) const KNOWN_CATEGORIES: [&str; 5] = [
    "saved_posts",
    "liked_posts",
    "comments",
    "user_posts",
    "following",
];

/// Read and parse an export JSON file.
pub(crate) fn load_export(path: &Path) -> anyhow::Result<Value> {
    let raw = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("cannot read export file {}: {e}", path.display()))?;
    let data: Value = serde_json::from_str(&raw)
        .map_err(|e| anyhow::anyhow!("export file {} is not valid JSON: {e}", path.display()))?;
    Ok(data)
}

/// Categories to analyze: the explicit comma-separated list when given,
/// otherwise the known categories present as top-level keys in the export.
pub(crate) fn resolve_categories(data: &Value, explicit: Option<&str>) -> Vec<String> {
    match explicit {
        Some(list) => list
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned)
            .collect(),
        None => KNOWN_CATEGORIES
            .iter()
            .filter(|&&category| data.get(category).is_some())
            .map(|&category| category.to_owned())
            .collect(),
    }
}
