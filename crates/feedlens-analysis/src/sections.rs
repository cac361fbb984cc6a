//! Family-specific section splitting and section routing.
//!
//! Each model family structures its prose differently: the concise family
//! uses bold/caps section markers, the verbose family markdown headers, the
//! numbered family leading `N.` items. Splitting is the only part that varies
//! per family — the goal/pattern/insight extraction underneath is shared.

use std::sync::LazyLock;

use regex::Regex;

use crate::tables::{
    GOAL_SECTION_KEYWORDS, INSIGHT_SECTION_KEYWORDS, PATTERN_SECTION_KEYWORDS,
};

/// Prose register of the model that produced a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ModelFamily {
    /// Concise bulleted structure with bold/caps section markers.
    Concise,
    /// Verbose academic prose under markdown headers.
    Verbose,
    /// Numbered-list structure.
    Numbered,
    /// Unknown family: no section splitting, generic extraction only.
    Generic,
}

impl ModelFamily {
    /// Map a provider family tag to a parsing strategy.
    pub(crate) fn detect(tag: &str) -> Self {
        match tag {
            "claude" => Self::Concise,
            "nova" => Self::Verbose,
            "llama" => Self::Numbered,
            _ => Self::Generic,
        }
    }

    /// Split `text` into ordered `(lowercase title, body)` sections using this
    /// family's delimiters. Content before the first delimiter lands in an
    /// `introduction` section. [`ModelFamily::Generic`] yields no sections.
    pub(crate) fn split_sections(self, text: &str) -> Vec<(String, String)> {
        match self {
            Self::Concise => split_by_delimiter(text, concise_header_title),
            Self::Verbose => split_by_delimiter(text, markdown_header_title),
            Self::Numbered => split_by_delimiter(text, numbered_header_title),
            Self::Generic => Vec::new(),
        }
    }
}

/// What a routed section feeds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SectionKind {
    Goals,
    Patterns,
    Insights,
}

/// Classify a section by keyword match against its lowercase title.
/// Goal keywords win over pattern keywords, which win over insight keywords.
pub(crate) fn classify_section(title: &str) -> Option<SectionKind> {
    let contains_any = |keywords: &[&str]| keywords.iter().any(|k| title.contains(k));

    if contains_any(GOAL_SECTION_KEYWORDS) {
        Some(SectionKind::Goals)
    } else if contains_any(PATTERN_SECTION_KEYWORDS) {
        Some(SectionKind::Patterns)
    } else if contains_any(INSIGHT_SECTION_KEYWORDS) {
        Some(SectionKind::Insights)
    } else {
        None
    }
}

static TITLE_PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\((\d+)%\)").expect("static regex"));

/// Percentage embedded in a section title itself, e.g. `"Fitness Goals (50%)"`.
pub(crate) fn title_percentage(title: &str) -> Option<f64> {
    TITLE_PERCENT_RE
        .captures(title)?
        .get(1)?
        .as_str()
        .parse()
        .ok()
}

static NUMBERED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("static regex"));

/// Generic line-based splitter: `header_title` decides whether a trimmed,
/// non-empty line opens a new section, returning its cleaned title.
fn split_by_delimiter(
    text: &str,
    header_title: impl Fn(&str) -> Option<String>,
) -> Vec<(String, String)> {
    let mut sections: Vec<(String, String)> = Vec::new();
    let mut current_title = "introduction".to_owned();
    let mut current_body: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(title) = header_title(line) {
            if !current_body.is_empty() {
                sections.push((current_title, current_body.join("\n")));
            }
            current_title = title;
            current_body = Vec::new();
        } else {
            current_body.push(line);
        }
    }

    if !current_body.is_empty() {
        sections.push((current_title, current_body.join("\n")));
    }

    sections
}

fn concise_header_title(line: &str) -> Option<String> {
    let bold = line.len() >= 4 && line.starts_with("**") && line.ends_with("**");
    let hashed = line.starts_with("##");
    let short_caps = is_upper(line) && line.split_whitespace().count() <= 5;

    if bold || hashed || short_caps {
        Some(
            line.trim_matches(|c| c == '*' || c == '#' || c == ' ')
                .to_lowercase(),
        )
    } else {
        None
    }
}

fn markdown_header_title(line: &str) -> Option<String> {
    if line.starts_with('#') {
        Some(
            line.trim_start_matches(|c| c == '#' || c == ' ')
                .to_lowercase(),
        )
    } else {
        None
    }
}

fn numbered_header_title(line: &str) -> Option<String> {
    if NUMBERED_RE.is_match(line) {
        Some(NUMBERED_RE.replace(line, "").to_lowercase())
    } else {
        None
    }
}

/// True when the line has at least one cased character and every cased
/// character is uppercase.
fn is_upper(line: &str) -> bool {
    let mut has_cased = false;
    for c in line.chars() {
        if c.is_lowercase() {
            return false;
        }
        if c.is_uppercase() {
            has_cased = true;
        }
    }
    has_cased
}
