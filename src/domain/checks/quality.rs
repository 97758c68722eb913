//! Content-quality heuristics. Produces warnings and suggestions only.

use crate::domain::validate::text::{longest_variant, shortest_variant, text_variants};
use crate::domain::validate::ValidationReport;
use regex::Regex;
use serde_json::{Map, Value as JsonValue};
use std::sync::LazyLock;

pub const MIN_TITLE_CHARS: usize = 5;
pub const MAX_TITLE_CHARS: usize = 100;
pub const MIN_CONTENT_CHARS: usize = 50;
pub const MAX_CONTENT_CHARS: usize = 5000;

static PLACEHOLDER_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(lorem ipsum|placeholder|sample text|coming soon|todo|tbd)\b")
        .expect("placeholder pattern is valid")
});

/// True when any language variant of `v` contains a known placeholder phrase.
pub fn contains_placeholder(v: &JsonValue) -> bool {
    text_variants(v)
        .into_iter()
        .any(|t| PLACEHOLDER_PATTERN.is_match(t))
}

pub fn perform_content_quality_validation(data: &Map<String, JsonValue>) -> ValidationReport {
    let mut report = ValidationReport::new();

    if let Some(title) = data.get("title") {
        if let Some(shortest) = shortest_variant(title) {
            if shortest < MIN_TITLE_CHARS {
                report.warning("Title is very short");
            }
        }
        if let Some(longest) = longest_variant(title) {
            if longest > MAX_TITLE_CHARS {
                report.warning("Title is quite long");
                report.suggest("Consider shortening the title");
            }
        }
        if contains_placeholder(title) {
            report.warning("Title appears to contain placeholder text");
        }
    }

    if let Some(content) = data.get("content") {
        if let Some(shortest) = shortest_variant(content) {
            if shortest < MIN_CONTENT_CHARS {
                report.warning("Content is very short");
            }
        }
        if let Some(longest) = longest_variant(content) {
            if longest > MAX_CONTENT_CHARS {
                report.warning("Content is very long");
                report.suggest("Consider splitting the content into multiple sections");
            }
        }
        if contains_placeholder(content) {
            report.warning("Content appears to contain placeholder text");
        }
    }

    report
}
