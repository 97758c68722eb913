//! Quick pass: required identifying fields and their format.

use crate::domain::validate::text::is_blank;
use crate::domain::validate::ValidationReport;
use regex::Regex;
use serde_json::{Map, Value as JsonValue};
use std::sync::LazyLock;

/// Fields every content record must carry.
pub const REQUIRED_FIELDS: &[&str] = &["page", "section", "sectionKey"];

static SECTION_KEY_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z0-9]+(?:[-_][a-z0-9]+)*$").expect("section key pattern is valid")
});

pub fn perform_quick_validation(data: &Map<String, JsonValue>) -> ValidationReport {
    let mut report = ValidationReport::new();

    for field in REQUIRED_FIELDS {
        match data.get(*field) {
            None => report.error(format!("{} is required", field)),
            Some(v) if is_blank(v) => report.error(format!("{} is required", field)),
            Some(JsonValue::String(_)) => {}
            Some(_) => report.error(format!("{} must be a string", field)),
        }
    }

    if let Some(key) = data.get("sectionKey").and_then(|v| v.as_str()) {
        if !key.is_empty() && !SECTION_KEY_PATTERN.is_match(key) {
            report.error(
                "sectionKey must contain only lowercase letters, numbers, hyphens and underscores",
            );
        }
    }

    if let Some(order) = data.get("order").filter(|v| !v.is_null()) {
        if order.as_u64().is_none() {
            report.error("order must be a non-negative integer");
        }
    }

    if let Some(active) = data.get("isActive").filter(|v| !v.is_null()) {
        if !active.is_boolean() {
            report.error("isActive must be a boolean");
        }
    }

    report
}
