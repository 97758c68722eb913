//! SEO heuristics.

use crate::domain::checks::images::any_missing_alt;
use crate::domain::validate::text::{longest_variant, shortest_variant};
use crate::domain::validate::ValidationReport;
use serde_json::{Map, Value as JsonValue};

pub const META_DESCRIPTION_MIN: usize = 120;
pub const META_DESCRIPTION_MAX: usize = 160;
pub const SEO_TITLE_MAX: usize = 60;

pub fn perform_seo_validation(data: &Map<String, JsonValue>) -> ValidationReport {
    let mut report = ValidationReport::new();

    match data.get("metaDescription").and_then(|v| {
        shortest_variant(v).zip(longest_variant(v))
    }) {
        None => report.suggest("Add a meta description to improve search visibility"),
        Some((shortest, longest)) => {
            if shortest < META_DESCRIPTION_MIN {
                report.warning(format!(
                    "Meta description is shorter than the recommended {} characters",
                    META_DESCRIPTION_MIN
                ));
            }
            if longest > META_DESCRIPTION_MAX {
                report.warning(format!(
                    "Meta description is longer than the recommended {} characters",
                    META_DESCRIPTION_MAX
                ));
            }
        }
    }

    if let Some(longest) = data.get("title").and_then(longest_variant) {
        if longest > SEO_TITLE_MAX {
            report.warning(format!(
                "Title exceeds {} characters and may be truncated in search results",
                SEO_TITLE_MAX
            ));
        }
    }

    if let Some(images) = data.get("images").and_then(|v| v.as_array()) {
        if any_missing_alt(images) {
            report.suggest("Add alt text to all images for accessibility and search ranking");
        }
    }

    report
}
