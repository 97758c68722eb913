//! Generic length and translation checks for content records of unknown section type.

use crate::domain::validate::text::{char_len, language_text, LANGUAGES};
use crate::domain::validate::ValidationReport;
use serde_json::{Map, Value as JsonValue};

/// Field name → maximum length in characters.
pub const MAX_LENGTHS: &[(&str, usize)] = &[
    ("title", 200),
    ("subtitle", 300),
    ("description", 1000),
    ("content", 20000),
    ("buttonText", 50),
    ("metaDescription", 300),
    ("altText", 200),
];

pub fn perform_schema_validation(data: &Map<String, JsonValue>) -> ValidationReport {
    let mut report = ValidationReport::new();

    for (field, max) in MAX_LENGTHS {
        let Some(value) = data.get(*field) else {
            continue;
        };

        match value {
            JsonValue::Null => {}
            JsonValue::String(s) => {
                if char_len(s) > *max {
                    report.error(format!(
                        "{} exceeds maximum length of {} characters",
                        field, max
                    ));
                }
            }
            JsonValue::Object(obj) => check_translations(&mut report, field, obj, *max),
            _ => report.error(format!("{} must be text or a bilingual object", field)),
        }
    }

    report
}

fn check_translations(
    report: &mut ValidationReport,
    field: &str,
    obj: &Map<String, JsonValue>,
    max: usize,
) {
    let mut missing = Vec::new();

    for lang in LANGUAGES {
        match language_text(obj, lang).filter(|t| !t.is_empty()) {
            Some(text) => {
                if char_len(text) > max {
                    report.error(format!(
                        "{} ({}) exceeds maximum length of {} characters",
                        field,
                        lang.label(),
                        max
                    ));
                }
            }
            None => missing.push(lang),
        }
    }

    match missing.as_slice() {
        [] => {}
        [lang] => report.warning(format!(
            "{} is missing the {} translation",
            field,
            lang.label()
        )),
        _ => report.warning(format!("{} is missing content in both languages", field)),
    }
}
