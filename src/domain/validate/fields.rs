//! Field-level rule engine: checks a content payload against a [`FieldSchema`].
//!
//! Every declared field is visited in declaration order and all violations are collected;
//! nothing short-circuits across fields. The only rewrite applied to the payload is promoting a
//! bare string supplied for a bilingual field into a two-language object.

use crate::domain::section::{FieldSchema, FieldSpec};
use crate::domain::validate::text::{bilingual_from, char_len, is_blank, language_text, LANGUAGES};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// Outcome of validating one payload against one field schema.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    /// The input payload with bilingual coercions applied.
    pub data: Map<String, JsonValue>,
}

pub fn validate_fields(data: &Map<String, JsonValue>, schema: &FieldSchema) -> FieldValidationResult {
    let mut errors = Vec::new();
    let validated = validate_object(data, schema, "", &mut errors);
    FieldValidationResult {
        is_valid: errors.is_empty(),
        errors,
        data: validated,
    }
}

fn make_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn validate_object(
    obj: &Map<String, JsonValue>,
    schema: &FieldSchema,
    prefix: &str,
    errors: &mut Vec<String>,
) -> Map<String, JsonValue> {
    let mut out = obj.clone();

    for entry in schema.iter() {
        let path = make_path(prefix, &entry.name);

        let value = match obj.get(&entry.name) {
            Some(v) if !is_blank(v) => v,
            _ => {
                if entry.spec.is_required() {
                    errors.push(format!("Field '{}' is required", path));
                }
                continue;
            }
        };

        if let Some(rewritten) = validate_value(value, &entry.spec, &path, errors) {
            out.insert(entry.name.clone(), rewritten);
        }
    }

    out
}

/// Checks one present value. Returns `Some` only when the value was rewritten.
fn validate_value(
    value: &JsonValue,
    spec: &FieldSpec,
    path: &str,
    errors: &mut Vec<String>,
) -> Option<JsonValue> {
    match spec {
        FieldSpec::String {
            max_length,
            pattern,
            ..
        } => {
            let Some(s) = value.as_str() else {
                errors.push(format!("Field '{}' must be a string", path));
                return None;
            };
            if let Some(max) = max_length {
                if char_len(s) > *max {
                    errors.push(format!(
                        "Field '{}' exceeds maximum length of {} characters",
                        path, max
                    ));
                }
            }
            if let Some(p) = pattern {
                if !p.is_match(s) {
                    errors.push(format!("Field '{}' does not match the required format", path));
                }
            }
            None
        }
        FieldSpec::Bilingual { max_length, .. } => match value {
            JsonValue::String(s) => {
                if let Some(max) = max_length {
                    if char_len(s) > *max {
                        errors.push(format!(
                            "Field '{}' exceeds maximum length of {} characters",
                            path, max
                        ));
                    }
                }
                Some(bilingual_from(s))
            }
            JsonValue::Object(obj) => {
                check_bilingual_object(obj, *max_length, path, errors);
                None
            }
            _ => {
                errors.push(format!(
                    "Field '{}' must be a string or a bilingual object",
                    path
                ));
                None
            }
        },
        FieldSpec::Number { min, max, .. } => {
            let Some(n) = value.as_f64() else {
                errors.push(format!("Field '{}' must be a number", path));
                return None;
            };
            if let Some(min) = min {
                if n < *min {
                    errors.push(format!("Field '{}' must be at least {}", path, min));
                }
            }
            if let Some(max) = max {
                if n > *max {
                    errors.push(format!("Field '{}' must be at most {}", path, max));
                }
            }
            None
        }
        FieldSpec::Boolean { .. } => {
            if !value.is_boolean() {
                errors.push(format!("Field '{}' must be a boolean", path));
            }
            None
        }
        FieldSpec::Array {
            max_items,
            item_schema,
            ..
        } => {
            let Some(items) = value.as_array() else {
                errors.push(format!("Field '{}' must be an array", path));
                return None;
            };
            if let Some(max) = max_items {
                if items.len() > *max {
                    errors.push(format!(
                        "Field '{}' exceeds maximum items of {}",
                        path, max
                    ));
                }
            }
            item_schema
                .as_ref()
                .map(|schema| validate_items(items, schema, path, errors))
        }
        FieldSpec::Enum { options, .. } => {
            let known = value
                .as_str()
                .map(|s| options.iter().any(|o| o == s))
                .unwrap_or(false);
            if !known {
                errors.push(format!(
                    "Field '{}' must be one of: {}",
                    path,
                    options.join(", ")
                ));
            }
            None
        }
    }
}

fn check_bilingual_object(
    obj: &Map<String, JsonValue>,
    max_length: Option<usize>,
    path: &str,
    errors: &mut Vec<String>,
) {
    let mut any_text = false;

    for lang in LANGUAGES {
        match obj.get(lang.key()) {
            None | Some(JsonValue::Null) => {}
            Some(JsonValue::String(_)) => {}
            Some(_) => {
                errors.push(format!(
                    "Field '{}' ({}) must be a string",
                    path,
                    lang.label()
                ));
                continue;
            }
        }

        let Some(text) = language_text(obj, lang).filter(|t| !t.is_empty()) else {
            continue;
        };
        any_text = true;

        if let Some(max) = max_length {
            if char_len(text) > max {
                errors.push(format!(
                    "Field '{}' ({}) exceeds maximum length of {} characters",
                    path,
                    lang.label(),
                    max
                ));
            }
        }
    }

    if !any_text {
        errors.push(format!("Field '{}' must have at least one language", path));
    }
}

fn validate_items(
    items: &[JsonValue],
    schema: &FieldSchema,
    path: &str,
    errors: &mut Vec<String>,
) -> JsonValue {
    let validated = items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            let item_path = format!("{}[{}]", path, idx);
            match item.as_object() {
                Some(obj) => JsonValue::Object(validate_object(obj, schema, &item_path, errors)),
                None => {
                    errors.push(format!("Field '{}' must be an object", item_path));
                    item.clone()
                }
            }
        })
        .collect();
    JsonValue::Array(validated)
}
