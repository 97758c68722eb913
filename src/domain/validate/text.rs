//! Helpers for bilingual (English/Tamil) text values.

use serde_json::{Map, Value as JsonValue};

/// The two content languages. Bilingual values are objects keyed by [`Language::key`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    English,
    Tamil,
}

pub const LANGUAGES: [Language; 2] = [Language::English, Language::Tamil];

impl Language {
    pub fn key(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Tamil => "ta",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Tamil => "Tamil",
        }
    }
}

/// Length in characters. Tamil graphemes are multi-byte, so byte length would over-count.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Absent-equivalent values: `null` and the empty string.
pub fn is_blank(v: &JsonValue) -> bool {
    match v {
        JsonValue::Null => true,
        JsonValue::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Promotes a bare string into a bilingual object carrying it in both languages.
pub fn bilingual_from(s: &str) -> JsonValue {
    let mut obj = Map::new();
    for lang in LANGUAGES {
        obj.insert(lang.key().to_string(), JsonValue::from(s));
    }
    JsonValue::Object(obj)
}

/// The string stored for `lang` in a bilingual object, if any.
pub fn language_text<'a>(obj: &'a Map<String, JsonValue>, lang: Language) -> Option<&'a str> {
    obj.get(lang.key()).and_then(|v| v.as_str())
}

/// All non-empty text variants of a value: the string itself, or each language of a bilingual
/// object. Other shapes yield nothing.
pub fn text_variants(v: &JsonValue) -> Vec<&str> {
    match v {
        JsonValue::String(s) if !s.is_empty() => vec![s.as_str()],
        JsonValue::Object(obj) => LANGUAGES
            .iter()
            .filter_map(|lang| language_text(obj, *lang))
            .filter(|s| !s.is_empty())
            .collect(),
        _ => Vec::new(),
    }
}

/// True when the value carries any text in any language.
pub fn has_text(v: Option<&JsonValue>) -> bool {
    v.map(|v| !text_variants(v).is_empty()).unwrap_or(false)
}

/// Length of the longest text variant, or `None` when there is no text.
pub fn longest_variant(v: &JsonValue) -> Option<usize> {
    text_variants(v).into_iter().map(char_len).max()
}

/// Length of the shortest text variant, or `None` when there is no text.
pub fn shortest_variant(v: &JsonValue) -> Option<usize> {
    text_variants(v).into_iter().map(char_len).min()
}
