//! Section-type schema definitions: the closed set of field kinds a CMS content block can declare.

use regex::Regex;
use serde::{Serialize, Serializer};

/// How a section is laid out on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    FullWidth,
    Container,
    Grid,
    Custom,
}

/// A compiled field pattern. Serialized back as its source expression.
#[derive(Debug, Clone)]
pub struct FieldPattern(Regex);

impl FieldPattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Self(Regex::new(source)?))
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Serialize for FieldPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Constraint on a single field of a content block.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum FieldSpec {
    String {
        required: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pattern: Option<FieldPattern>,
    },
    /// Text carried in English and/or Tamil. At least one language must be non-empty.
    Bilingual {
        required: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
    Number {
        required: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Boolean {
        required: bool,
    },
    Array {
        required: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_items: Option<usize>,
        #[serde(skip_serializing_if = "Option::is_none")]
        item_schema: Option<FieldSchema>,
    },
    Enum {
        required: bool,
        options: Vec<String>,
    },
}

impl FieldSpec {
    pub fn is_required(&self) -> bool {
        match self {
            FieldSpec::String { required, .. }
            | FieldSpec::Bilingual { required, .. }
            | FieldSpec::Number { required, .. }
            | FieldSpec::Boolean { required }
            | FieldSpec::Array { required, .. }
            | FieldSpec::Enum { required, .. } => *required,
        }
    }

    pub fn string(required: bool, max_length: usize) -> Self {
        FieldSpec::String {
            required,
            max_length: Some(max_length),
            pattern: None,
        }
    }

    pub fn bilingual(required: bool, max_length: usize) -> Self {
        FieldSpec::Bilingual {
            required,
            max_length: Some(max_length),
        }
    }

    pub fn number(required: bool, min: Option<f64>, max: Option<f64>) -> Self {
        FieldSpec::Number { required, min, max }
    }

    pub fn boolean(required: bool) -> Self {
        FieldSpec::Boolean { required }
    }

    pub fn array(required: bool, max_items: usize, item_schema: Option<FieldSchema>) -> Self {
        FieldSpec::Array {
            required,
            max_items: Some(max_items),
            item_schema,
        }
    }

    pub fn enumeration(required: bool, options: &[&str]) -> Self {
        FieldSpec::Enum {
            required,
            options: options.iter().map(|o| o.to_string()).collect(),
        }
    }
}

/// A named field in a schema.
#[derive(Debug, Clone, Serialize)]
pub struct FieldEntry {
    pub name: String,
    #[serde(flatten)]
    pub spec: FieldSpec,
}

/// Ordered field declarations. Validation walks fields in declaration order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct FieldSchema(Vec<FieldEntry>);

impl FieldSchema {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Builder-style declaration of the next field.
    pub fn field(mut self, name: &str, spec: FieldSpec) -> Self {
        self.0.push(FieldEntry {
            name: name.to_string(),
            spec,
        });
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldEntry> {
        self.0.iter()
    }

    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.0.iter().find(|e| e.name == name).map(|e| &e.spec)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A named template for a content block, with its fields and placement rules.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionTypeDefinition {
    pub key: String,
    pub name: String,
    pub fields: FieldSchema,
    pub layout: Layout,
    pub max_per_page: u32,
    pub allowed_pages: Vec<String>,
}

impl SectionTypeDefinition {
    pub fn allows_page(&self, page: &str) -> bool {
        self.allowed_pages.iter().any(|p| p == page)
    }
}
