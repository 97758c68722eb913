//! SectionRegistry for mapping section-type keys to their definitions.

use crate::domain::section::errors::{SchemaError, SchemaResult};
use crate::domain::section::types::{FieldSchema, FieldSpec, SectionTypeDefinition};
use std::collections::HashMap;

/// Read-only table of section types, built once at start-up and shared for the process lifetime.
#[derive(Debug, Default)]
pub struct SectionRegistry {
    types: HashMap<String, SectionTypeDefinition>,
}

impl SectionRegistry {
    /// Creates a new empty SectionRegistry.
    pub fn new() -> Self {
        Self {
            types: HashMap::new(),
        }
    }

    /// Registers a section type under its key.
    ///
    /// Rejects definitions that could never be satisfied, so a bad table fails at start-up
    /// instead of on the first request.
    pub fn register(&mut self, definition: SectionTypeDefinition) -> SchemaResult<()> {
        if self.types.contains_key(&definition.key) {
            return Err(SchemaError::DuplicateSectionType(definition.key));
        }
        if definition.allowed_pages.is_empty() {
            return Err(SchemaError::NoAllowedPages(definition.key));
        }
        if definition.max_per_page == 0 {
            return Err(SchemaError::ZeroQuota(definition.key));
        }
        check_enums(&definition.key, &definition.fields)?;

        self.types.insert(definition.key.clone(), definition);
        Ok(())
    }

    /// Retrieves a section type by key.
    pub fn get(&self, key: &str) -> Option<&SectionTypeDefinition> {
        self.types.get(key)
    }

    /// Returns all registered section-type keys, sorted.
    pub fn list_types(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.types.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Returns all definitions, sorted by key.
    pub fn definitions(&self) -> Vec<&SectionTypeDefinition> {
        let mut defs: Vec<&SectionTypeDefinition> = self.types.values().collect();
        defs.sort_by(|a, b| a.key.cmp(&b.key));
        defs
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

fn check_enums(section_type: &str, fields: &FieldSchema) -> SchemaResult<()> {
    for entry in fields.iter() {
        match &entry.spec {
            FieldSpec::Enum { options, .. } if options.is_empty() => {
                return Err(SchemaError::EmptyEnum {
                    section_type: section_type.to_string(),
                    field: entry.name.clone(),
                });
            }
            FieldSpec::Array {
                item_schema: Some(items),
                ..
            } => check_enums(section_type, items)?,
            _ => {}
        }
    }
    Ok(())
}

