//! Placement validation: may a section of this type go on this page, and is its data valid?

use crate::domain::section::SectionRegistry;
use crate::domain::validate::fields::{validate_fields, FieldValidationResult};
use crate::storage::{ContentStore, StoreError};
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use thiserror::Error;

/// A proposed section placement.
#[derive(Debug, Clone, Copy)]
pub struct Placement<'a> {
    pub section_type: &'a str,
    pub page: &'a str,
    pub data: &'a Map<String, JsonValue>,
    /// Record being edited; it does not count against its own quota.
    pub exclude_id: Option<&'a str>,
    /// Inactive sections never occupy a slot, so the quota is not enforced for them.
    pub is_active: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementReport {
    pub section_type: String,
    pub page: String,
    #[serde(flatten)]
    pub validation: FieldValidationResult,
    pub current_count: u64,
    pub max_allowed: u32,
    /// `max_allowed - current_count`, floored at zero.
    pub remaining_slots: u64,
}

#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("Unknown section type '{section_type}'")]
    UnknownSectionType {
        section_type: String,
        available: Vec<String>,
    },

    #[error("Section type '{section_type}' is not allowed on page '{page}'")]
    PageNotAllowed {
        section_type: String,
        page: String,
        allowed_pages: Vec<String>,
    },

    #[error("Page '{page}' already has the maximum number of '{section_type}' sections ({max_allowed})")]
    QuotaExceeded {
        section_type: String,
        page: String,
        current_count: u64,
        max_allowed: u32,
    },

    #[error("Failed to validate section: {0}")]
    Store(#[from] StoreError),
}

impl PlacementError {
    /// Stable machine-readable code for clients.
    pub fn code(&self) -> &'static str {
        match self {
            PlacementError::UnknownSectionType { .. } => "UNKNOWN_SECTION_TYPE",
            PlacementError::PageNotAllowed { .. } => "PAGE_NOT_ALLOWED",
            PlacementError::QuotaExceeded { .. } => "QUOTA_EXCEEDED",
            PlacementError::Store(_) => "STORE_UNAVAILABLE",
        }
    }
}

/// Checks, in order: the type exists, the page is allowed, the page has a free slot
/// (one store read, enforced only for active placements), then the field data.
///
/// The quota check is advisory. Two concurrent placements can both see a free slot.
pub async fn validate_section_type(
    registry: &SectionRegistry,
    store: &dyn ContentStore,
    placement: Placement<'_>,
) -> Result<PlacementReport, PlacementError> {
    let definition = registry.get(placement.section_type).ok_or_else(|| {
        PlacementError::UnknownSectionType {
            section_type: placement.section_type.to_string(),
            available: registry.list_types(),
        }
    })?;

    if !definition.allows_page(placement.page) {
        return Err(PlacementError::PageNotAllowed {
            section_type: definition.key.clone(),
            page: placement.page.to_string(),
            allowed_pages: definition.allowed_pages.clone(),
        });
    }

    let current_count = store
        .count_active(placement.page, &definition.key, placement.exclude_id)
        .await?;
    let max_allowed = definition.max_per_page;
    if placement.is_active && current_count >= u64::from(max_allowed) {
        return Err(PlacementError::QuotaExceeded {
            section_type: definition.key.clone(),
            page: placement.page.to_string(),
            current_count,
            max_allowed,
        });
    }

    let validation = validate_fields(placement.data, &definition.fields);
    tracing::debug!(
        section_type = %definition.key,
        page = placement.page,
        errors = validation.errors.len(),
        "section fields validated"
    );

    Ok(PlacementReport {
        section_type: definition.key.clone(),
        page: placement.page.to_string(),
        validation,
        current_count,
        max_allowed,
        remaining_slots: u64::from(max_allowed).saturating_sub(current_count),
    })
}
