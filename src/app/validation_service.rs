//! The Content Validation Service.
//!
//! Composes the individual checks into the validation modes offered by the content API:
//! 1.  `quick`: required identifying fields and formats only.
//! 2.  `full`: quick → schema → duplicate → images → quality → SEO.
//! 3.  `schema`, `duplicate`, `images`: a single stage.
//!
//! The service only reads from the store. Persisting a record is the caller's decision, and
//! must not happen when the report carries errors.

use crate::domain::checks::{
    perform_content_quality_validation, perform_duplicate_validation, perform_image_validation,
    perform_quick_validation, perform_schema_validation, perform_seo_validation,
};
use crate::domain::section::SectionRegistry;
use crate::domain::validate::{
    validate_section_type, Placement, PlacementError, PlacementReport, ValidationReport,
};
use crate::storage::{ContentStore, StoreResult};
use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use utoipa::ToSchema;

#[derive(Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValidationType {
    Quick,
    #[default]
    Full,
    Schema,
    Duplicate,
    Images,
}

impl ValidationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationType::Quick => "quick",
            ValidationType::Full => "full",
            ValidationType::Schema => "schema",
            ValidationType::Duplicate => "duplicate",
            ValidationType::Images => "images",
        }
    }
}

/// Stateless validator over a section registry and a content store.
pub struct ValidationService<'a> {
    registry: &'a SectionRegistry,
    store: &'a dyn ContentStore,
}

impl<'a> ValidationService<'a> {
    pub fn new(registry: &'a SectionRegistry, store: &'a dyn ContentStore) -> Self {
        Self { registry, store }
    }

    /// Validates a section placement and its field data against the section-type schema.
    pub async fn validate_placement(
        &self,
        placement: Placement<'_>,
    ) -> Result<PlacementReport, PlacementError> {
        let result = validate_section_type(self.registry, self.store, placement).await;
        match &result {
            Ok(report) => tracing::debug!(
                section_type = placement.section_type,
                page = placement.page,
                valid = report.validation.is_valid,
                remaining_slots = report.remaining_slots,
                "placement validated"
            ),
            Err(PlacementError::Store(e)) => {
                tracing::error!(error = %e, "store lookup failed during placement validation")
            }
            Err(e) => tracing::info!(code = e.code(), "placement rejected: {}", e),
        }
        result
    }

    /// Runs the checks selected by `mode` over a generic content record.
    pub async fn validate(
        &self,
        data: &Map<String, JsonValue>,
        mode: ValidationType,
        content_id: Option<&str>,
    ) -> StoreResult<ValidationReport> {
        let report = match mode {
            ValidationType::Quick => perform_quick_validation(data),
            ValidationType::Full => self.validate_full(data, content_id).await?,
            ValidationType::Schema => perform_schema_validation(data),
            ValidationType::Duplicate => {
                perform_duplicate_validation(self.store, data, content_id).await?
            }
            ValidationType::Images => image_stage(data).unwrap_or_default(),
        };

        tracing::debug!(
            mode = mode.as_str(),
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            "content validated"
        );
        Ok(report)
    }

    /// Full validation. A failed quick pass is returned as-is; later stages do not run.
    async fn validate_full(
        &self,
        data: &Map<String, JsonValue>,
        content_id: Option<&str>,
    ) -> StoreResult<ValidationReport> {
        let quick = perform_quick_validation(data);
        if !quick.is_valid() {
            return Ok(quick);
        }

        let mut report = quick;
        report.merge(perform_schema_validation(data));
        report.merge(perform_duplicate_validation(self.store, data, content_id).await?);

        if let Some(images) = image_stage(data) {
            report.merge(images);
        }

        report.merge(perform_content_quality_validation(data));
        report.merge(perform_seo_validation(data));
        Ok(report)
    }
}

/// The image stage for `data.images`. `None` when there are no images to check; a value that
/// is present but not an array is an error rather than an empty list.
fn image_stage(data: &Map<String, JsonValue>) -> Option<ValidationReport> {
    match data.get("images") {
        None | Some(JsonValue::Null) => None,
        Some(JsonValue::Array(images)) if images.is_empty() => None,
        Some(JsonValue::Array(images)) => Some(perform_image_validation(images)),
        Some(_) => {
            let mut report = ValidationReport::new();
            report.error("images must be an array");
            Some(report)
        }
    }
}
