pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::validation_service::{ValidationService, ValidationType};
pub use domain::checks::{
    perform_content_quality_validation, perform_duplicate_validation, perform_image_validation,
    perform_quick_validation, perform_schema_validation, perform_seo_validation,
};
pub use domain::section::{FieldSchema, FieldSpec, Layout, SectionRegistry, SectionTypeDefinition};
pub use domain::validate::{
    validate_fields, validate_section_type, FieldValidationResult, Placement, PlacementError,
    PlacementReport, ValidationReport,
};
pub use storage::{ContentStore, InMemoryContentStore, PostgresContentStore};
