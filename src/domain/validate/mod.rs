//! The content-validation rule engine.

pub mod fields;
pub mod placement;
pub mod report;
pub mod text;

pub use fields::{validate_fields, FieldValidationResult};
pub use placement::{validate_section_type, Placement, PlacementError, PlacementReport};
pub use report::ValidationReport;
