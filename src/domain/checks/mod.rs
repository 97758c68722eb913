//! Auxiliary checks layered on top of the field engine for the content-editing workflow.
//!
//! Each check is independently callable and returns a [`ValidationReport`](crate::domain::validate::ValidationReport).

pub mod duplicate;
pub mod images;
pub mod quality;
pub mod quick;
pub mod schema;
pub mod seo;

pub use duplicate::perform_duplicate_validation;
pub use images::perform_image_validation;
pub use quality::perform_content_quality_validation;
pub use quick::perform_quick_validation;
pub use schema::perform_schema_validation;
pub use seo::perform_seo_validation;
