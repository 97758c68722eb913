//! Section types: the static schema table CMS content blocks are validated against.

pub mod catalog;
pub mod errors;
pub mod registry;
pub mod types;

pub use errors::{SchemaError, SchemaResult};
pub use registry::SectionRegistry;
pub use types::{FieldEntry, FieldPattern, FieldSchema, FieldSpec, Layout, SectionTypeDefinition};
