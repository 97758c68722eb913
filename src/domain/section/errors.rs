use thiserror::Error;

pub type SchemaResult<T> = Result<T, SchemaError>;

/// A malformed section-type table. These are programming errors caught at start-up.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("section type '{0}' is declared more than once")]
    DuplicateSectionType(String),

    #[error("section type '{0}' must allow at least one page")]
    NoAllowedPages(String),

    #[error("section type '{0}' must allow at least one instance per page")]
    ZeroQuota(String),

    #[error("field '{field}' of section type '{section_type}' declares an enum with no options")]
    EmptyEnum { section_type: String, field: String },

    #[error("field '{field}' has an invalid pattern: {source}")]
    InvalidPattern {
        field: String,
        #[source]
        source: regex::Error,
    },
}
