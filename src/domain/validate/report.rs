use serde::Serialize;
use utoipa::ToSchema;

/// Findings of one or more content checks.
///
/// Only `errors` block a record from being saved; `warnings` and `suggestions` are hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, ToSchema)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub suggestions: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    pub fn warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    pub fn suggest(&mut self, msg: impl Into<String>) {
        self.suggestions.push(msg.into());
    }

    /// Appends another report's findings after this one's, preserving order.
    pub fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self.suggestions.extend(other.suggestions);
    }
}
