//! Section-key clash detection against stored records.

use crate::domain::validate::ValidationReport;
use crate::storage::{ContentStore, StoreResult};
use serde_json::{Map, Value as JsonValue};

/// How many near-matches are reported.
pub const SIMILAR_KEY_LIMIT: usize = 3;

/// Exact `(page, sectionKey)` clash is an error; overlapping normalized keys on the same page
/// are a warning. `content_id` names the record being edited, which never clashes with itself.
///
/// Skipped when `page` or `sectionKey` is missing.
pub async fn perform_duplicate_validation(
    store: &dyn ContentStore,
    data: &Map<String, JsonValue>,
    content_id: Option<&str>,
) -> StoreResult<ValidationReport> {
    let mut report = ValidationReport::new();

    let page = data.get("page").and_then(|v| v.as_str()).unwrap_or("");
    let key = data.get("sectionKey").and_then(|v| v.as_str()).unwrap_or("");
    if page.is_empty() || key.is_empty() {
        return Ok(report);
    }

    if store.find_by_key(page, key, content_id).await?.is_some() {
        report.error(format!(
            "Section key '{}' already exists on page '{}'",
            key, page
        ));
    }

    let similar = store
        .find_similar_keys(page, key, content_id, SIMILAR_KEY_LIMIT)
        .await?;
    if !similar.is_empty() {
        let keys: Vec<&str> = similar.iter().map(|r| r.section_key.as_str()).collect();
        report.warning(format!(
            "Similar section keys exist on page '{}': {}",
            page,
            keys.join(", ")
        ));
    }

    Ok(report)
}
