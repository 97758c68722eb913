//! Record-store contract consumed by the validator and the create endpoint.

use crate::storage::errors::StoreResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

/// A persisted content section.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub id: String,
    pub page: String,
    pub section: String,
    pub section_key: String,
    pub section_type: Option<String>,
    #[schema(value_type = Object)]
    pub content: JsonValue,
    pub is_active: bool,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: DateTime<Utc>,
}

/// A content section about to be persisted.
#[derive(Debug, Clone)]
pub struct NewContentRecord {
    pub page: String,
    pub section: String,
    pub section_key: String,
    pub section_type: Option<String>,
    pub content: JsonValue,
    pub is_active: bool,
}

/// Read queries the validator needs, plus the single write used by the create endpoint.
///
/// Only active records take part in quota counts and duplicate lookups.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Counts active records of `section_type` on `page`, ignoring `exclude_id`.
    async fn count_active(
        &self,
        page: &str,
        section_type: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<u64>;

    /// Finds an active record with exactly this `(page, section_key)`, other than `exclude_id`.
    async fn find_by_key(
        &self,
        page: &str,
        section_key: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<Option<ContentRecord>>;

    /// Finds up to `limit` active records on `page` whose normalized key contains, or is
    /// contained in, the normalized `section_key`. Exact key matches and `exclude_id` are left out.
    async fn find_similar_keys(
        &self,
        page: &str,
        section_key: &str,
        exclude_id: Option<&str>,
        limit: usize,
    ) -> StoreResult<Vec<ContentRecord>>;

    async fn insert(&self, record: NewContentRecord) -> StoreResult<ContentRecord>;

    /// Cheap reachability check for the health endpoint.
    async fn ping(&self) -> StoreResult<()>;
}

/// Lowercases and strips everything but ASCII letters and digits.
pub fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// True when two normalized keys overlap (one contains the other). Empty keys never match.
pub fn keys_overlap(a: &str, b: &str) -> bool {
    !a.is_empty() && !b.is_empty() && (a.contains(b) || b.contains(a))
}
