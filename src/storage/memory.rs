//! In-memory content store for local runs and tests.

use crate::storage::errors::StoreResult;
use crate::storage::store::{keys_overlap, normalize_key, ContentRecord, ContentStore, NewContentRecord};
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

#[derive(Default)]
struct Inner {
    records: Vec<ContentRecord>,
    next_id: u64,
}

/// Content store backed by a `Vec`, ids assigned sequentially from 1.
#[derive(Default)]
pub struct InMemoryContentStore {
    inner: RwLock<Inner>,
}

impl InMemoryContentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a record inactive (archived). Returns false if the id is unknown.
    pub async fn deactivate(&self, id: &str) -> bool {
        let mut inner = self.inner.write().await;
        match inner.records.iter_mut().find(|r| r.id == id) {
            Some(r) => {
                r.is_active = false;
                true
            }
            None => false,
        }
    }
}

#[async_trait]
impl ContentStore for InMemoryContentStore {
    async fn count_active(
        &self,
        page: &str,
        section_type: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<u64> {
        let inner = self.inner.read().await;
        let count = inner
            .records
            .iter()
            .filter(|r| r.is_active && r.page == page)
            .filter(|r| r.section_type.as_deref() == Some(section_type))
            .filter(|r| exclude_id != Some(r.id.as_str()))
            .count();
        Ok(count as u64)
    }

    async fn find_by_key(
        &self,
        page: &str,
        section_key: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<Option<ContentRecord>> {
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .iter()
            .filter(|r| exclude_id != Some(r.id.as_str()))
            .find(|r| r.is_active && r.page == page && r.section_key == section_key)
            .cloned())
    }

    async fn find_similar_keys(
        &self,
        page: &str,
        section_key: &str,
        exclude_id: Option<&str>,
        limit: usize,
    ) -> StoreResult<Vec<ContentRecord>> {
        let wanted = normalize_key(section_key);
        let inner = self.inner.read().await;
        Ok(inner
            .records
            .iter()
            .filter(|r| r.is_active && r.page == page && r.section_key != section_key)
            .filter(|r| exclude_id != Some(r.id.as_str()))
            .filter(|r| keys_overlap(&normalize_key(&r.section_key), &wanted))
            .take(limit)
            .cloned()
            .collect())
    }

    async fn insert(&self, record: NewContentRecord) -> StoreResult<ContentRecord> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let stored = ContentRecord {
            id: inner.next_id.to_string(),
            page: record.page,
            section: record.section,
            section_key: record.section_key,
            section_type: record.section_type,
            content: record.content,
            is_active: record.is_active,
            created_at: Utc::now(),
        };
        inner.records.push(stored.clone());
        Ok(stored)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}
