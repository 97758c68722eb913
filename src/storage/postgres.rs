//! Persistent content store implementation using PostgreSQL.

use crate::storage::errors::{StoreError, StoreResult};
use crate::storage::store::{normalize_key, ContentRecord, ContentStore, NewContentRecord};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

const RECORD_COLUMNS: &str =
    "id::text AS id, page, section, section_key, section_type, content, is_active, created_at";

/// Normalized key expression, kept in step with [`normalize_key`].
const NORMALIZED_KEY_SQL: &str = "regexp_replace(lower(section_key), '[^a-z0-9]', '', 'g')";

/// A content store that uses a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PostgresContentStore {
    pool: PgPool,
}

impl PostgresContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects and makes sure the `content_sections` table exists.
    pub async fn connect(database_url: &str, max_connections: u32) -> StoreResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS content_sections (
                id BIGSERIAL PRIMARY KEY,
                page TEXT NOT NULL,
                section TEXT NOT NULL,
                section_key TEXT NOT NULL,
                section_type TEXT,
                content JSONB NOT NULL,
                is_active BOOLEAN NOT NULL DEFAULT TRUE,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS content_sections_page_type_idx
             ON content_sections (page, section_type) WHERE is_active",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

fn row_to_record(row: &PgRow) -> StoreResult<ContentRecord> {
    let id: String = row.try_get("id")?;
    let content: JsonValue = row.try_get("content")?;
    if !content.is_object() {
        return Err(StoreError::InvalidRecord(format!(
            "content of record {} is not an object",
            id
        )));
    }
    let created_at: DateTime<Utc> = row.try_get("created_at")?;

    Ok(ContentRecord {
        id,
        page: row.try_get("page")?,
        section: row.try_get("section")?,
        section_key: row.try_get("section_key")?,
        section_type: row.try_get("section_type")?,
        content,
        is_active: row.try_get("is_active")?,
        created_at,
    })
}

#[async_trait]
impl ContentStore for PostgresContentStore {
    async fn count_active(
        &self,
        page: &str,
        section_type: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM content_sections
             WHERE is_active AND page = $1 AND section_type = $2
               AND ($3::text IS NULL OR id::text <> $3)",
        )
        .bind(page)
        .bind(section_type)
        .bind(exclude_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count.max(0) as u64)
    }

    async fn find_by_key(
        &self,
        page: &str,
        section_key: &str,
        exclude_id: Option<&str>,
    ) -> StoreResult<Option<ContentRecord>> {
        let sql = format!(
            "SELECT {} FROM content_sections
             WHERE is_active AND page = $1 AND section_key = $2
               AND ($3::text IS NULL OR id::text <> $3)
             ORDER BY id LIMIT 1",
            RECORD_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(page)
            .bind(section_key)
            .bind(exclude_id)
            .fetch_optional(&self.pool)
            .await?;
        row.as_ref().map(row_to_record).transpose()
    }

    async fn find_similar_keys(
        &self,
        page: &str,
        section_key: &str,
        exclude_id: Option<&str>,
        limit: usize,
    ) -> StoreResult<Vec<ContentRecord>> {
        let wanted = normalize_key(section_key);
        if wanted.is_empty() {
            return Ok(Vec::new());
        }

        let sql = format!(
            "SELECT {cols} FROM content_sections
             WHERE is_active AND page = $1 AND section_key <> $2
               AND ($3::text IS NULL OR id::text <> $3)
               AND {norm} <> ''
               AND (position($4 IN {norm}) > 0 OR position({norm} IN $4) > 0)
             ORDER BY id LIMIT $5",
            cols = RECORD_COLUMNS,
            norm = NORMALIZED_KEY_SQL
        );
        let rows = sqlx::query(&sql)
            .bind(page)
            .bind(section_key)
            .bind(exclude_id)
            .bind(&wanted)
            .bind(limit as i64)
            .fetch_all(&self.pool)
            .await?;
        rows.iter().map(row_to_record).collect()
    }

    async fn insert(&self, record: NewContentRecord) -> StoreResult<ContentRecord> {
        let sql = format!(
            "INSERT INTO content_sections (page, section, section_key, section_type, content, is_active)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {}",
            RECORD_COLUMNS
        );
        let row = sqlx::query(&sql)
            .bind(&record.page)
            .bind(&record.section)
            .bind(&record.section_key)
            .bind(&record.section_type)
            .bind(&record.content)
            .bind(record.is_active)
            .fetch_one(&self.pool)
            .await?;
        row_to_record(&row)
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
