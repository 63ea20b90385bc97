//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{LinkTarget, NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for short link storage and retrieval.
///
/// Uses SQLx prepared statements for SQL injection protection. Queries are
/// bound at runtime so the crate builds without a reachable database.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<i64, AppError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO short_links (code, original_url) VALUES ($1, $2) RETURNING id",
        )
        .bind(&new_link.code)
        .bind(&new_link.original_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(id)
    }

    async fn find_target_by_code(&self, code: &str) -> Result<Option<LinkTarget>, AppError> {
        let row = sqlx::query_as::<_, (i64, String)>(
            "SELECT id, original_url FROM short_links WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|(id, original_url)| LinkTarget { id, original_url }))
    }

    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let rows = sqlx::query_as::<_, (i64, String, String, DateTime<Utc>)>(
            "SELECT id, code, original_url, created_at FROM short_links ORDER BY created_at DESC",
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows
            .into_iter()
            .map(|(id, code, original_url, created_at)| {
                ShortLink::new(id, code, original_url, created_at)
            })
            .collect())
    }

    async fn health_check(&self) -> bool {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(self.pool.as_ref())
            .await
            .is_ok()
    }
}
