//! Durable key/value store
//!
//! String keys mapped to string values, backed by the `kv_items` table.
//! Every write replaces the whole value for its key.

use crate::error::Result;
use chrono::Utc;
use sqlx::SqlitePool;

/// Repository for key/value operations
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Read the value stored under `key`
    pub async fn get_item(&self, key: &str) -> Result<Option<String>> {
        let value: Option<String> = sqlx::query_scalar("SELECT value FROM kv_items WHERE key = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        Ok(value)
    }

    /// Store `value` under `key`, replacing any previous value
    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO kv_items (key, value, updated_at) VALUES (?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        tracing::debug!("Set item: {} ({} bytes)", key, value.len());
        Ok(())
    }

    /// Remove `key`; removing an absent key is not an error
    pub async fn remove_item(&self, key: &str) -> Result<()> {
        let rows = sqlx::query("DELETE FROM kv_items WHERE key = ?")
            .bind(key)
            .execute(&self.pool)
            .await?
            .rows_affected();

        tracing::debug!("Removed item: {} (existed: {})", key, rows > 0);
        Ok(())
    }

    /// List every stored key in lexical order
    pub async fn keys(&self) -> Result<Vec<String>> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT key FROM kv_items ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }
}
