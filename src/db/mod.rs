// Database module: a key/value table holding serialized blobs

pub mod prompts;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};

pub const MEMORY_DB: &str = ":memory:";

// Initialize database and run migrations
pub async fn init_db(db_path: &str) -> Result<SqlitePool> {
    let pool = if db_path == MEMORY_DB {
        // Every in-memory connection is its own database, so pin the pool to one
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await
            .context("Failed to open in-memory database")?
    } else {
        // Create the database file if it doesn't exist
        if !std::path::Path::new(db_path).exists() {
            std::fs::File::create(db_path)
                .with_context(|| format!("Failed to create database file {}", db_path))?;
        }

        SqlitePool::connect(&format!("sqlite:{}", db_path))
            .await
            .context("Failed to connect to database")?
    };

    let migration_sql = include_str!("../../migrations/001_initial_schema.sql");
    sqlx::query(migration_sql)
        .execute(&pool)
        .await
        .context("Failed to run migrations")?;

    tracing::debug!(db_path, "database ready");

    Ok(pool)
}

/// Read the blob stored under `key`
pub async fn load_blob(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await
        .with_context(|| format!("Failed to read '{}'", key))?;

    Ok(value)
}

/// Replace the blob stored under `key`
pub async fn save_blob(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        "INSERT INTO kv_store (key, value) VALUES (?, ?)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await
    .with_context(|| format!("Failed to write '{}'", key))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let pool = init_db(MEMORY_DB).await.unwrap();
        assert_eq!(load_blob(&pool, "absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_save_then_overwrite() {
        let pool = init_db(MEMORY_DB).await.unwrap();

        save_blob(&pool, "k", "first").await.unwrap();
        assert_eq!(load_blob(&pool, "k").await.unwrap().as_deref(), Some("first"));

        save_blob(&pool, "k", "second").await.unwrap();
        assert_eq!(load_blob(&pool, "k").await.unwrap().as_deref(), Some("second"));
    }
}
