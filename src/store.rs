//! Durable CRUD primitives over the books table.
//!
//! Each operation is one SQL statement with an explicit result value
//! (assigned id, rows affected, or `Option`). Not-found is never an error at
//! this layer; callers decide what a zero result means.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// One catalog entry. All descriptive fields are nullable; only `id` is
/// guaranteed present once persisted.
#[derive(Clone, Debug, Serialize, Deserialize, sqlx::FromRow)]
pub struct Book {
    pub id: i64,
    pub name: Option<String>,
    pub img: Option<String>,
    pub summary: Option<String>,
}

/// User-supplied fields for insert and replace. Missing fields persist as
/// NULL; no validation happens below the API boundary.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookFields {
    pub name: Option<String>,
    pub img: Option<String>,
    pub summary: Option<String>,
}

/// Handle to the durable books table. Constructed once at startup and passed
/// by clone; the pool inside is shared.
#[derive(Clone)]
pub struct BookStore {
    pool: SqlitePool,
}

impl BookStore {
    /// Open the database at `database_url` (e.g. `sqlite://books.db`),
    /// creating the file on first run.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    /// Wrap an existing pool. Tests use this with an in-memory database.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the books table if absent. Idempotent. AUTOINCREMENT keeps
    /// deleted ids from being reassigned within the table's lifetime.
    pub async fn ensure_schema(&self) -> Result<(), SchemaError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS books (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT,
                img TEXT,
                summary TEXT
            )
            "#,
        )
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Insert one row and return the assigned id. Null fields are accepted
    /// and stored as given.
    pub async fn insert(&self, fields: &BookFields) -> Result<i64, sqlx::Error> {
        tracing::debug!(name = ?fields.name, "insert book");
        let result = sqlx::query("INSERT INTO books (name, img, summary) VALUES (?, ?, ?)")
            .bind(&fields.name)
            .bind(&fields.img)
            .bind(&fields.summary)
            .execute(&self.pool)
            .await?;
        Ok(result.last_insert_rowid())
    }

    /// Full table in id order. An empty table yields an empty vec.
    pub async fn list_all(&self) -> Result<Vec<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>("SELECT id, name, img, summary FROM books")
            .fetch_all(&self.pool)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> Result<Option<Book>, sqlx::Error> {
        sqlx::query_as::<_, Book>("SELECT id, name, img, summary FROM books WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// Overwrite all three fields for `id`. Returns rows affected (0 or 1);
    /// no row is created when `id` is absent.
    pub async fn replace(&self, id: i64, fields: &BookFields) -> Result<u64, sqlx::Error> {
        tracing::debug!(id, "replace book");
        let result = sqlx::query("UPDATE books SET name = ?, img = ?, summary = ? WHERE id = ?")
            .bind(&fields.name)
            .bind(&fields.img)
            .bind(&fields.summary)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Remove the row with `id`. Returns rows affected (0 or 1).
    pub async fn delete_by_id(&self, id: i64) -> Result<u64, sqlx::Error> {
        tracing::debug!(id, "delete book");
        let result = sqlx::query("DELETE FROM books WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }

    /// Remove every row. Used only by the seeder.
    pub async fn clear_all(&self) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM books").execute(&self.pool).await?;
        Ok(())
    }
}
