//! # Category Repository
//!
//! Database operations for categories (`categoriaProd`). Same shape as
//! brands: register and rename, no delete.

use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::pool::Database;
use tienda_core::{Category, WriteOutcome};

/// Repository for category database operations.
#[derive(Debug, Clone)]
pub struct CategoryRepository {
    db: Database,
}

impl CategoryRepository {
    /// Creates a new CategoryRepository.
    pub fn new(db: Database) -> Self {
        CategoryRepository { db }
    }

    /// Inserts a category. The name is stored exactly as given.
    pub async fn register(&self, name: &str) -> DbResult<WriteOutcome> {
        debug!(name = %name, "Registering category");

        let mut conn = self.db.open().await?;
        let result = sqlx::query("INSERT INTO categoriaProd (categoria) VALUES (?1)")
            .bind(name)
            .execute(&mut *conn)
            .await;
        conn.close().await;

        let result = result?;
        let outcome = WriteOutcome::new(result.last_insert_rowid(), result.rows_affected());

        info!(id = outcome.id, "Category registered");
        Ok(outcome)
    }

    /// Overwrites the name of an existing category.
    pub async fn rename(&self, id: i64, name: &str) -> DbResult<WriteOutcome> {
        debug!(id, name = %name, "Renaming category");

        let mut conn = self.db.open().await?;
        let result = sqlx::query("UPDATE categoriaProd SET categoria = ?2 WHERE id = ?1")
            .bind(id)
            .bind(name)
            .execute(&mut *conn)
            .await;
        conn.close().await;

        let result = result?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Category", id));
        }

        info!(id, "Category renamed");
        Ok(WriteOutcome::new(id, result.rows_affected()))
    }

    /// Gets a category by id.
    pub async fn get(&self, id: i64) -> DbResult<Option<Category>> {
        let mut conn = self.db.open().await?;
        let category = sqlx::query_as::<_, Category>(
            "SELECT id, categoria AS name FROM categoriaProd WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await;
        conn.close().await;

        Ok(category?)
    }

    /// Lists all categories by id.
    pub async fn list(&self) -> DbResult<Vec<Category>> {
        let mut conn = self.db.open().await?;
        let categories = sqlx::query_as::<_, Category>(
            "SELECT id, categoria AS name FROM categoriaProd ORDER BY id",
        )
        .fetch_all(&mut *conn)
        .await;
        conn.close().await;

        Ok(categories?)
    }
}
