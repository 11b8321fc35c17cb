//! # Brand Repository
//!
//! Database operations for brands (`marcaProd`).
//!
//! Brands have no delete. The storefront's "delete brand" screen overwrites
//! the name in place, which is exposed here as [`BrandRepository::rename`].

use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::pool::Database;
use tienda_core::{Brand, WriteOutcome};

/// Repository for brand database operations.
#[derive(Debug, Clone)]
pub struct BrandRepository {
    db: Database,
}

impl BrandRepository {
    /// Creates a new BrandRepository.
    pub fn new(db: Database) -> Self {
        BrandRepository { db }
    }

    /// Inserts a brand. The name is stored exactly as given.
    pub async fn register(&self, name: &str) -> DbResult<WriteOutcome> {
        debug!(name = %name, "Registering brand");

        let mut conn = self.db.open().await?;
        let result = sqlx::query("INSERT INTO marcaProd (marca) VALUES (?1)")
            .bind(name)
            .execute(&mut *conn)
            .await;
        conn.close().await;

        let result = result?;
        let outcome = WriteOutcome::new(result.last_insert_rowid(), result.rows_affected());

        info!(id = outcome.id, "Brand registered");
        Ok(outcome)
    }

    /// Overwrites the name of an existing brand.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - No brand with this id
    pub async fn rename(&self, id: i64, name: &str) -> DbResult<WriteOutcome> {
        debug!(id, name = %name, "Renaming brand");

        let mut conn = self.db.open().await?;
        let result = sqlx::query("UPDATE marcaProd SET marca = ?2 WHERE id = ?1")
            .bind(id)
            .bind(name)
            .execute(&mut *conn)
            .await;
        conn.close().await;

        let result = result?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Brand", id));
        }

        info!(id, "Brand renamed");
        Ok(WriteOutcome::new(id, result.rows_affected()))
    }

    /// Gets a brand by id.
    pub async fn get(&self, id: i64) -> DbResult<Option<Brand>> {
        let mut conn = self.db.open().await?;
        let brand = sqlx::query_as::<_, Brand>("SELECT id, marca AS name FROM marcaProd WHERE id = ?1")
            .bind(id)
            .fetch_optional(&mut *conn)
            .await;
        conn.close().await;

        Ok(brand?)
    }

    /// Lists all brands by id.
    pub async fn list(&self) -> DbResult<Vec<Brand>> {
        let mut conn = self.db.open().await?;
        let brands = sqlx::query_as::<_, Brand>("SELECT id, marca AS name FROM marcaProd ORDER BY id")
            .fetch_all(&mut *conn)
            .await;
        conn.close().await;

        Ok(brands?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;

    #[tokio::test]
    async fn test_register_and_read_back() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.brands();

        let outcome = repo.register("Acme").await.unwrap();
        assert_eq!(outcome.rows_affected, 1);

        let brand = repo.get(outcome.id).await.unwrap().unwrap();
        assert_eq!(brand.name, "Acme");
    }

    #[tokio::test]
    async fn test_name_with_quote_and_terminator_is_stored_verbatim() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.brands();

        repo.register("Plain").await.unwrap();
        let name = "O'Reilly'); DELETE FROM marcaProd; --";
        let id = repo.register(name).await.unwrap().id;

        assert_eq!(repo.get(id).await.unwrap().unwrap().name, name);
        assert_eq!(repo.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_rename() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.brands();
        let acme = repo.register("Acme").await.unwrap().id;
        let other = repo.register("Globex").await.unwrap().id;

        repo.rename(acme, "Acme Corp").await.unwrap();

        assert_eq!(repo.get(acme).await.unwrap().unwrap().name, "Acme Corp");
        assert_eq!(repo.get(other).await.unwrap().unwrap().name, "Globex");
    }

    #[tokio::test]
    async fn test_rename_unknown_id_is_not_found() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let err = db.brands().rename(7, "Nobody").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
