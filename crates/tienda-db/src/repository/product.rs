//! # Product Repository
//!
//! Database operations for products (`Producto`).
//!
//! ## Key Operations
//! - `register`: INSERT with `estado = 1`
//! - `update`: full overwrite of the writable fields, last writer wins
//! - `update_checked`: same overwrite, refused if the row's version moved on
//! - `soft_delete`: `estado = 0`, nothing else changes
//!
//! ## Concurrency
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Two admins edit product 5 at the same time                            │
//! │                                                                         │
//! │  A: update(5, draft_a) ──┐                                             │
//! │                          ├──► SQLite serializes the two UPDATEs        │
//! │  B: update(5, draft_b) ──┘                                             │
//! │                                                                         │
//! │  Final row = draft_a or draft_b, never a field-by-field mix.           │
//! │                                                                         │
//! │  With update_checked(5, draft, version = 3):                           │
//! │  the second writer finds version 4 and gets VersionConflict.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::{debug, info};

use crate::error::{DbError, DbResult};
use crate::pool::Database;
use tienda_core::{Product, ProductDraft, WriteOutcome};

/// Repository for product database operations.
#[derive(Debug, Clone)]
pub struct ProductRepository {
    db: Database,
}

impl ProductRepository {
    /// Creates a new ProductRepository.
    pub fn new(db: Database) -> Self {
        ProductRepository { db }
    }

    /// Inserts a new, active product.
    ///
    /// ## Returns
    /// * `Ok(WriteOutcome)` - `id` is the new `codigo`
    /// * `Err(DbError::ForeignKeyViolation)` - brand or category doesn't exist
    pub async fn register(&self, draft: &ProductDraft) -> DbResult<WriteOutcome> {
        debug!(description = %draft.description, "Registering product");

        let mut conn = self.db.open().await?;
        let result = sqlx::query(
            r#"
            INSERT INTO Producto (
                descripcion, precioUnitario, precioVenta,
                idmarcaProd, idCategoriaProd, estado
            ) VALUES (?1, ?2, ?3, ?4, ?5, 1)
            "#,
        )
        .bind(draft.description.as_str())
        .bind(draft.unit_cost.cents())
        .bind(draft.sale_price.cents())
        .bind(draft.brand_id)
        .bind(draft.category_id)
        .execute(&mut *conn)
        .await;
        conn.close().await;

        let result = result?;
        let outcome = WriteOutcome::new(result.last_insert_rowid(), result.rows_affected());

        info!(id = outcome.id, "Product registered");
        Ok(outcome)
    }

    /// Overwrites description, prices, brand and category of a product.
    ///
    /// The active flag is left alone; the version is bumped.
    ///
    /// ## Returns
    /// * `Ok(WriteOutcome)` - Update applied
    /// * `Err(DbError::NotFound)` - No product with this id
    pub async fn update(&self, id: i64, draft: &ProductDraft) -> DbResult<WriteOutcome> {
        debug!(id, "Updating product");

        let mut conn = self.db.open().await?;
        let result = sqlx::query(
            r#"
            UPDATE Producto SET
                descripcion = ?2,
                precioUnitario = ?3,
                precioVenta = ?4,
                idmarcaProd = ?5,
                idCategoriaProd = ?6,
                version = version + 1
            WHERE codigo = ?1
            "#,
        )
        .bind(id)
        .bind(draft.description.as_str())
        .bind(draft.unit_cost.cents())
        .bind(draft.sale_price.cents())
        .bind(draft.brand_id)
        .bind(draft.category_id)
        .execute(&mut *conn)
        .await;
        conn.close().await;

        let result = result?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        info!(id, "Product updated");
        Ok(WriteOutcome::new(id, result.rows_affected()))
    }

    /// Like [`update`](Self::update), but only if the row still has
    /// `expected_version`.
    ///
    /// ## Returns
    /// * `Err(DbError::VersionConflict)` - Row exists with another version
    /// * `Err(DbError::NotFound)` - No product with this id
    pub async fn update_checked(
        &self,
        id: i64,
        draft: &ProductDraft,
        expected_version: i64,
    ) -> DbResult<WriteOutcome> {
        debug!(id, expected_version, "Updating product with version check");

        let mut conn = self.db.open().await?;
        let result = sqlx::query(
            r#"
            UPDATE Producto SET
                descripcion = ?2,
                precioUnitario = ?3,
                precioVenta = ?4,
                idmarcaProd = ?5,
                idCategoriaProd = ?6,
                version = version + 1
            WHERE codigo = ?1 AND version = ?7
            "#,
        )
        .bind(id)
        .bind(draft.description.as_str())
        .bind(draft.unit_cost.cents())
        .bind(draft.sale_price.cents())
        .bind(draft.brand_id)
        .bind(draft.category_id)
        .bind(expected_version)
        .execute(&mut *conn)
        .await;

        let result = match result {
            Ok(result) => result,
            Err(e) => {
                conn.close().await;
                return Err(e.into());
            }
        };

        if result.rows_affected() == 0 {
            let exists: Result<Option<i64>, sqlx::Error> =
                sqlx::query_scalar("SELECT version FROM Producto WHERE codigo = ?1")
                    .bind(id)
                    .fetch_optional(&mut *conn)
                    .await;
            conn.close().await;

            return Err(match exists? {
                Some(_) => DbError::version_conflict("Product", id, expected_version),
                None => DbError::not_found("Product", id),
            });
        }
        conn.close().await;

        info!(id, "Product updated");
        Ok(WriteOutcome::new(id, result.rows_affected()))
    }

    /// Soft-deletes a product by setting `estado = 0`.
    ///
    /// Idempotent: deleting an inactive product matches the row again and
    /// changes nothing.
    pub async fn soft_delete(&self, id: i64) -> DbResult<WriteOutcome> {
        debug!(id, "Soft-deleting product");

        let mut conn = self.db.open().await?;
        let result = sqlx::query("UPDATE Producto SET estado = 0 WHERE codigo = ?1")
            .bind(id)
            .execute(&mut *conn)
            .await;
        conn.close().await;

        let result = result?;
        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Product", id));
        }

        info!(id, "Product soft-deleted");
        Ok(WriteOutcome::new(id, result.rows_affected()))
    }

    /// Gets a product by its id, active or not.
    pub async fn get(&self, id: i64) -> DbResult<Option<Product>> {
        let mut conn = self.db.open().await?;
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                codigo AS id,
                descripcion AS description,
                precioUnitario AS unit_cost_cents,
                precioVenta AS sale_price_cents,
                idmarcaProd AS brand_id,
                idCategoriaProd AS category_id,
                estado AS active,
                version
            FROM Producto
            WHERE codigo = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *conn)
        .await;
        conn.close().await;

        Ok(product?)
    }

    /// Lists every product, active and inactive, by id.
    pub async fn list(&self) -> DbResult<Vec<Product>> {
        let mut conn = self.db.open().await?;
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT
                codigo AS id,
                descripcion AS description,
                precioUnitario AS unit_cost_cents,
                precioVenta AS sale_price_cents,
                idmarcaProd AS brand_id,
                idCategoriaProd AS category_id,
                estado AS active,
                version
            FROM Producto
            ORDER BY codigo
            "#,
        )
        .fetch_all(&mut *conn)
        .await;
        conn.close().await;

        let products = products?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Counts active products (for diagnostics).
    pub async fn count_active(&self) -> DbResult<i64> {
        let mut conn = self.db.open().await?;
        let count: Result<i64, sqlx::Error> =
            sqlx::query_scalar("SELECT COUNT(*) FROM Producto WHERE estado = 1")
                .fetch_one(&mut *conn)
                .await;
        conn.close().await;

        Ok(count?)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;
    use tienda_core::Money;

    /// Fresh database with brand 1 and categories 1, 2.
    async fn seeded_db() -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.brands().register("Acme").await.unwrap();
        db.categories().register("Hardware").await.unwrap();
        db.categories().register("Gadgets").await.unwrap();
        db
    }

    fn draft(description: &str, cost: i64, price: i64, brand_id: i64, category_id: i64) -> ProductDraft {
        ProductDraft {
            description: description.to_string(),
            unit_cost: Money::from_cents(cost),
            sale_price: Money::from_cents(price),
            brand_id,
            category_id,
        }
    }

    /// The writable fields of a stored row.
    fn fields_of(product: &Product) -> ProductDraft {
        ProductDraft {
            description: product.description.clone(),
            unit_cost: product.unit_cost(),
            sale_price: product.sale_price(),
            brand_id: product.brand_id,
            category_id: product.category_id,
        }
    }

    #[tokio::test]
    async fn test_register_reads_back_active() {
        let db = seeded_db().await;
        let repo = db.products();

        let outcome = repo.register(&draft("Widget", 1000, 1500, 1, 2)).await.unwrap();
        assert_eq!(outcome.rows_affected, 1);

        let product = repo.get(outcome.id).await.unwrap().unwrap();
        assert_eq!(product.description, "Widget");
        assert_eq!(product.unit_cost().to_string(), "10.00");
        assert_eq!(product.sale_price().to_string(), "15.00");
        assert_eq!(product.brand_id, 1);
        assert_eq!(product.category_id, 2);
        assert!(product.active);
        assert_eq!(product.version, 0);
    }

    #[tokio::test]
    async fn test_register_stores_description_verbatim() {
        let db = seeded_db().await;
        let repo = db.products();

        let nasty = "Robert'); DROP TABLE Producto;--";
        let outcome = repo.register(&draft(nasty, 100, 200, 1, 1)).await.unwrap();

        let product = repo.get(outcome.id).await.unwrap().unwrap();
        assert_eq!(product.description, nasty);
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_register_with_missing_brand_fails() {
        let db = seeded_db().await;
        let repo = db.products();

        let err = repo.register(&draft("Orphan", 100, 200, 99, 1)).await.unwrap_err();
        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_only_target_row() {
        let db = seeded_db().await;
        let repo = db.products();

        let first = repo.register(&draft("Widget", 1000, 1500, 1, 2)).await.unwrap();
        let second = repo.register(&draft("Gizmo", 300, 450, 1, 1)).await.unwrap();

        let new_fields = draft("Widget Pro", 1200, 1999, 1, 1);
        let outcome = repo.update(first.id, &new_fields).await.unwrap();
        assert_eq!(outcome.rows_affected, 1);

        let updated = repo.get(first.id).await.unwrap().unwrap();
        assert_eq!(fields_of(&updated), new_fields);
        assert!(updated.active);
        assert_eq!(updated.version, 1);

        let untouched = repo.get(second.id).await.unwrap().unwrap();
        assert_eq!(fields_of(&untouched), draft("Gizmo", 300, 450, 1, 1));
        assert_eq!(untouched.version, 0);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let db = seeded_db().await;

        let err = db.products().update(42, &draft("Ghost", 1, 2, 1, 1)).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_checked() {
        let db = seeded_db().await;
        let repo = db.products();
        let id = repo.register(&draft("Widget", 1000, 1500, 1, 2)).await.unwrap().id;

        repo.update_checked(id, &draft("Widget v2", 1000, 1600, 1, 2), 0)
            .await
            .unwrap();

        // A second writer still holding version 0 loses.
        let err = repo
            .update_checked(id, &draft("Stale", 1, 1, 1, 1), 0)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::VersionConflict { expected: 0, .. }));

        let product = repo.get(id).await.unwrap().unwrap();
        assert_eq!(product.description, "Widget v2");
        assert_eq!(product.version, 1);

        let err = repo
            .update_checked(999, &draft("Ghost", 1, 1, 1, 1), 0)
            .await
            .unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_soft_delete_flips_flag_only() {
        let db = seeded_db().await;
        let repo = db.products();
        let id = repo.register(&draft("Widget", 1000, 1500, 1, 2)).await.unwrap().id;
        let before = repo.get(id).await.unwrap().unwrap();

        repo.soft_delete(id).await.unwrap();

        let after = repo.get(id).await.unwrap().unwrap();
        assert!(!after.active);
        assert_eq!(fields_of(&after), fields_of(&before));
        assert_eq!(after.version, before.version);
        assert_eq!(repo.count_active().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_soft_delete_is_idempotent() {
        let db = seeded_db().await;
        let repo = db.products();
        let id = repo.register(&draft("Widget", 1000, 1500, 1, 2)).await.unwrap().id;

        repo.soft_delete(id).await.unwrap();
        let once = repo.get(id).await.unwrap().unwrap();

        repo.soft_delete(id).await.unwrap();
        let twice = repo.get(id).await.unwrap().unwrap();

        assert_eq!(once, twice);
    }

    #[tokio::test]
    async fn test_soft_delete_unknown_id_is_not_found() {
        let db = seeded_db().await;

        let err = db.products().soft_delete(5).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_last_writer_wins() {
        // File database so each writer gets its own SQLite connection.
        let path = std::env::temp_dir().join(format!(
            "tienda-concurrent-{}.db",
            std::process::id()
        ));
        let _ = std::fs::remove_file(&path);

        let db = Database::new(DbConfig::new(&path).max_connections(4))
            .await
            .unwrap();
        db.brands().register("Acme").await.unwrap();
        db.categories().register("Hardware").await.unwrap();
        db.categories().register("Gadgets").await.unwrap();

        let repo = db.products();
        let id = repo.register(&draft("Widget", 1000, 1500, 1, 2)).await.unwrap().id;

        let a = draft("Version A", 1100, 1600, 1, 1);
        let b = draft("Version B", 2200, 3300, 1, 2);

        // Hold two connections at once to prove the pool is not serializing writers.
        let held_a = db.open().await.unwrap();
        let held_b = db.open().await.unwrap();
        assert!(db.pool().size() >= 2);
        held_a.close().await;
        held_b.close().await;

        let task_a = tokio::spawn({
            let repo = repo.clone();
            let a = a.clone();
            async move { repo.update(id, &a).await }
        });
        let task_b = tokio::spawn({
            let repo = repo.clone();
            let b = b.clone();
            async move { repo.update(id, &b).await }
        });
        task_a.await.unwrap().unwrap();
        task_b.await.unwrap().unwrap();

        let product = repo.get(id).await.unwrap().unwrap();
        let final_fields = fields_of(&product);
        assert!(final_fields == a || final_fields == b);
        assert_eq!(product.version, 2);

        db.close().await;
        let _ = std::fs::remove_file(&path);
    }

    #[tokio::test]
    async fn test_list_and_count() {
        let db = seeded_db().await;
        let repo = db.products();

        let first = repo.register(&draft("A", 1, 2, 1, 1)).await.unwrap().id;
        repo.register(&draft("B", 1, 2, 1, 1)).await.unwrap();
        repo.register(&draft("C", 1, 2, 1, 2)).await.unwrap();
        repo.soft_delete(first).await.unwrap();

        let all = repo.list().await.unwrap();
        let names: Vec<_> = all.iter().map(|p| p.description.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(repo.count_active().await.unwrap(), 2);
    }
}
