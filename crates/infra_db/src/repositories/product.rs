//! Product repository implementation
//!
//! Rows in `products` carry the quantity on hand and the unit price. Prices
//! are stored as decimal text so no precision is lost to SQLite's REAL.

use sqlx::{FromRow, SqliteConnection};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

/// Repository for the product inventory
#[derive(Debug, Clone)]
pub struct ProductRepository {
    pool: DatabasePool,
}

impl ProductRepository {
    /// Creates a new ProductRepository with the given connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Inserts a product and returns its new id
    pub async fn insert(&self, product: &NewProductRow) -> Result<i64, DatabaseError> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, qty, price_per_unit)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(&product.name)
        .bind(product.qty)
        .bind(&product.price_per_unit)
        .execute(&self.pool)
        .await
        .map_err(DatabaseError::classify)?;

        Ok(result.last_insert_rowid())
    }

    /// Finds a product by id
    pub async fn find_by_id(&self, id: i64) -> Result<Option<ProductRow>, DatabaseError> {
        sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, qty, price_per_unit FROM products WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::classify)
    }

    /// Finds a product by exact, case-sensitive name
    ///
    /// If several rows share the name, the oldest one wins.
    pub async fn find_by_name(&self, name: &str) -> Result<Option<ProductRow>, DatabaseError> {
        sqlx::query_as::<_, ProductRow>(
            r#"
            SELECT id, name, qty, price_per_unit
            FROM products
            WHERE name = ?
            ORDER BY id
            LIMIT 1
            "#,
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(DatabaseError::classify)
    }

    /// Lists every product ordered by id
    pub async fn list(&self) -> Result<Vec<ProductRow>, DatabaseError> {
        sqlx::query_as::<_, ProductRow>(
            "SELECT id, name, qty, price_per_unit FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::classify)
    }

    /// Deletes a product
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no row has this id
    pub async fn delete(&self, id: i64) -> Result<(), DatabaseError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::classify)?;

        if result.rows_affected() == 0 {
            return Err(DatabaseError::not_found("Product", id));
        }
        Ok(())
    }

    /// Takes `quantity` units out of stock on an open connection
    ///
    /// The decrement only applies while enough stock remains, so two
    /// concurrent sales can never push the quantity below zero. Returns
    /// `false` if the row is missing or short.
    pub async fn decrement_stock(
        conn: &mut SqliteConnection,
        id: i64,
        quantity: i64,
    ) -> Result<bool, DatabaseError> {
        let result = sqlx::query(
            r#"
            UPDATE products
            SET qty = qty - ?
            WHERE id = ? AND qty >= ?
            "#,
        )
        .bind(quantity)
        .bind(id)
        .bind(quantity)
        .execute(conn)
        .await
        .map_err(DatabaseError::classify)?;

        Ok(result.rows_affected() == 1)
    }

    /// Reads the quantity on hand on an open connection
    pub async fn quantity_on_hand(
        conn: &mut SqliteConnection,
        id: i64,
    ) -> Result<Option<i64>, DatabaseError> {
        sqlx::query_scalar::<_, i64>("SELECT qty FROM products WHERE id = ?")
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(DatabaseError::classify)
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct ProductRow {
    pub id: i64,
    pub name: String,
    pub qty: i64,
    pub price_per_unit: String,
}

#[derive(Debug, Clone)]
pub struct NewProductRow {
    pub name: String,
    pub qty: i64,
    pub price_per_unit: String,
}
