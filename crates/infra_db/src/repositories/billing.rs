//! Billing repository implementation
//!
//! This module provides database access for the lines of the current bill.
//! Recording a sale touches both `billing` and `products` and always runs in
//! one transaction.

use sqlx::FromRow;
use tracing::debug;

use crate::error::DatabaseError;
use crate::pool::DatabasePool;
use crate::repositories::product::ProductRepository;

/// Repository for the current bill
#[derive(Debug, Clone)]
pub struct BillingRepository {
    pool: DatabasePool,
}

impl BillingRepository {
    /// Creates a new BillingRepository with the given connection pool
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Inserts a billing line and takes its quantity out of stock
    ///
    /// This method ensures atomicity: either the line is inserted and the
    /// stock decremented together, or neither happens.
    ///
    /// # Errors
    ///
    /// - `DatabaseError::NotFound` if the product row is gone
    /// - `DatabaseError::Conflict` if the product no longer has enough stock
    pub async fn record_sale(&self, sale: &NewBillingLineRow) -> Result<BillingLineRow, DatabaseError> {
        let mut tx = self.pool.begin().await.map_err(DatabaseError::classify)?;

        if !ProductRepository::decrement_stock(&mut *tx, sale.product_id, sale.qty).await? {
            let on_hand = ProductRepository::quantity_on_hand(&mut *tx, sale.product_id).await?;
            tx.rollback().await.map_err(DatabaseError::classify)?;
            return Err(match on_hand {
                None => DatabaseError::not_found("Product", sale.product_id),
                Some(qty) => DatabaseError::Conflict(format!(
                    "{} has {} on hand, cannot sell {}",
                    sale.product, qty, sale.qty
                )),
            });
        }

        let id = sqlx::query(
            r#"
            INSERT INTO billing (product, qty, price_per_unit, total_price)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&sale.product)
        .bind(sale.qty)
        .bind(&sale.price_per_unit)
        .bind(&sale.total_price)
        .execute(&mut *tx)
        .await
        .map_err(DatabaseError::classify)?
        .last_insert_rowid();

        tx.commit().await.map_err(DatabaseError::classify)?;
        debug!(line_id = id, product_id = sale.product_id, "Sale committed");

        Ok(BillingLineRow {
            id,
            product: sale.product.clone(),
            qty: sale.qty,
            price_per_unit: sale.price_per_unit.clone(),
            total_price: sale.total_price.clone(),
        })
    }

    /// Lists the lines of the current bill in insertion order
    pub async fn list(&self) -> Result<Vec<BillingLineRow>, DatabaseError> {
        sqlx::query_as::<_, BillingLineRow>(
            r#"
            SELECT id, product, qty, price_per_unit, total_price
            FROM billing
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(DatabaseError::classify)
    }

    /// Deletes every line and returns how many were removed
    ///
    /// Stock is not restored.
    pub async fn clear(&self) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM billing")
            .execute(&self.pool)
            .await
            .map_err(DatabaseError::classify)?;

        Ok(result.rows_affected())
    }
}

// ============================================================================
// Row types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct BillingLineRow {
    pub id: i64,
    pub product: String,
    pub qty: i64,
    pub price_per_unit: String,
    pub total_price: String,
}

#[derive(Debug, Clone)]
pub struct NewBillingLineRow {
    pub product_id: i64,
    pub product: String,
    pub qty: i64,
    pub price_per_unit: String,
    pub total_price: String,
}
