//! SQLite Store Adapter
//!
//! This module provides the database adapter for the billing domain,
//! implementing the `StorePort` trait on top of `ProductRepository` and
//! `BillingRepository`.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::SqliteStoreAdapter;
//! use domain_billing::{BillingEngine, StorePort};
//! use std::sync::Arc;
//!
//! let adapter = SqliteStoreAdapter::new(pool, Currency::INR);
//! let engine = BillingEngine::new(Arc::new(adapter), Currency::INR);
//! ```

use async_trait::async_trait;
use std::time::Instant;
use tracing::{debug, instrument};

use core_kernel::{
    BillingLineId, Currency, DomainPort, HealthCheckResult, HealthCheckable, Money, PortError,
    ProductId,
};
use domain_billing::{BillingLine, NewBillingLine, NewProduct, Product, StorePort};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;
use crate::repositories::{
    BillingLineRow, BillingRepository, NewBillingLineRow, NewProductRow, ProductRepository,
    ProductRow,
};

const ADAPTER_ID: &str = "sqlite-store-adapter";

/// SQLite-backed implementation of the `StorePort` trait
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DatabaseError::NotFound` -> `PortError::NotFound`
/// - `DatabaseError::Conflict` and constraint violations -> `PortError::Conflict`
/// - connection errors -> `PortError::Connection`
/// - Other errors -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct SqliteStoreAdapter {
    products: ProductRepository,
    billing: BillingRepository,
    pool: DatabasePool,
    currency: Currency,
}

impl SqliteStoreAdapter {
    /// Creates a new adapter; stored prices are read back in `currency`
    pub fn new(pool: DatabasePool, currency: Currency) -> Self {
        Self {
            products: ProductRepository::new(pool.clone()),
            billing: BillingRepository::new(pool.clone()),
            pool,
            currency,
        }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    fn product_from_row(&self, row: ProductRow) -> Result<Product, PortError> {
        Ok(Product {
            id: ProductId::new(row.id),
            quantity_on_hand: quantity_from_column(row.qty, "products.qty")?,
            unit_price: self.money_from_column(&row.price_per_unit, "products.price_per_unit")?,
            name: row.name,
        })
    }

    fn line_from_row(&self, row: BillingLineRow) -> Result<BillingLine, PortError> {
        Ok(BillingLine {
            id: BillingLineId::new(row.id),
            quantity: quantity_from_column(row.qty, "billing.qty")?,
            unit_price: self.money_from_column(&row.price_per_unit, "billing.price_per_unit")?,
            total_price: self.money_from_column(&row.total_price, "billing.total_price")?,
            product_name: row.product,
        })
    }

    fn money_from_column(&self, value: &str, column: &str) -> Result<Money, PortError> {
        Money::parse(value, self.currency).map_err(|e| PortError::Transformation {
            message: format!("{}: {}", column, e),
        })
    }
}

fn quantity_from_column(value: i64, column: &str) -> Result<u32, PortError> {
    u32::try_from(value).map_err(|_| PortError::Transformation {
        message: format!("{} out of range: {}", column, value),
    })
}

fn db_to_port_error(e: DatabaseError) -> PortError {
    match e {
        DatabaseError::NotFound(message) => PortError::NotFound {
            entity_type: "Product".to_string(),
            id: message,
        },
        DatabaseError::Conflict(message) => PortError::conflict(message),
        e if e.is_constraint_violation() => PortError::conflict(e.to_string()),
        e if e.is_connection_error() => PortError::Connection {
            message: e.to_string(),
            source: Some(Box::new(e)),
        },
        e => PortError::Internal {
            message: e.to_string(),
            source: Some(Box::new(e)),
        },
    }
}

// Mark as a domain port
impl DomainPort for SqliteStoreAdapter {}

#[async_trait]
impl HealthCheckable for SqliteStoreAdapter {
    /// Runs `SELECT 1` against the pool
    async fn health_check(&self) -> HealthCheckResult {
        let start = Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        match result {
            Ok(_) => HealthCheckResult::healthy(ADAPTER_ID, start.elapsed()),
            Err(e) => HealthCheckResult::unhealthy(
                ADAPTER_ID,
                start.elapsed(),
                format!("Database error: {}", e),
            ),
        }
    }
}

#[async_trait]
impl StorePort for SqliteStoreAdapter {
    #[instrument(skip(self))]
    async fn find_product_by_name(&self, name: &str) -> Result<Option<Product>, PortError> {
        debug!("Looking up product by name");
        self.products
            .find_by_name(name)
            .await
            .map_err(db_to_port_error)?
            .map(|row| self.product_from_row(row))
            .transpose()
    }

    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn create_product(&self, product: &NewProduct) -> Result<Product, PortError> {
        let row = NewProductRow {
            name: product.name.clone(),
            qty: i64::from(product.quantity_on_hand),
            price_per_unit: product.unit_price.to_storage_string(),
        };
        let id = self.products.insert(&row).await.map_err(db_to_port_error)?;
        debug!(id, "Product row inserted");

        Ok(Product {
            id: ProductId::new(id),
            name: product.name.clone(),
            quantity_on_hand: product.quantity_on_hand,
            unit_price: product.unit_price,
        })
    }

    #[instrument(skip(self), fields(product_id = %id))]
    async fn delete_product(&self, id: ProductId) -> Result<(), PortError> {
        self.products.delete(id.value()).await.map_err(|e| match e {
            DatabaseError::NotFound(_) => PortError::not_found("Product", id),
            other => db_to_port_error(other),
        })
    }

    async fn list_products(&self) -> Result<Vec<Product>, PortError> {
        self.products
            .list()
            .await
            .map_err(db_to_port_error)?
            .into_iter()
            .map(|row| self.product_from_row(row))
            .collect()
    }

    #[instrument(skip(self, line), fields(product_id = %line.product_id, quantity = line.quantity))]
    async fn record_sale(&self, line: &NewBillingLine) -> Result<BillingLine, PortError> {
        let row = NewBillingLineRow {
            product_id: line.product_id.value(),
            product: line.product_name.clone(),
            qty: i64::from(line.quantity),
            price_per_unit: line.unit_price.to_storage_string(),
            total_price: line.total_price.to_storage_string(),
        };

        let recorded = self.billing.record_sale(&row).await.map_err(|e| match e {
            DatabaseError::NotFound(_) => PortError::not_found("Product", line.product_id),
            other => db_to_port_error(other),
        })?;

        Ok(BillingLine::from_new(BillingLineId::new(recorded.id), line))
    }

    async fn clear_billing_lines(&self) -> Result<u64, PortError> {
        self.billing.clear().await.map_err(db_to_port_error)
    }

    async fn list_billing_lines(&self) -> Result<Vec<BillingLine>, PortError> {
        self.billing
            .list()
            .await
            .map_err(db_to_port_error)?
            .into_iter()
            .map(|row| self.line_from_row(row))
            .collect()
    }
}
