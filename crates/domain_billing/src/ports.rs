//! Billing Domain Ports
//!
//! The store port is the narrow set of capabilities the engine needs from
//! persistence. Implementations:
//!
//! - **SQLite adapter** (`infra_db::SqliteStoreAdapter`)
//! - **In-memory adapter** (`adapters::InMemoryStore`) for tests and demos
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_billing::{BillingEngine, StorePort};
//! use std::sync::Arc;
//!
//! let store: Arc<dyn StorePort> = Arc::new(SqliteStoreAdapter::new(pool, Currency::INR));
//! let engine = BillingEngine::new(store, Currency::INR);
//! ```

use async_trait::async_trait;

use core_kernel::{DomainPort, HealthCheckable, PortError, ProductId};

use crate::line::{BillingLine, NewBillingLine};
use crate::product::{NewProduct, Product};

/// Persistence capabilities required by the billing engine
#[async_trait]
pub trait StorePort: DomainPort + HealthCheckable {
    /// Looks up a product by exact name
    ///
    /// If several products share the name, the one with the lowest id wins.
    async fn find_product_by_name(&self, name: &str) -> Result<Option<Product>, PortError>;

    /// Stores a new product and returns it with its assigned id
    ///
    /// # Errors
    ///
    /// Returns `PortError::Conflict` if a product with the same name exists
    async fn create_product(&self, product: &NewProduct) -> Result<Product, PortError>;

    /// Deletes a product
    ///
    /// # Errors
    ///
    /// Returns `PortError::NotFound` if no product has `id`
    async fn delete_product(&self, id: ProductId) -> Result<(), PortError>;

    /// All products ordered by id
    async fn list_products(&self) -> Result<Vec<Product>, PortError>;

    /// Inserts the billing line and decrements the product's quantity as one unit
    ///
    /// The decrement only applies while the quantity on hand still covers the
    /// sale; otherwise nothing is written.
    ///
    /// # Errors
    ///
    /// - `PortError::NotFound` if the product no longer exists
    /// - `PortError::Conflict` if the stock no longer covers the sale
    async fn record_sale(&self, line: &NewBillingLine) -> Result<BillingLine, PortError>;

    /// Deletes every billing line, returning how many were removed
    async fn clear_billing_lines(&self) -> Result<u64, PortError>;

    /// All billing lines ordered by id
    async fn list_billing_lines(&self) -> Result<Vec<BillingLine>, PortError>;
}
