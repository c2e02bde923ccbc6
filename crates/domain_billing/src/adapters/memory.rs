//! In-memory store adapter
//!
//! Keeps products and billing lines behind a single mutex, so `record_sale`
//! is atomic in the same way the database transaction is.

use async_trait::async_trait;
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use core_kernel::{
    BillingLineId, DomainPort, HealthCheckResult, HealthCheckable, PortError, ProductId,
};

use crate::line::{BillingLine, NewBillingLine};
use crate::ports::StorePort;
use crate::product::{NewProduct, Product};

#[derive(Debug, Default)]
struct State {
    products: Vec<Product>,
    lines: Vec<BillingLine>,
    last_product_id: i64,
    last_line_id: i64,
}

/// A `StorePort` that lives for the lifetime of the process
///
/// Ids are never reused, matching `AUTOINCREMENT` in the SQLite schema.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, State>, PortError> {
        self.state
            .lock()
            .map_err(|_| PortError::internal("in-memory store lock poisoned"))
    }
}

impl DomainPort for InMemoryStore {}

#[async_trait]
impl HealthCheckable for InMemoryStore {
    async fn health_check(&self) -> HealthCheckResult {
        match self.lock() {
            Ok(_) => HealthCheckResult::healthy("in_memory", Duration::ZERO),
            Err(e) => HealthCheckResult::unhealthy("in_memory", Duration::ZERO, e.to_string()),
        }
    }
}

#[async_trait]
impl StorePort for InMemoryStore {
    async fn find_product_by_name(&self, name: &str) -> Result<Option<Product>, PortError> {
        let state = self.lock()?;
        Ok(state.products.iter().find(|p| p.name == name).cloned())
    }

    async fn create_product(&self, product: &NewProduct) -> Result<Product, PortError> {
        let mut state = self.lock()?;
        if state.products.iter().any(|p| p.name == product.name) {
            return Err(PortError::conflict(format!(
                "a product named '{}' already exists",
                product.name
            )));
        }
        state.last_product_id += 1;
        let created = Product {
            id: ProductId::new(state.last_product_id),
            name: product.name.clone(),
            quantity_on_hand: product.quantity_on_hand,
            unit_price: product.unit_price,
        };
        state.products.push(created.clone());
        Ok(created)
    }

    async fn delete_product(&self, id: ProductId) -> Result<(), PortError> {
        let mut state = self.lock()?;
        let before = state.products.len();
        state.products.retain(|p| p.id != id);
        if state.products.len() == before {
            return Err(PortError::not_found("Product", id));
        }
        Ok(())
    }

    async fn list_products(&self) -> Result<Vec<Product>, PortError> {
        Ok(self.lock()?.products.clone())
    }

    async fn record_sale(&self, line: &NewBillingLine) -> Result<BillingLine, PortError> {
        let mut state = self.lock()?;

        let product = state
            .products
            .iter_mut()
            .find(|p| p.id == line.product_id)
            .ok_or_else(|| PortError::not_found("Product", line.product_id))?;

        if product.quantity_on_hand < line.quantity {
            return Err(PortError::conflict(format!(
                "{} has {} on hand, cannot sell {}",
                product.name, product.quantity_on_hand, line.quantity
            )));
        }
        product.quantity_on_hand -= line.quantity;

        state.last_line_id += 1;
        let recorded = BillingLine::from_new(BillingLineId::new(state.last_line_id), line);
        state.lines.push(recorded.clone());
        Ok(recorded)
    }

    async fn clear_billing_lines(&self) -> Result<u64, PortError> {
        let mut state = self.lock()?;
        let cleared = state.lines.len() as u64;
        state.lines.clear();
        Ok(cleared)
    }

    async fn list_billing_lines(&self) -> Result<Vec<BillingLine>, PortError> {
        Ok(self.lock()?.lines.clone())
    }
}
