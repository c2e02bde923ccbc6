//! The billing engine
//!
//! Owns the store and (optionally) a transcriber, and exposes every operation
//! the display surface can trigger. The display surface holds an engine and
//! re-renders from `list_products`, `list_billing_lines` and `running_total`
//! after each call.

use std::sync::Arc;
use tracing::{info, instrument, warn};

use core_kernel::{Currency, HealthCheckResult, MoneyError, PortError, ProductId};

use crate::error::BillingError;
use crate::input::SaleRequest;
use crate::line::{BillingLine, NewBillingLine};
use crate::ports::StorePort;
use crate::product::{NewProduct, Product};
use crate::total::RunningTotal;
use crate::utterance::parse_utterance;
use crate::voice::{RecognitionFailure, Transcriber};

/// Result of completing a bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct BillCompletion {
    /// Lines removed from the bill
    pub lines_cleared: u64,
    /// Total after completion (always zero)
    pub total: RunningTotal,
}

/// A sale created from speech
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct VoiceSale {
    /// What the recognition service heard, lower-cased
    pub transcript: String,
    /// The billing line that was recorded
    pub line: BillingLine,
}

/// Coordinates inventory, billing lines and voice input against one store
///
/// # Invariants
///
/// - A line's `total_price` is `quantity * unit_price` at the time of sale
/// - A sale never drives a product's quantity below zero
/// - A failed operation leaves the store as it was
#[derive(Clone)]
pub struct BillingEngine {
    store: Arc<dyn StorePort>,
    transcriber: Option<Arc<dyn Transcriber>>,
    currency: Currency,
}

impl BillingEngine {
    /// Creates an engine over `store`, pricing everything in `currency`
    pub fn new(store: Arc<dyn StorePort>, currency: Currency) -> Self {
        Self {
            store,
            transcriber: None,
            currency,
        }
    }

    /// Enables voice billing through `transcriber`
    pub fn with_transcriber(mut self, transcriber: Arc<dyn Transcriber>) -> Self {
        self.transcriber = Some(transcriber);
        self
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if a transcriber is configured
    pub fn voice_enabled(&self) -> bool {
        self.transcriber.is_some()
    }

    // ------------------------------------------------------------------
    // Inventory
    // ------------------------------------------------------------------

    /// Adds a product to the inventory
    ///
    /// # Errors
    ///
    /// - `DuplicateProduct` if a product with the same name exists
    /// - `Calculation` if the price is not in the engine's currency
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn add_product(&self, product: NewProduct) -> Result<Product, BillingError> {
        if product.unit_price.currency() != self.currency {
            return Err(MoneyError::CurrencyMismatch(
                product.unit_price.currency().to_string(),
                self.currency.to_string(),
            )
            .into());
        }

        let created = self
            .store
            .create_product(&product)
            .await
            .map_err(|e| match e {
                PortError::Conflict { .. } => {
                    warn!("Rejected duplicate product");
                    BillingError::DuplicateProduct(product.name.clone())
                }
                other => BillingError::Persistence(other),
            })?;
        info!(id = %created.id, "Product added");
        Ok(created)
    }

    /// Lists every product ordered by id
    pub async fn list_products(&self) -> Result<Vec<Product>, BillingError> {
        Ok(self.store.list_products().await?)
    }

    /// Deletes a product; existing billing lines keep their copy of its name
    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), BillingError> {
        self.store.delete_product(id).await.map_err(|e| match e {
            PortError::NotFound { .. } => BillingError::ProductNotFound(id.to_string()),
            other => BillingError::Persistence(other),
        })?;
        info!("Product deleted");
        Ok(())
    }

    // ------------------------------------------------------------------
    // Billing
    // ------------------------------------------------------------------

    /// Sells `quantity` units of the product named `product_name`
    ///
    /// On success the line is on the bill and the product's quantity has
    /// dropped by `quantity`. On failure nothing has changed.
    ///
    /// # Errors
    ///
    /// - `InvalidInput` if the name is blank or `quantity` is zero
    /// - `ProductNotFound` if no product has that exact name
    /// - `InsufficientStock` if `quantity` exceeds the quantity on hand
    /// - `Calculation` if the line total is out of range
    /// - `Persistence` if the store failed
    #[instrument(skip(self))]
    pub async fn submit_sale(
        &self,
        product_name: &str,
        quantity: u32,
    ) -> Result<BillingLine, BillingError> {
        let request = SaleRequest::new(product_name, quantity)?;

        let product = self
            .store
            .find_product_by_name(&request.product_name)
            .await?
            .ok_or_else(|| BillingError::ProductNotFound(request.product_name.clone()))?;

        if !product.has_stock_for(request.quantity) {
            warn!(
                available = product.quantity_on_hand,
                "Rejected sale: insufficient stock"
            );
            return Err(BillingError::InsufficientStock {
                product: product.name,
                requested: request.quantity,
                available: product.quantity_on_hand,
            });
        }

        let pending = NewBillingLine::for_sale(&product, request.quantity).inspect_err(|e| {
            warn!(error = %e, "Rejected sale: line total out of range");
        })?;
        let line = self.store.record_sale(&pending).await.map_err(|e| match e {
            PortError::NotFound { .. } => BillingError::ProductNotFound(product.name.clone()),
            PortError::Conflict { .. } => BillingError::InsufficientStock {
                product: product.name.clone(),
                requested: request.quantity,
                available: product.quantity_on_hand,
            },
            other => BillingError::Persistence(other),
        })?;

        info!(
            line = %line.id,
            total = %line.total_price,
            "Billing entry added and stock updated"
        );
        Ok(line)
    }

    /// Sells from an already validated request
    pub async fn submit_request(&self, request: &SaleRequest) -> Result<BillingLine, BillingError> {
        self.submit_sale(&request.product_name, request.quantity).await
    }

    /// Lists the lines on the current bill ordered by id
    pub async fn list_billing_lines(&self) -> Result<Vec<BillingLine>, BillingError> {
        Ok(self.store.list_billing_lines().await?)
    }

    /// Recomputes the running total from the stored lines
    ///
    /// A sum that no longer fits is a `Calculation` error; completing the
    /// bill clears it.
    pub async fn running_total(&self) -> Result<RunningTotal, BillingError> {
        let lines = self.store.list_billing_lines().await?;
        Ok(RunningTotal::from_lines(&lines, self.currency)?)
    }

    /// Clears every line and starts a new bill
    ///
    /// Irreversible: lines are deleted, not archived.
    #[instrument(skip(self))]
    pub async fn complete_bill(&self) -> Result<BillCompletion, BillingError> {
        let lines_cleared = self.store.clear_billing_lines().await?;
        info!(lines_cleared, "Bill completed, new billing session started");
        Ok(BillCompletion {
            lines_cleared,
            total: RunningTotal::zero(self.currency),
        })
    }

    // ------------------------------------------------------------------
    // Voice
    // ------------------------------------------------------------------

    /// Bills from a transcribed phrase such as `"2 kg rice"`
    ///
    /// Billing errors surface exactly as for typed input.
    #[instrument(skip(self))]
    pub async fn submit_utterance(&self, utterance: &str) -> Result<BillingLine, BillingError> {
        let (quantity, product_name) = parse_utterance(utterance).inspect_err(|e| {
            warn!(error = %e, "Rejected utterance");
        })?;
        self.submit_sale(&product_name, quantity).await
    }

    /// Transcribes `audio` and bills the resulting phrase
    ///
    /// # Errors
    ///
    /// `Recognition` if no transcriber is configured or recognition fails;
    /// otherwise as for `submit_utterance`.
    #[instrument(skip(self, audio), fields(audio_bytes = audio.len()))]
    pub async fn submit_voice(&self, audio: &[u8]) -> Result<VoiceSale, BillingError> {
        let transcriber = self
            .transcriber
            .as_ref()
            .ok_or(RecognitionFailure::Disabled)?;

        let transcript = transcriber
            .transcribe(audio)
            .await
            .inspect_err(|e| warn!(error = %e, "Speech recognition failed"))?
            .to_lowercase();

        let line = self.submit_utterance(&transcript).await?;
        Ok(VoiceSale { transcript, line })
    }

    /// Checks that the store is reachable
    pub async fn health_check(&self) -> HealthCheckResult {
        self.store.health_check().await
    }
}
