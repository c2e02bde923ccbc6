//! Billing Domain - Inventory and Point-of-Sale Billing
//!
//! This crate holds the part of the point-of-sale system with real rules:
//! selling stock onto a bill, keeping the running total honest, and turning
//! spoken phrases into sales.
//!
//! # Billing transaction
//!
//! 1. Look up the product by exact name
//! 2. Refuse the sale if the quantity exceeds the quantity on hand
//! 3. Price the line as `quantity * unit_price`
//! 4. Insert the line and decrement stock as one store operation
//!
//! # Voice billing
//!
//! A phrase such as `"2 kg rice"` is parsed into `(2, "rice")` and fed to the
//! same billing path, so a voice sale fails exactly like a typed one.
//!
//! # Example
//!
//! ```rust,ignore
//! use domain_billing::{BillingEngine, adapters::InMemoryStore};
//!
//! let engine = BillingEngine::new(Arc::new(InMemoryStore::new()), Currency::INR);
//! engine.add_product(NewProduct::new("rice", 10, price)?).await?;
//!
//! let line = engine.submit_sale("rice", 3).await?;
//! println!("{}", engine.running_total().await?); // Total Bill: ₹6.00
//! ```

pub mod product;
pub mod line;
pub mod input;
pub mod utterance;
pub mod total;
pub mod voice;
pub mod ports;
pub mod engine;
pub mod adapters;
pub mod error;

pub use product::{Product, NewProduct};
pub use line::{BillingLine, NewBillingLine};
pub use input::{SaleRequest, InputValidationError};
pub use utterance::{parse_utterance, ParseError};
pub use total::RunningTotal;
pub use voice::{Transcriber, RecognitionFailure};
pub use ports::StorePort;
pub use engine::{BillingEngine, BillCompletion, VoiceSale};
pub use error::BillingError;
