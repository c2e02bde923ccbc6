//! Repository implementations for the store tables
//!
//! Repositories encapsulate SQL and speak in row types; the adapter layer
//! maps rows to domain types.
//!
//! # Architecture
//!
//! Each repository follows these principles:
//! - Runtime-checked queries with positional `?` binds
//! - Money stored as decimal text
//! - Transaction support for writes that touch more than one table

pub mod product;
pub mod billing;

pub use product::{ProductRepository, ProductRow, NewProductRow};
pub use billing::{BillingRepository, BillingLineRow, NewBillingLineRow};
