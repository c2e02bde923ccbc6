//! Infrastructure Database Layer
//!
//! This crate provides the database infrastructure for the point-of-sale
//! system: a SQLite connection pool, the schema bootstrap, repositories for
//! the `products` and `billing` tables, and the `StorePort` adapter used by
//! the billing engine.
//!
//! # Architecture
//!
//! The crate follows the repository pattern, providing data access abstractions
//! that hide the database implementation details from the domain layer.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, ensure_schema, DatabaseConfig, SqliteStoreAdapter};
//!
//! let pool = create_pool(DatabaseConfig::new("sqlite://store.db")).await?;
//! ensure_schema(&pool).await?;
//! let store = SqliteStoreAdapter::new(pool, Currency::INR);
//! ```

pub mod pool;
pub mod error;
pub mod schema;
pub mod repositories;
pub mod adapters;

pub use pool::{DatabasePool, create_pool, create_pool_from_url, DatabaseConfig, IN_MEMORY_URL};
pub use error::DatabaseError;
pub use schema::ensure_schema;
pub use adapters::SqliteStoreAdapter;
