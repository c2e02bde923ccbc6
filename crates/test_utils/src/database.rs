//! Database Test Utilities
//!
//! Every `TestDatabase` is a private in-memory SQLite database with the
//! schema applied, so tests never share state and need no external service.

use std::sync::Arc;

use core_kernel::Currency;
use domain_billing::{BillingEngine, Transcriber};
use infra_db::{create_pool, ensure_schema, DatabaseConfig, DatabaseError, DatabasePool, SqliteStoreAdapter};

/// A throwaway SQLite database for one test
pub struct TestDatabase {
    pub pool: DatabasePool,
    pub currency: Currency,
}

impl TestDatabase {
    /// Opens a fresh in-memory database and creates the tables
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be opened or the schema fails
    pub async fn new() -> Result<Self, DatabaseError> {
        let pool = create_pool(DatabaseConfig::in_memory()).await?;
        ensure_schema(&pool).await?;
        Ok(Self {
            pool,
            currency: Currency::INR,
        })
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Store adapter over this database
    pub fn store(&self) -> SqliteStoreAdapter {
        SqliteStoreAdapter::new(self.pool.clone(), self.currency)
    }

    /// Billing engine over this database with voice disabled
    pub fn engine(&self) -> BillingEngine {
        BillingEngine::new(Arc::new(self.store()), self.currency)
    }

    /// Billing engine over this database using `transcriber` for voice
    pub fn engine_with_transcriber(&self, transcriber: Arc<dyn Transcriber>) -> BillingEngine {
        self.engine().with_transcriber(transcriber)
    }

    /// Counts the rows of a table directly, bypassing the adapter
    pub async fn row_count(&self, table: &str) -> Result<i64, DatabaseError> {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .map_err(DatabaseError::classify)
    }

    /// Clears all data from the database while preserving the schema
    pub async fn clear_data(&self) -> Result<(), DatabaseError> {
        for table in ["billing", "products"] {
            sqlx::query(&format!("DELETE FROM {}", table))
                .execute(&self.pool)
                .await
                .map_err(DatabaseError::classify)?;
        }
        Ok(())
    }
}

/// Helper macro for running database tests
#[macro_export]
macro_rules! db_test {
    ($name:ident, |$db:ident| $body:block) => {
        #[tokio::test]
        async fn $name() {
            let $db = $crate::database::TestDatabase::new()
                .await
                .expect("Failed to create test database");
            $body
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_fresh_database_is_empty() {
        let db = TestDatabase::new().await.unwrap();
        assert_eq!(db.row_count("products").await.unwrap(), 0);
        assert_eq!(db.row_count("billing").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_databases_are_isolated() {
        let first = TestDatabase::new().await.unwrap();
        let second = TestDatabase::new().await.unwrap();

        first
            .engine()
            .add_product(crate::fixtures::ProductFixtures::rice())
            .await
            .unwrap();

        assert_eq!(first.row_count("products").await.unwrap(), 1);
        assert_eq!(second.row_count("products").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_clear_data() {
        let db = TestDatabase::new().await.unwrap();
        let engine = db.engine();
        engine
            .add_product(crate::fixtures::ProductFixtures::rice())
            .await
            .unwrap();
        engine.submit_sale("rice", 1).await.unwrap();

        db.clear_data().await.unwrap();

        assert_eq!(db.row_count("products").await.unwrap(), 0);
        assert_eq!(db.row_count("billing").await.unwrap(), 0);
    }
}
