//! Schema bootstrap
//!
//! The store owns two tables. `billing` deliberately has no foreign key to
//! `products`: a line keeps its own copy of the product name and price so
//! deleting a product never touches the current bill.
//!
//! Product names are unique. A store file written before that rule may hold
//! duplicates; it still opens, with a plain index, and lookups pick the
//! oldest row.

use tracing::{info, warn};

use crate::error::DatabaseError;
use crate::pool::DatabasePool;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS products (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        name            TEXT    NOT NULL,
        qty             INTEGER NOT NULL CHECK (qty >= 0),
        price_per_unit  TEXT    NOT NULL
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS billing (
        id              INTEGER PRIMARY KEY AUTOINCREMENT,
        product         TEXT    NOT NULL,
        qty             INTEGER NOT NULL CHECK (qty > 0),
        price_per_unit  TEXT    NOT NULL,
        total_price     TEXT    NOT NULL
    )
    "#,
];

const UNIQUE_NAME_INDEX: &str =
    "CREATE UNIQUE INDEX IF NOT EXISTS idx_products_name_unique ON products (name)";

const LEGACY_NAME_INDEX: &str = "CREATE INDEX IF NOT EXISTS idx_products_name ON products (name)";

/// Creates the tables if they do not exist yet
///
/// Safe to call on every start-up; existing rows are left alone.
pub async fn ensure_schema(pool: &DatabasePool) -> Result<(), DatabaseError> {
    let mut tx = pool.begin().await.map_err(DatabaseError::classify)?;
    for statement in STATEMENTS {
        sqlx::query(statement)
            .execute(&mut *tx)
            .await
            .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))?;
    }
    tx.commit().await.map_err(DatabaseError::classify)?;

    match sqlx::query(UNIQUE_NAME_INDEX).execute(pool).await {
        Ok(_) => {}
        Err(e) => match DatabaseError::classify(e) {
            DatabaseError::DuplicateEntry(message) => {
                warn!(%message, "Existing products share a name; product names are not unique");
                sqlx::query(LEGACY_NAME_INDEX)
                    .execute(pool)
                    .await
                    .map_err(|e| DatabaseError::SchemaFailed(e.to_string()))?;
            }
            other => return Err(DatabaseError::SchemaFailed(other.to_string())),
        },
    }

    info!("Database schema ready");
    Ok(())
}
