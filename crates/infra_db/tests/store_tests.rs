//! Integration tests for the SQLite store adapter

use rust_decimal_macros::dec;

use core_kernel::{Currency, HealthCheckable, Money, ProductId};
use domain_billing::{NewBillingLine, NewProduct, StorePort};
use infra_db::{create_pool, ensure_schema, DatabaseConfig, DatabasePool, SqliteStoreAdapter};

async fn pool() -> DatabasePool {
    let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();
    ensure_schema(&pool).await.unwrap();
    pool
}

async fn store() -> SqliteStoreAdapter {
    SqliteStoreAdapter::new(pool().await, Currency::INR)
}

fn product(name: &str, qty: u32, price: rust_decimal::Decimal) -> NewProduct {
    NewProduct::new(name, qty, Money::new(price, Currency::INR)).unwrap()
}

mod schema_tests {
    use super::*;

    #[tokio::test]
    async fn test_ensure_schema_is_idempotent() {
        let pool = pool().await;
        ensure_schema(&pool).await.unwrap();

        let store = SqliteStoreAdapter::new(pool, Currency::INR);
        assert!(store.list_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_with_duplicate_names_still_opens() {
        let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();
        sqlx::query(
            "CREATE TABLE products (id INTEGER PRIMARY KEY AUTOINCREMENT, name TEXT NOT NULL, \
             qty INTEGER NOT NULL, price_per_unit TEXT NOT NULL)",
        )
        .execute(&pool)
        .await
        .unwrap();
        sqlx::query("INSERT INTO products (name, qty, price_per_unit) VALUES ('salt', 1, '1'), ('salt', 9, '1')")
            .execute(&pool)
            .await
            .unwrap();

        ensure_schema(&pool).await.unwrap();

        let store = SqliteStoreAdapter::new(pool, Currency::INR);
        let found = store.find_product_by_name("salt").await.unwrap().unwrap();
        assert_eq!(found.id, ProductId::new(1));
        assert_eq!(found.quantity_on_hand, 1);
    }

    #[tokio::test]
    async fn test_health_check() {
        let store = store().await;
        let health = store.health_check().await;
        assert!(health.is_healthy());
        assert_eq!(health.adapter_id, "sqlite-store-adapter");
    }
}

mod product_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_find_product() {
        let store = store().await;
        let created = store.create_product(&product("rice", 10, dec!(2.0))).await.unwrap();

        let found = store.find_product_by_name("rice").await.unwrap().unwrap();
        assert_eq!(found, created);
        assert_eq!(found.unit_price.amount(), dec!(2.0));
        assert_eq!(found.quantity_on_hand, 10);
    }

    #[tokio::test]
    async fn test_find_is_exact_and_case_sensitive() {
        let store = store().await;
        store.create_product(&product("rice", 10, dec!(2.0))).await.unwrap();

        assert!(store.find_product_by_name("Rice").await.unwrap().is_none());
        assert!(store.find_product_by_name("ric").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_fractional_price_survives_storage() {
        let store = store().await;
        store.create_product(&product("saffron", 1, dec!(1234.5678))).await.unwrap();

        let found = store.find_product_by_name("saffron").await.unwrap().unwrap();
        assert_eq!(found.unit_price.amount(), dec!(1234.5678));
    }

    #[tokio::test]
    async fn test_duplicate_name_is_a_conflict() {
        let store = store().await;
        store.create_product(&product("salt", 1, dec!(1))).await.unwrap();

        let err = store.create_product(&product("salt", 9, dec!(1))).await.unwrap_err();
        assert!(err.is_conflict());
        assert_eq!(store.list_products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_concurrent_duplicate_creates_store_one_row() {
        let pool = create_pool(DatabaseConfig::in_memory()).await.unwrap();
        ensure_schema(&pool).await.unwrap();
        let a = SqliteStoreAdapter::new(pool.clone(), Currency::INR);
        let b = SqliteStoreAdapter::new(pool, Currency::INR);
        let salt = product("salt", 1, dec!(1));

        let (first, second) = tokio::join!(a.create_product(&salt), b.create_product(&salt));
        assert_eq!(u8::from(first.is_ok()) + u8::from(second.is_ok()), 1);
        assert_eq!(a.list_products().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_orders_by_id() {
        let store = store().await;
        store.create_product(&product("b", 1, dec!(1))).await.unwrap();
        store.create_product(&product("a", 1, dec!(1))).await.unwrap();

        let names: Vec<String> = store
            .list_products()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_delete_product() {
        let store = store().await;
        let rice = store.create_product(&product("rice", 10, dec!(2.0))).await.unwrap();

        store.delete_product(rice.id).await.unwrap();
        assert!(store.list_products().await.unwrap().is_empty());

        let err = store.delete_product(rice.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_ids_not_reused() {
        let store = store().await;
        let first = store.create_product(&product("rice", 1, dec!(1))).await.unwrap();
        store.delete_product(first.id).await.unwrap();
        let second = store.create_product(&product("dal", 1, dec!(1))).await.unwrap();
        assert!(second.id > first.id);
    }
}

mod billing_tests {
    use super::*;

    #[tokio::test]
    async fn test_record_sale_inserts_line_and_decrements_stock() {
        let store = store().await;
        let rice = store.create_product(&product("rice", 10, dec!(2.0))).await.unwrap();

        let line = store
            .record_sale(&NewBillingLine::for_sale(&rice, 3).unwrap())
            .await
            .unwrap();

        assert_eq!(line.product_name, "rice");
        assert_eq!(line.total_price.amount(), dec!(6.0));

        let lines = store.list_billing_lines().await.unwrap();
        assert_eq!(lines, vec![line]);

        let rice = store.find_product_by_name("rice").await.unwrap().unwrap();
        assert_eq!(rice.quantity_on_hand, 7);
    }

    #[tokio::test]
    async fn test_oversell_is_conflict_and_writes_nothing() {
        let store = store().await;
        let rice = store.create_product(&product("rice", 2, dec!(2.0))).await.unwrap();

        let err = store
            .record_sale(&NewBillingLine::for_sale(&rice, 3).unwrap())
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        assert!(store.list_billing_lines().await.unwrap().is_empty());
        let rice = store.find_product_by_name("rice").await.unwrap().unwrap();
        assert_eq!(rice.quantity_on_hand, 2);
    }

    #[tokio::test]
    async fn test_sale_of_deleted_product_is_not_found() {
        let store = store().await;
        let rice = store.create_product(&product("rice", 5, dec!(2.0))).await.unwrap();
        store.delete_product(rice.id).await.unwrap();

        let err = store
            .record_sale(&NewBillingLine::for_sale(&rice, 1).unwrap())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(store.list_billing_lines().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_stale_snapshot_cannot_oversell() {
        let store = store().await;
        let rice = store.create_product(&product("rice", 5, dec!(2.0))).await.unwrap();

        // Both sales priced against the same snapshot of 5 on hand
        store.record_sale(&NewBillingLine::for_sale(&rice, 4).unwrap()).await.unwrap();
        let err = store
            .record_sale(&NewBillingLine::for_sale(&rice, 4).unwrap())
            .await
            .unwrap_err();

        assert!(err.is_conflict());
        let rice = store.find_product_by_name("rice").await.unwrap().unwrap();
        assert_eq!(rice.quantity_on_hand, 1);
    }

    #[tokio::test]
    async fn test_clear_keeps_stock_and_line_ids_grow() {
        let store = store().await;
        let rice = store.create_product(&product("rice", 10, dec!(2.0))).await.unwrap();

        let first = store.record_sale(&NewBillingLine::for_sale(&rice, 1).unwrap()).await.unwrap();
        store.record_sale(&NewBillingLine::for_sale(&rice, 2).unwrap()).await.unwrap();

        assert_eq!(store.clear_billing_lines().await.unwrap(), 2);
        assert!(store.list_billing_lines().await.unwrap().is_empty());
        let on_hand = store.find_product_by_name("rice").await.unwrap().unwrap();
        assert_eq!(on_hand.quantity_on_hand, 7);

        let next = store.record_sale(&NewBillingLine::for_sale(&rice, 1).unwrap()).await.unwrap();
        assert!(next.id > first.id);
    }

    #[tokio::test]
    async fn test_lines_survive_product_deletion() {
        let store = store().await;
        let soap = store.create_product(&product("soap", 4, dec!(12.25))).await.unwrap();
        store.record_sale(&NewBillingLine::for_sale(&soap, 2).unwrap()).await.unwrap();

        store.delete_product(soap.id).await.unwrap();

        let lines = store.list_billing_lines().await.unwrap();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].product_name, "soap");
        assert_eq!(lines[0].total_price.amount(), dec!(24.50));
    }

    #[tokio::test]
    async fn test_unknown_product_id() {
        let store = store().await;
        let ghost = domain_billing::Product {
            id: ProductId::new(77),
            name: "ghost".to_string(),
            quantity_on_hand: 5,
            unit_price: Money::new(dec!(1), Currency::INR),
        };

        let err = store
            .record_sale(&NewBillingLine::for_sale(&ghost, 1).unwrap())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
