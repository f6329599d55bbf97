//! Helpers for integration tests.

use chrono::NaiveDateTime;
use diesel::prelude::*;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};

use dinedesk::db::{DbPool, establish_connection_pool};
use dinedesk::models::inventory::NewInventoryItem;
use dinedesk::models::order::NewOrder;
use dinedesk::models::table::NewRestaurantTable;
use dinedesk::schema::{inventory_items, orders, restaurant_tables};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!(); // assumes migrations/ exists

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        std::fs::remove_file(filename).ok(); // Clean up old DB

        let pool =
            establish_connection_pool(filename).expect("Failed to establish SQLite connection.");
        let mut conn = pool
            .get()
            .expect("Failed to get SQLite connection from pool.");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        std::fs::remove_file(&self.filename).ok();
        std::fs::remove_file(format!("{}-shm", &self.filename)).ok();
        std::fs::remove_file(format!("{}-wal", &self.filename)).ok();
    }
}

/// Insert an order row the way the (out of scope) order-taking flow would.
#[allow(dead_code)]
pub fn seed_order(
    pool: &DbPool,
    restaurant_id: i32,
    total_amount: Option<&str>,
    status: Option<&str>,
    created_at: NaiveDateTime,
) {
    let mut conn = pool.get().expect("pool should hand out a connection");
    diesel::insert_into(orders::table)
        .values(&NewOrder {
            restaurant_id,
            table_id: Some("T1"),
            customer_name: Some("Seed Customer"),
            total_amount,
            status,
            created_at,
        })
        .execute(&mut conn)
        .expect("order insert should succeed");
}

/// Insert a dining-table row the way the floor-plan flow would.
#[allow(dead_code)]
pub fn seed_table(pool: &DbPool, restaurant_id: i32, status: Option<&str>) {
    let mut conn = pool.get().expect("pool should hand out a connection");
    diesel::insert_into(restaurant_tables::table)
        .values(&NewRestaurantTable {
            restaurant_id,
            status,
        })
        .execute(&mut conn)
        .expect("table insert should succeed");
}

/// Insert an inventory row the way the stock-management flow would.
#[allow(dead_code)]
pub fn seed_inventory_item(
    pool: &DbPool,
    user_id: &str,
    name: &str,
    current_stock: Option<&str>,
    minimum_stock: Option<&str>,
) {
    let mut conn = pool.get().expect("pool should hand out a connection");
    diesel::insert_into(inventory_items::table)
        .values(&NewInventoryItem {
            user_id,
            name,
            current_stock,
            minimum_stock,
        })
        .execute(&mut conn)
        .expect("inventory insert should succeed");
}
