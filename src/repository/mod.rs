use crate::db::{DbConnection, DbPool};
use crate::domain::inventory::{InventoryItem, InventoryListQuery};
use crate::domain::order::{Order, OrderListQuery};
use crate::domain::reservation::{NewReservation, Reservation, ReservationListQuery};
use crate::domain::restaurant::{NewRestaurant, Restaurant, UpdateRestaurant};
use crate::domain::table::{DiningTable, TableListQuery};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod inventory;
pub mod order;
pub mod reservation;
pub mod restaurant;
pub mod table;

#[cfg(test)]
pub mod mock;

/// Diesel-backed repository implementation that wraps an r2d2 pool.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read operations over restaurant profiles. Resolving a principal to their
/// restaurant is the tenant boundary for everything else.
pub trait RestaurantReader {
    /// Return the restaurant owned by `user_id`, or `None` for operators who
    /// have not saved a profile yet. When storage holds more than one row for
    /// the principal the first by id wins; callers must not rely on any other
    /// ordering.
    fn get_restaurant_by_user(&self, user_id: &str) -> RepositoryResult<Option<Restaurant>>;
}

/// Write operations over restaurant profiles.
pub trait RestaurantWriter {
    fn create_restaurant(&self, new_restaurant: &NewRestaurant) -> RepositoryResult<Restaurant>;
    fn update_restaurant(
        &self,
        restaurant_id: i32,
        updates: &UpdateRestaurant,
    ) -> RepositoryResult<Restaurant>;
}

/// Read-only operations over order records. Orders are written by the
/// order-taking flow, not by this console.
pub trait OrderReader {
    /// List orders newest-first. The query exposes equality predicates only;
    /// date-range filtering happens client-side.
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
}

/// Read operations over reservation records.
pub trait ReservationReader {
    /// List reservations ordered by business date, newest first.
    fn list_reservations(&self, query: ReservationListQuery)
    -> RepositoryResult<Vec<Reservation>>;
}

/// Write operations over reservation records.
pub trait ReservationWriter {
    fn create_reservation(&self, new_reservation: &NewReservation)
    -> RepositoryResult<Reservation>;
}

/// Read-only operations over dining tables.
pub trait TableReader {
    fn list_tables(&self, query: TableListQuery) -> RepositoryResult<Vec<DiningTable>>;
}

/// Read-only operations over inventory items. Scoped by principal, not by
/// restaurant.
pub trait InventoryReader {
    fn list_inventory_items(&self, query: InventoryListQuery)
    -> RepositoryResult<Vec<InventoryItem>>;
}
