use mockall::mock;

use super::{
    InventoryReader, OrderReader, ReservationReader, ReservationWriter, RestaurantReader,
    RestaurantWriter, TableReader,
};
use crate::domain::{
    inventory::{InventoryItem, InventoryListQuery},
    order::{Order, OrderListQuery},
    reservation::{NewReservation, Reservation, ReservationListQuery},
    restaurant::{NewRestaurant, Restaurant, UpdateRestaurant},
    table::{DiningTable, TableListQuery},
};
use crate::repository::errors::RepositoryResult;

mock! {
    pub DashboardRepo {}

    impl RestaurantReader for DashboardRepo {
        fn get_restaurant_by_user(&self, user_id: &str) -> RepositoryResult<Option<Restaurant>>;
    }

    impl OrderReader for DashboardRepo {
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<Vec<Order>>;
    }

    impl ReservationReader for DashboardRepo {
        fn list_reservations(&self, query: ReservationListQuery) -> RepositoryResult<Vec<Reservation>>;
    }

    impl TableReader for DashboardRepo {
        fn list_tables(&self, query: TableListQuery) -> RepositoryResult<Vec<DiningTable>>;
    }

    impl InventoryReader for DashboardRepo {
        fn list_inventory_items(&self, query: InventoryListQuery) -> RepositoryResult<Vec<InventoryItem>>;
    }
}

mock! {
    pub ReservationRepo {}

    impl RestaurantReader for ReservationRepo {
        fn get_restaurant_by_user(&self, user_id: &str) -> RepositoryResult<Option<Restaurant>>;
    }

    impl ReservationReader for ReservationRepo {
        fn list_reservations(&self, query: ReservationListQuery) -> RepositoryResult<Vec<Reservation>>;
    }

    impl ReservationWriter for ReservationRepo {
        fn create_reservation(&self, new_reservation: &NewReservation) -> RepositoryResult<Reservation>;
    }
}

mock! {
    pub SettingsRepo {}

    impl RestaurantReader for SettingsRepo {
        fn get_restaurant_by_user(&self, user_id: &str) -> RepositoryResult<Option<Restaurant>>;
    }

    impl RestaurantWriter for SettingsRepo {
        fn create_restaurant(&self, new_restaurant: &NewRestaurant) -> RepositoryResult<Restaurant>;
        fn update_restaurant(&self, restaurant_id: i32, updates: &UpdateRestaurant) -> RepositoryResult<Restaurant>;
    }
}
