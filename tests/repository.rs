mod common;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use dinedesk::domain::inventory::InventoryListQuery;
use dinedesk::domain::order::{OrderListQuery, OrderStatus};
use dinedesk::domain::reservation::{
    NewReservation, ReservationListQuery, ReservationSource, ReservationStatus,
};
use dinedesk::domain::restaurant::NewRestaurant;
use dinedesk::domain::restaurant::UpdateRestaurant;
use dinedesk::domain::table::{TableListQuery, TableStatus};
use dinedesk::repository::{
    DieselRepository, InventoryReader, OrderReader, ReservationReader, ReservationWriter,
    RestaurantReader, RestaurantWriter, TableReader,
};

use common::{TestDb, seed_inventory_item, seed_order, seed_table};

fn timestamp(day: u32, hour: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 8, day)
        .and_then(|date| date.and_hms_opt(hour, 0, 0))
        .expect("valid test timestamp")
}

#[test]
fn restaurant_profile_create_read_update() {
    let db = TestDb::new("test_restaurant_profile_crud.db");
    let repo = DieselRepository::new(db.pool());

    assert!(
        repo.get_restaurant_by_user("user-1")
            .expect("lookup should succeed")
            .is_none()
    );

    let created = repo
        .create_restaurant(
            &NewRestaurant::new("user-1", "Spice Route")
                .with_address(Some("12 MG Road"))
                .with_cuisine_type(Some("Indian"))
                .with_total_tables(14),
        )
        .expect("create should succeed");
    assert_eq!(created.name, "Spice Route");
    assert_eq!(created.total_tables, 14);

    let fetched = repo
        .get_restaurant_by_user("user-1")
        .expect("lookup should succeed")
        .expect("profile should now exist");
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.address.as_deref(), Some("12 MG Road"));

    let updates = UpdateRestaurant::new(timestamp(21, 10))
        .name("Spice Route Express")
        .address(None::<&str>)
        .total_tables(20);
    let updated = repo
        .update_restaurant(created.id, &updates)
        .expect("update should succeed");
    assert_eq!(updated.name, "Spice Route Express");
    assert_eq!(updated.address, None);
    assert_eq!(updated.total_tables, 20);
    // Fields absent from the patch keep their values.
    assert_eq!(updated.cuisine_type.as_deref(), Some("Indian"));
}

#[test]
fn duplicate_profiles_resolve_to_the_first_by_id() {
    let db = TestDb::new("test_restaurant_duplicates.db");
    let repo = DieselRepository::new(db.pool());

    let first = repo
        .create_restaurant(&NewRestaurant::new("user-1", "First Save"))
        .expect("create should succeed");
    repo.create_restaurant(&NewRestaurant::new("user-1", "Second Save"))
        .expect("create should succeed");

    let resolved = repo
        .get_restaurant_by_user("user-1")
        .expect("lookup should succeed")
        .expect("profile should exist");
    assert_eq!(resolved.id, first.id);
    assert_eq!(resolved.name, "First Save");
}

#[test]
fn orders_are_scoped_ordered_and_capped() {
    let db = TestDb::new("test_order_listing.db");
    let repo = DieselRepository::new(db.pool());

    let mine = repo
        .create_restaurant(&NewRestaurant::new("user-1", "Mine"))
        .expect("create should succeed");
    let theirs = repo
        .create_restaurant(&NewRestaurant::new("user-2", "Theirs"))
        .expect("create should succeed");

    for hour in 9..16 {
        seed_order(
            &db.pool(),
            mine.id,
            Some("100.00"),
            Some("served"),
            timestamp(20, hour),
        );
    }
    seed_order(
        &db.pool(),
        theirs.id,
        Some("999.00"),
        Some("served"),
        timestamp(20, 12),
    );

    let all_mine = repo
        .list_orders(OrderListQuery::new(mine.id))
        .expect("list should succeed");
    assert_eq!(all_mine.len(), 7);
    assert!(
        all_mine
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at)
    );

    let recent = repo
        .list_orders(OrderListQuery::new(mine.id).limit(5))
        .expect("list should succeed");
    assert_eq!(recent.len(), 5);
    assert_eq!(recent[0].created_at, timestamp(20, 15));

    let served = repo
        .list_orders(OrderListQuery::new(mine.id).status(OrderStatus::Served))
        .expect("list should succeed");
    assert_eq!(served.len(), 7);
    let pending = repo
        .list_orders(OrderListQuery::new(mine.id).status(OrderStatus::Pending))
        .expect("list should succeed");
    assert!(pending.is_empty());
}

#[test]
fn orders_with_identical_timestamps_list_in_a_stable_order() {
    let db = TestDb::new("test_order_tie_stability.db");
    let repo = DieselRepository::new(db.pool());

    let restaurant = repo
        .create_restaurant(&NewRestaurant::new("user-1", "Tied Up"))
        .expect("create should succeed");

    // Three orders placed at the same instant.
    for _ in 0..3 {
        seed_order(
            &db.pool(),
            restaurant.id,
            Some("100.00"),
            Some("served"),
            timestamp(20, 12),
        );
    }

    let first_pass: Vec<i32> = repo
        .list_orders(OrderListQuery::new(restaurant.id).limit(5))
        .expect("list should succeed")
        .iter()
        .map(|order| order.id)
        .collect();
    let second_pass: Vec<i32> = repo
        .list_orders(OrderListQuery::new(restaurant.id).limit(5))
        .expect("list should succeed")
        .iter()
        .map(|order| order.id)
        .collect();

    assert_eq!(first_pass.len(), 3);
    // Ties fall back to the store's default order; whatever it is, repeated
    // reads must agree.
    assert_eq!(first_pass, second_pass);
}

#[test]
fn loose_order_rows_coerce_on_the_way_out() {
    let db = TestDb::new("test_order_coercion.db");
    let repo = DieselRepository::new(db.pool());

    let restaurant = repo
        .create_restaurant(&NewRestaurant::new("user-1", "Coerce Cafe"))
        .expect("create should succeed");
    seed_order(&db.pool(), restaurant.id, Some("abc"), None, timestamp(20, 9));

    let orders = repo
        .list_orders(OrderListQuery::new(restaurant.id))
        .expect("list should succeed");
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].total_amount, 0.0);
    assert_eq!(orders[0].status, OrderStatus::Pending);
}

#[test]
fn reservations_create_then_list_by_business_date() {
    let db = TestDb::new("test_reservation_listing.db");
    let repo = DieselRepository::new(db.pool());

    let restaurant = repo
        .create_restaurant(&NewRestaurant::new("user-1", "Booked Out"))
        .expect("create should succeed");

    let early = NewReservation::direct(
        restaurant.id,
        "T1",
        "Asha",
        "+91 98100 00001",
        2,
        NaiveDate::from_ymd_opt(2025, 8, 21).expect("valid date"),
        NaiveTime::from_hms_opt(19, 30, 0).expect("valid time"),
        timestamp(20, 9),
    );
    let late = NewReservation::direct(
        restaurant.id,
        "T4",
        "Ravi",
        "+91 98100 00002",
        6,
        NaiveDate::from_ymd_opt(2025, 8, 23).expect("valid date"),
        NaiveTime::from_hms_opt(20, 0, 0).expect("valid time"),
        timestamp(20, 10),
    )
    .with_email(Some("ravi@example.com"))
    .with_special_requests(Some("Window seat"));

    let created = repo
        .create_reservation(&early)
        .expect("create should succeed");
    assert_eq!(created.status, ReservationStatus::Confirmed);
    assert_eq!(created.source, ReservationSource::Direct);
    repo.create_reservation(&late).expect("create should succeed");

    let listed = repo
        .list_reservations(ReservationListQuery::new(restaurant.id))
        .expect("list should succeed");
    assert_eq!(listed.len(), 2);
    // Newest business date first, regardless of insertion order.
    assert_eq!(listed[0].customer_name, "Ravi");
    assert_eq!(listed[0].customer_email.as_deref(), Some("ravi@example.com"));
    assert_eq!(listed[0].special_requests.as_deref(), Some("Window seat"));
    assert_eq!(listed[1].customer_name, "Asha");

    let confirmed = repo
        .list_reservations(
            ReservationListQuery::new(restaurant.id).status(ReservationStatus::Confirmed),
        )
        .expect("list should succeed");
    assert_eq!(confirmed.len(), 2);
    let cancelled = repo
        .list_reservations(
            ReservationListQuery::new(restaurant.id).status(ReservationStatus::Cancelled),
        )
        .expect("list should succeed");
    assert!(cancelled.is_empty());
}

#[test]
fn tables_and_inventory_stay_in_their_scopes() {
    let db = TestDb::new("test_scoping.db");
    let repo = DieselRepository::new(db.pool());

    let mine = repo
        .create_restaurant(&NewRestaurant::new("user-1", "Mine"))
        .expect("create should succeed");
    let theirs = repo
        .create_restaurant(&NewRestaurant::new("user-2", "Theirs"))
        .expect("create should succeed");

    seed_table(&db.pool(), mine.id, Some("available"));
    seed_table(&db.pool(), mine.id, Some("occupied"));
    seed_table(&db.pool(), mine.id, None);
    seed_table(&db.pool(), theirs.id, Some("available"));

    let tables = repo
        .list_tables(TableListQuery::new(mine.id))
        .expect("list should succeed");
    assert_eq!(tables.len(), 3);
    assert_eq!(
        tables.iter().filter(|table| table.is_available()).count(),
        1
    );
    assert!(
        tables
            .iter()
            .any(|table| table.status == TableStatus::Unknown)
    );

    // Inventory hangs off the principal, not the restaurant.
    seed_inventory_item(&db.pool(), "user-1", "Basmati rice", Some("3"), Some("5"));
    seed_inventory_item(&db.pool(), "user-1", "Paneer", Some("abc"), Some("2"));
    seed_inventory_item(&db.pool(), "user-2", "Olive oil", Some("9"), Some("1"));

    let items = repo
        .list_inventory_items(InventoryListQuery::new("user-1"))
        .expect("list should succeed");
    assert_eq!(items.len(), 2);
    // Non-numeric stock reads as zero, which sits below any positive threshold.
    assert!(items.iter().all(|item| item.is_low_stock()));
}
