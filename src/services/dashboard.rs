use chrono::{Duration, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::RECENT_ORDERS_LIMIT;
use crate::auth::AuthenticatedUser;
use crate::domain::inventory::InventoryListQuery;
use crate::domain::order::{Order, OrderListQuery, OrderStatus};
use crate::domain::reservation::{ReservationListQuery, ReservationStatus};
use crate::domain::restaurant::Restaurant;
use crate::domain::table::TableListQuery;
use crate::repository::{
    InventoryReader, OrderReader, ReservationReader, RestaurantReader, TableReader,
};
use crate::services::ServiceResult;

/// Half-open "today" interval `[start, end)` in the deployment's local
/// calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl DayWindow {
    /// The calendar day containing `now`.
    pub fn containing(now: NaiveDateTime) -> Self {
        let start = now.date().and_time(NaiveTime::MIN);
        Self {
            start,
            end: start + Duration::days(1),
        }
    }

    /// Start-inclusive, end-exclusive membership test.
    pub fn contains(&self, instant: NaiveDateTime) -> bool {
        instant >= self.start && instant < self.end
    }
}

/// Keep only the orders created inside `window`.
///
/// The store behind the order collection answers equality predicates only,
/// so date windowing has to happen here after the fetch. Pure on purpose: it
/// is the one piece of query logic the storage layer cannot own.
pub fn filter_by_date_window<'a>(orders: &'a [Order], window: &DayWindow) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|order| window.contains(order.created_at))
        .collect()
}

/// The computed KPI set for one restaurant at one instant.
#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct DashboardStats {
    pub today_revenue: f64,
    pub today_orders: usize,
    pub active_reservations: usize,
    pub available_tables: usize,
    pub pending_orders: usize,
    pub low_stock_items: usize,
}

/// Data required to render the dashboard template.
#[derive(Debug, Default, Serialize)]
pub struct DashboardData {
    /// The resolved tenant, absent for freshly onboarded operators.
    pub restaurant: Option<Restaurant>,
    pub stats: DashboardStats,
    /// The five most recent orders, newest first.
    pub recent_orders: Vec<Order>,
}

/// Computes the KPI snapshot for the authenticated operator's restaurant.
///
/// An operator without a restaurant gets a zeroed snapshot, not an error.
/// Any repository failure aborts the whole computation; there are no partial
/// snapshots. `now` is injected so tests control the day window.
pub fn load_dashboard<R>(
    repo: &R,
    user: &AuthenticatedUser,
    now: NaiveDateTime,
) -> ServiceResult<DashboardData>
where
    R: RestaurantReader + OrderReader + ReservationReader + TableReader + InventoryReader + ?Sized,
{
    let Some(restaurant) = repo.get_restaurant_by_user(&user.sub)? else {
        return Ok(DashboardData::default());
    };

    let window = DayWindow::containing(now);

    let orders = repo.list_orders(OrderListQuery::new(restaurant.id))?;
    let todays_orders = filter_by_date_window(&orders, &window);
    let today_revenue = todays_orders.iter().map(|order| order.total_amount).sum();
    let today_orders = todays_orders.len();

    // Every confirmed booking counts, past dates included. The product copy
    // says "today and upcoming" but the number has always been computed
    // without a date filter; narrowing it is a pending product call.
    let confirmed_reservations = repo.list_reservations(
        ReservationListQuery::new(restaurant.id).status(ReservationStatus::Confirmed),
    )?;

    let tables = repo.list_tables(TableListQuery::new(restaurant.id))?;
    let available_tables = tables.iter().filter(|table| table.is_available()).count();

    let pending_orders =
        repo.list_orders(OrderListQuery::new(restaurant.id).status(OrderStatus::Pending))?;

    // Inventory hangs off the principal, not the restaurant.
    let inventory = repo.list_inventory_items(InventoryListQuery::new(&user.sub))?;
    let low_stock_items = inventory.iter().filter(|item| item.is_low_stock()).count();

    let recent_orders =
        repo.list_orders(OrderListQuery::new(restaurant.id).limit(RECENT_ORDERS_LIMIT))?;

    Ok(DashboardData {
        stats: DashboardStats {
            today_revenue,
            today_orders,
            active_reservations: confirmed_reservations.len(),
            available_tables,
            pending_orders: pending_orders.len(),
            low_stock_items,
        },
        restaurant: Some(restaurant),
        recent_orders,
    })
}
