use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{Order as DomainOrder, OrderStatus};
use crate::models::coerce_quantity;

/// Fallback table label for order rows that never got one.
const NO_TABLE: &str = "N/A";
/// Fallback customer name for counter sales.
const WALK_IN: &str = "Walk-in";

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub restaurant_id: i32,
    pub table_id: Option<String>,
    pub customer_name: Option<String>,
    pub total_amount: Option<String>,
    pub status: Option<String>,
    pub created_at: NaiveDateTime,
}

/// Insertable order row. The console never creates orders itself; this is
/// used by seeding and integration tests standing in for the order-taking
/// flow.
#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub restaurant_id: i32,
    pub table_id: Option<&'a str>,
    pub customer_name: Option<&'a str>,
    pub total_amount: Option<&'a str>,
    pub status: Option<&'a str>,
    pub created_at: NaiveDateTime,
}

impl From<Order> for DomainOrder {
    fn from(value: Order) -> Self {
        Self {
            id: value.id,
            restaurant_id: value.restaurant_id,
            table_id: value.table_id.unwrap_or_else(|| NO_TABLE.to_string()),
            customer_name: value.customer_name.unwrap_or_else(|| WALK_IN.to_string()),
            total_amount: coerce_quantity(value.total_amount.as_deref()),
            status: value
                .status
                .as_deref()
                .map(OrderStatus::from)
                .unwrap_or_default(),
            created_at: value.created_at,
        }
    }
}
