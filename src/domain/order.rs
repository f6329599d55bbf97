use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Lifecycle states for an order. Orders are written by the order-taking
/// flow, which lives outside this service; the console only reads them.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Served,
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value {
            "confirmed" => Self::Confirmed,
            "preparing" => Self::Preparing,
            "ready" => Self::Ready,
            "served" => Self::Served,
            "cancelled" => Self::Cancelled,
            // Upstream rows may carry anything; unknown values read as pending.
            _ => Self::Pending,
        }
    }
}

impl From<OrderStatus> for &'static str {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Served => "served",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

/// Domain representation of an order belonging to a restaurant.
///
/// Loosely typed storage fields (missing table label, missing customer,
/// non-numeric amount) are coerced exactly once on the way out of the
/// repository, so readers never deal with raw optionals.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Order {
    /// Unique identifier of the order.
    pub id: i32,
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Table label, `"N/A"` when the row carries none.
    pub table_id: String,
    /// Customer name, `"Walk-in"` when the row carries none.
    pub customer_name: String,
    /// Order total; non-numeric or missing amounts read as 0.
    pub total_amount: f64,
    /// Current lifecycle status, `pending` when the row carries none.
    pub status: OrderStatus,
    /// Timestamp for when the order was placed.
    pub created_at: NaiveDateTime,
}

/// Query definition used to list orders for a restaurant.
///
/// Only equality predicates are expressible here; the upstream record store
/// this console grew out of supports nothing richer, so date windowing is
/// applied client-side after the fetch.
#[derive(Debug, Clone)]
pub struct OrderListQuery {
    /// Owning restaurant identifier.
    pub restaurant_id: i32,
    /// Optional status filter.
    pub status: Option<OrderStatus>,
    /// Optional cap on the number of rows returned.
    pub limit: Option<i64>,
}

impl OrderListQuery {
    /// Construct a query that targets all orders belonging to `restaurant_id`,
    /// newest first.
    pub fn new(restaurant_id: i32) -> Self {
        Self {
            restaurant_id,
            status: None,
            limit: None,
        }
    }

    /// Filter the results by the provided status.
    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Cap the number of rows returned.
    pub fn limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_status_reads_as_pending() {
        assert_eq!(OrderStatus::from("on-fire"), OrderStatus::Pending);
        assert_eq!(OrderStatus::from(""), OrderStatus::Pending);
    }

    #[test]
    fn status_round_trips_through_text() {
        for status in [
            OrderStatus::Pending,
            OrderStatus::Confirmed,
            OrderStatus::Preparing,
            OrderStatus::Ready,
            OrderStatus::Served,
            OrderStatus::Cancelled,
        ] {
            let text: &str = status.into();
            assert_eq!(OrderStatus::from(text), status);
        }
    }
}
